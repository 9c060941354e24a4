//! GPS receiver decoder.
//!
//! Bytes from the receiver UART are fed in one at a time during the
//! acquisition window. The decoder assembles `$...*hh` sentences, checks
//! them, and commits position data from RMC and GGA sentences.
//!
//! A committed fix stays valid until a newer fix overwrites it; sentences
//! reporting "no fix" do not clear it. The decoder lives for the whole run
//! and is never reset.

pub mod nmea;

use log::debug;

/// Longest legal NMEA sentence, `$` to line end.
pub const MAX_SENTENCE_LEN: usize = 82;

/// A decoded position solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Sentence types the decoder commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SentenceKind {
    Rmc,
    Gga,
}

/// Byte-at-a-time NMEA decoder with cross-cycle fix memory.
pub struct GpsDecoder {
    buffer: heapless::Vec<u8, MAX_SENTENCE_LEN>,
    in_sentence: bool,
    location: Option<GpsFix>,
    satellites: u8,
    passed_checksums: u32,
    failed_checksums: u32,
    sentences_with_fix: u32,
}

impl Default for GpsDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GpsDecoder {
    pub fn new() -> Self {
        Self {
            buffer: heapless::Vec::new(),
            in_sentence: false,
            location: None,
            satellites: 0,
            passed_checksums: 0,
            failed_checksums: 0,
            sentences_with_fix: 0,
        }
    }

    /// Feed one byte. Returns `true` when it completed a checked sentence
    /// of a known type.
    pub fn encode(&mut self, byte: u8) -> bool {
        match byte {
            b'$' => {
                self.buffer.clear();
                self.in_sentence = true;
                false
            }
            b'\r' | b'\n' => {
                if !self.in_sentence {
                    return false;
                }
                self.in_sentence = false;
                self.commit()
            }
            _ if self.in_sentence => {
                if self.buffer.push(byte).is_err() {
                    // Overlong: drop the partial sentence.
                    self.in_sentence = false;
                    self.buffer.clear();
                }
                false
            }
            _ => false,
        }
    }

    /// Last committed fix, if one was ever decoded.
    pub fn location(&self) -> Option<GpsFix> {
        self.location
    }

    /// Whether a fix is currently known.
    pub fn has_fix(&self) -> bool {
        self.location.is_some()
    }

    /// Satellites in use from the last GGA sentence.
    pub fn satellites(&self) -> u8 {
        self.satellites
    }

    pub fn passed_checksums(&self) -> u32 {
        self.passed_checksums
    }

    pub fn failed_checksums(&self) -> u32 {
        self.failed_checksums
    }

    /// Sentences that carried a usable position.
    pub fn sentences_with_fix(&self) -> u32 {
        self.sentences_with_fix
    }

    fn commit(&mut self) -> bool {
        let Ok(text) = core::str::from_utf8(&self.buffer) else {
            self.failed_checksums += 1;
            return false;
        };
        let Some((body, hex)) = text.split_once('*') else {
            self.failed_checksums += 1;
            return false;
        };
        if nmea::parse_checksum(hex) != Some(nmea::checksum(body.as_bytes())) {
            self.failed_checksums += 1;
            debug!("GPS: checksum mismatch in {}", body);
            return false;
        }
        self.passed_checksums += 1;

        let mut fields = body.split(',');
        let kind = match fields.next() {
            Some("GPRMC" | "GNRMC") => SentenceKind::Rmc,
            Some("GPGGA" | "GNGGA") => SentenceKind::Gga,
            _ => return false,
        };
        let fields: heapless::Vec<&str, 20> = fields.take(20).collect();

        let fix = match kind {
            SentenceKind::Rmc => Self::rmc_fix(&fields),
            SentenceKind::Gga => {
                if let Some(sats) = fields.get(6).and_then(|s| s.parse().ok()) {
                    self.satellites = sats;
                }
                Self::gga_fix(&fields)
            }
        };

        if let Some(fix) = fix {
            self.location = Some(fix);
            self.sentences_with_fix += 1;
        }
        true
    }

    // RMC after the type: time, status, lat, N/S, lon, E/W, ...
    fn rmc_fix(fields: &[&str]) -> Option<GpsFix> {
        if fields.get(1) != Some(&"A") {
            return None;
        }
        Self::position(fields, 2)
    }

    // GGA after the type: time, lat, N/S, lon, E/W, quality, sats, ...
    fn gga_fix(fields: &[&str]) -> Option<GpsFix> {
        let quality: u8 = fields.get(5)?.parse().ok()?;
        if quality == 0 {
            return None;
        }
        Self::position(fields, 1)
    }

    fn position(fields: &[&str], at: usize) -> Option<GpsFix> {
        let latitude = nmea::parse_coordinate(fields.get(at)?, fields.get(at + 1)?)?;
        let longitude = nmea::parse_coordinate(fields.get(at + 2)?, fields.get(at + 3)?)?;
        Some(GpsFix { latitude, longitude })
    }
}
