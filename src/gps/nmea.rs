//! NMEA 0183 field helpers: checksum and coordinate parsing.

/// XOR of every byte between `$` and `*`.
pub fn checksum(body: &[u8]) -> u8 {
    body.iter().fold(0, |acc, b| acc ^ b)
}

/// Parse the two hex digits after `*`.
pub fn parse_checksum(hex: &str) -> Option<u8> {
    if hex.len() != 2 {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}

/// Parse `ddmm.mmmm` / `dddmm.mmmm` plus hemisphere into signed degrees.
///
/// Returns `None` for empty fields, malformed numbers, minutes ≥ 60,
/// unknown hemispheres, or results outside the valid range.
pub fn parse_coordinate(value: &str, hemisphere: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    let raw: f64 = value.parse().ok()?;
    if raw < 0.0 {
        return None;
    }
    let degrees = (raw / 100.0).trunc();
    let minutes = raw - degrees * 100.0;
    if minutes >= 60.0 {
        return None;
    }
    let magnitude = degrees + minutes / 60.0;

    let (signed, limit) = match hemisphere {
        "N" => (magnitude, 90.0),
        "S" => (-magnitude, 90.0),
        "E" => (magnitude, 180.0),
        "W" => (-magnitude, 180.0),
        _ => return None,
    };
    (magnitude <= limit).then_some(signed)
}
