//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that drives `HelmetService` cycles
//! against mock adapters. All tests run on the host (x86_64) with no
//! real hardware required.

mod gps_window_tests;
mod loop_tests;
mod mock_hw;
