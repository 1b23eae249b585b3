//! Validation utilities
//!
//! Checks that a playlist file parses and survives a save/load round trip

mod roundtrip;

pub use roundtrip::{validate_playlist_file, ValidationReport};
