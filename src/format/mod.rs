//! Playlist file format
//!
//! Playlists are stored as delimited text, one `title,artist,duration`
//! record per line, without a header row.

pub mod config;
mod codec;

pub use codec::{read_songs, write_songs, ReadOutcome};
pub use config::FormatConfig;
