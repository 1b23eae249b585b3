//! Playlist data model
//!
//! A `Playlist` owns an ordered list of `Song` values. It knows nothing
//! about how it is presented; the CLI (or any other front end) only calls
//! its public methods.

mod playlist;
mod song;

pub use playlist::{LoadSummary, Playlist, Position, SortKey};
pub use song::Song;
