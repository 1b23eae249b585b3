//! Playlist Manager - ordered song collections
//!
//! This library keeps an ordered playlist of songs and supports inserting,
//! removing, reordering, shuffling, searching and sorting them, plus
//! saving and loading playlists as delimited text.

pub mod error;
pub mod format;
pub mod model;
pub mod validation;

pub use error::{PlaylistError, Result};
pub use format::FormatConfig;
pub use model::{LoadSummary, Playlist, Position, Song, SortKey};
