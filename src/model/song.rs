use serde::{Deserialize, Serialize};
use std::fmt;

/// A single song in a playlist
///
/// Field order matters: it is the column order of the playlist file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Duration in minutes (may be fractional, sign is not checked)
    pub duration: f64,
}

impl Song {
    /// Create a new song
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
        }
    }

    /// Whether the title or the artist is exactly `query`
    pub fn matches(&self, query: &str) -> bool {
        self.title == query || self.artist == query
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the trailing ".0" on whole minutes
        write!(f, "{} by {} ({:?} mins)", self.title, self.artist, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Song::new("A", "X", 3.5).to_string(), "A by X (3.5 mins)");
        assert_eq!(Song::new("B", "Y", 4.0).to_string(), "B by Y (4.0 mins)");
    }

    #[test]
    fn test_matches_is_exact() {
        let song = Song::new("Hello", "Adele", 4.9);

        assert!(song.matches("Hello"));
        assert!(song.matches("Adele"));
        assert!(!song.matches("hello"));
        assert!(!song.matches("Adel"));
        assert!(!song.matches(" Adele"));
    }

    #[test]
    fn test_negative_duration_accepted() {
        let song = Song::new("", "", -1.0);
        assert_eq!(song.duration, -1.0);
        assert!(song.title.is_empty());
    }
}
