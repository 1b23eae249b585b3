use super::Song;
use crate::error::Result;
use crate::format::{self, FormatConfig};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Where `Playlist::add_song` places a new song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Append to the tail
    #[default]
    End,

    /// Insert at this zero-based index; indices at or past the end append
    At(usize),
}

impl Position {
    /// Convert a signed, user-entered position
    ///
    /// `-1` means the end. Any other negative value inserts at the front.
    pub fn from_signed(position: i64) -> Self {
        match position {
            -1 => Position::End,
            p if p < 0 => Position::At(0),
            p => Position::At(usize::try_from(p).unwrap_or(usize::MAX)),
        }
    }
}

/// Field a playlist can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Artist,
}

/// Result of appending a playlist file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Songs appended to the playlist
    pub loaded: usize,

    /// Records skipped for having the wrong number of fields
    pub skipped: usize,
}

/// An ordered list of songs plus a repeat flag
///
/// Insertion order is playback order. Duplicate songs are allowed.
/// Out-of-range indices are never an error: the operation does nothing
/// and reports that through its return value.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    songs: Vec<Song>,
    repeat: bool,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self {
            songs: Vec::new(),
            repeat: false,
        }
    }

    /// Add a song at `position`
    pub fn add_song(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: f64,
        position: Position,
    ) {
        self.insert(Song::new(title, artist, duration), position);
    }

    /// Append an already built song
    pub fn push(&mut self, song: Song) {
        self.insert(song, Position::End);
    }

    fn insert(&mut self, song: Song, position: Position) {
        match position {
            Position::At(index) if index < self.songs.len() => {
                log::debug!("Inserting '{}' at {}", song.title, index);
                self.songs.insert(index, song);
            }
            _ => {
                log::debug!("Appending '{}'", song.title);
                self.songs.push(song);
            }
        }
    }

    /// Remove every song titled exactly `title`
    ///
    /// Returns how many songs were removed.
    pub fn remove_by_title(&mut self, title: &str) -> usize {
        let before = self.songs.len();
        self.songs.retain(|song| song.title != title);
        let removed = before - self.songs.len();
        log::debug!("Removed {} song(s) titled '{}'", removed, title);
        removed
    }

    /// Remove the song at `index`, if there is one
    pub fn remove_at(&mut self, index: usize) -> Option<Song> {
        if index < self.songs.len() {
            Some(self.songs.remove(index))
        } else {
            None
        }
    }

    /// Move the song at `from` so it ends up at `to`
    ///
    /// The song is taken out first and `to` indexes the shortened list, so
    /// moving `0` to `1` in `[A, B, C]` gives `[B, A, C]`. Both indices must
    /// be valid for the current length, otherwise nothing happens and
    /// `false` is returned.
    pub fn move_song(&mut self, from: usize, to: usize) -> bool {
        let len = self.songs.len();
        if from >= len || to >= len {
            return false;
        }

        let song = self.songs.remove(from);
        self.songs.insert(to, song);
        true
    }

    /// Reverse the playlist in place
    pub fn reverse(&mut self) {
        self.songs.reverse();
    }

    /// Shuffle with the thread-local random generator
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle with the given random generator (Fisher-Yates)
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.songs.shuffle(rng);
    }

    pub fn enable_repeat(&mut self) {
        self.repeat = true;
    }

    pub fn disable_repeat(&mut self) {
        self.repeat = false;
    }

    /// Flip the repeat flag and return the new value
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    pub fn is_repeat_enabled(&self) -> bool {
        self.repeat
    }

    /// Songs whose title or artist is exactly `query`, in playlist order
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter().filter(move |song| song.matches(query))
    }

    pub fn sort_by_title(&mut self) {
        self.sort_by(SortKey::Title);
    }

    pub fn sort_by_artist(&mut self) {
        self.sort_by(SortKey::Artist);
    }

    /// Stable sort on `key`; songs with equal keys keep their order
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Title => self.songs.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Artist => self.songs.sort_by(|a, b| a.artist.cmp(&b.artist)),
        }
    }

    /// One `"<index>. <title> by <artist> (<duration> mins)"` line per song
    pub fn display_lines(&self) -> Vec<String> {
        self.songs
            .iter()
            .enumerate()
            .map(|(i, song)| format!("{}. {}", i, song))
            .collect()
    }

    /// Sum of all durations, in minutes
    pub fn total_duration(&self) -> f64 {
        self.songs.iter().map(|song| song.duration).sum()
    }

    /// Remove every song. The repeat flag is kept.
    pub fn clear(&mut self) {
        self.songs.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// Number of songs in this playlist
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Write all songs to `sink` as comma-delimited text
    pub fn save<W: Write>(&self, sink: W) -> Result<()> {
        self.save_with(sink, &FormatConfig::default())
    }

    pub fn save_with<W: Write>(&self, sink: W, config: &FormatConfig) -> Result<()> {
        format::write_songs(&self.songs, sink, config)?;
        log::info!("Saved {} songs", self.songs.len());
        Ok(())
    }

    /// Save to `path`, replacing whatever the file held
    pub fn save_to_file(&self, path: &Path, config: &FormatConfig) -> Result<()> {
        let file = File::create(path)?;
        self.save_with(BufWriter::new(file), config)
    }

    /// Append the songs read from `source`
    ///
    /// On error the playlist is left as it was.
    pub fn load<R: Read>(&mut self, source: R) -> Result<LoadSummary> {
        self.load_with(source, &FormatConfig::default())
    }

    pub fn load_with<R: Read>(&mut self, source: R, config: &FormatConfig) -> Result<LoadSummary> {
        let outcome = format::read_songs(source, config)?;

        let summary = LoadSummary {
            loaded: outcome.songs.len(),
            skipped: outcome.skipped,
        };
        for song in outcome.songs {
            self.push(song);
        }

        log::info!(
            "Loaded {} songs ({} records skipped)",
            summary.loaded,
            summary.skipped
        );
        Ok(summary)
    }

    /// Append the songs stored in the file at `path`
    pub fn load_from_file(&mut self, path: &Path, config: &FormatConfig) -> Result<LoadSummary> {
        let file = File::open(path)?;
        self.load_with(BufReader::new(file), config)
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}
