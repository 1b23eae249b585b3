//! Round-trip validation of playlist files

use crate::format::{self, FormatConfig};
use crate::model::{Playlist, Song};
use anyhow::{Context, Result};
use std::path::Path;

/// What validating a playlist file found
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Songs parsed from the file
    pub songs: usize,

    /// Records skipped for having the wrong number of fields
    pub skipped: usize,

    /// Total duration of the parsed songs, in minutes
    pub total_duration: f64,

    /// Whether writing the songs back out and re-reading them gave the same songs
    pub roundtrip_ok: bool,
}

/// Validate a playlist file by loading it and round-tripping it in memory
///
/// # Arguments
/// * `path` - Playlist file to check
/// * `config` - Format the file is expected to use
///
/// # Returns
/// A report on success. Unreadable files and non-numeric durations are errors.
pub fn validate_playlist_file(path: &Path, config: &FormatConfig) -> Result<ValidationReport> {
    log::info!("Validating playlist at: {:?}", path);

    let mut playlist = Playlist::new();
    let summary = playlist
        .load_from_file(path, config)
        .with_context(|| format!("Failed to load playlist: {:?}", path))?;

    log::info!(
        "Parsed {} songs, skipped {} malformed records",
        summary.loaded,
        summary.skipped
    );

    let mut buffer = Vec::new();
    playlist
        .save_with(&mut buffer, config)
        .context("Failed to re-serialise playlist")?;

    let reread = format::read_songs(buffer.as_slice(), config)
        .context("Failed to re-read serialised playlist")?;

    let roundtrip_ok = reread.skipped == 0
        && reread.songs.len() == playlist.len()
        && reread
            .songs
            .iter()
            .zip(playlist.iter())
            .all(|(a, b)| same_song(a, b));

    if roundtrip_ok {
        log::info!("Round trip reproduced all {} songs", playlist.len());
    } else {
        log::error!("Round trip changed the playlist contents");
    }

    Ok(ValidationReport {
        songs: summary.loaded,
        skipped: summary.skipped,
        total_duration: playlist.total_duration(),
        roundtrip_ok,
    })
}

/// Field-wise equality that also treats identical NaN durations as equal
fn same_song(a: &Song, b: &Song) -> bool {
    a.title == b.title
        && a.artist == b.artist
        && (a.duration == b.duration || a.duration.to_bits() == b.duration.to_bits())
}
