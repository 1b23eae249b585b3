//! Delimited text reader and writer for songs

use super::FormatConfig;
use crate::error::{PlaylistError, Result};
use crate::model::Song;
use csv::StringRecord;
use std::io::{Read, Write};

/// Number of fields in a well-formed record
const FIELD_COUNT: usize = 3;

/// Songs parsed from a source, plus the records that were skipped
#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    /// Parsed songs, in file order
    pub songs: Vec<Song>,

    /// Records dropped for not having exactly three fields
    pub skipped: usize,
}

/// Write `songs` to `sink`, one record per song
///
/// Fields containing the delimiter, a quote or a line break are quoted.
pub fn write_songs<W: Write>(songs: &[Song], sink: W, config: &FormatConfig) -> Result<()> {
    let mut writer = config.writer_builder().from_writer(sink);

    for song in songs {
        writer.serialize(song)?;
    }

    writer.flush()?;
    Ok(())
}

/// Read every record from `source`
///
/// Records that do not have exactly three fields are skipped. A duration
/// that does not parse as a number fails the whole read.
pub fn read_songs<R: Read>(source: R, config: &FormatConfig) -> Result<ReadOutcome> {
    let mut reader = config.reader_builder().from_reader(source);
    let mut record = StringRecord::new();
    let mut outcome = ReadOutcome::default();
    let mut number: u64 = 0;

    while reader.read_record(&mut record)? {
        number += 1;

        if record.len() != FIELD_COUNT {
            log::warn!(
                "Skipping record {}: expected {} fields, found {}",
                number,
                FIELD_COUNT,
                record.len()
            );
            outcome.skipped += 1;
            continue;
        }

        let raw_duration = &record[2];
        let duration = raw_duration.trim().parse::<f64>().map_err(|_| {
            PlaylistError::InvalidDuration {
                record: number,
                value: raw_duration.to_string(),
            }
        })?;

        outcome
            .songs
            .push(Song::new(&record[0], &record[1], duration));
    }

    log::debug!(
        "Read {} records ({} skipped)",
        number,
        outcome.skipped
    );
    Ok(outcome)
}
