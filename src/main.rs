use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use playlist_manager::validation::validate_playlist_file;
use playlist_manager::{FormatConfig, Playlist, Position, SortKey};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Manage a playlist stored as delimited text", long_about = None)]
struct Args {
    /// Playlist file to operate on (created on first save)
    #[arg(short = 'f', long, default_value = "playlist.csv")]
    file: String,

    /// Field delimiter used in playlist files
    #[arg(short = 'd', long, default_value = ",")]
    delimiter: char,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every song with its position
    List,

    /// Add a song
    Add {
        title: String,
        artist: String,
        /// Duration in minutes
        #[arg(allow_negative_numbers = true)]
        duration: f64,
        /// Zero-based position (-1 for end)
        #[arg(short = 'p', long, default_value = "-1", allow_negative_numbers = true)]
        position: i64,
    },

    /// Remove every song with this exact title
    Remove { title: String },

    /// Remove the song at a position
    RemoveAt { index: usize },

    /// Move a song from one position to another
    Move { from: usize, to: usize },

    /// Reverse the playlist
    Reverse,

    /// Shuffle the playlist
    Shuffle,

    /// Find songs by exact title or artist
    Search { query: String },

    /// Sort the playlist
    Sort {
        #[arg(value_enum)]
        by: SortField,
    },

    /// Append the songs from another playlist file
    Import { source: PathBuf },

    /// Start a new, empty playlist
    New {
        /// Save the current contents here first
        #[arg(long)]
        save_to: Option<PathBuf>,
    },

    /// Check that the playlist file parses and round-trips
    Check,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortField {
    Title,
    Artist,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Title => SortKey::Title,
            SortField::Artist => SortKey::Artist,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let delimiter = u8::try_from(args.delimiter)
        .with_context(|| format!("Delimiter must be a single-byte character: {:?}", args.delimiter))?;
    let config = FormatConfig::new().with_delimiter(delimiter);

    // Expand ~ in paths
    let path = PathBuf::from(shellexpand::tilde(&args.file).as_ref());

    if let Command::Check = args.command {
        let report = validate_playlist_file(&path, &config)?;
        println!(
            "{} songs, {} skipped records, {} mins total",
            report.songs, report.skipped, report.total_duration
        );
        if !report.roundtrip_ok {
            anyhow::bail!("Playlist {:?} does not survive a save/load round trip", path);
        }
        log::info!("✅ Validation passed!");
        return Ok(());
    }

    let mut playlist = open_playlist(&path, &config)?;
    let changed = run(&mut playlist, args.command, &config)?;

    if changed {
        playlist
            .save_to_file(&path, &config)
            .with_context(|| format!("Failed to save playlist: {:?}", path))?;
        log::info!("Playlist saved to {:?}", path);
    }

    Ok(())
}

/// Load the playlist at `path`, or start empty if it does not exist yet
fn open_playlist(path: &Path, config: &FormatConfig) -> Result<Playlist> {
    let mut playlist = Playlist::new();

    if path.exists() {
        playlist
            .load_from_file(path, config)
            .with_context(|| format!("Failed to load playlist: {:?}", path))?;
    } else {
        log::info!("No playlist at {:?}, starting empty", path);
    }

    Ok(playlist)
}

/// Apply one command. Returns whether the playlist needs saving.
fn run(playlist: &mut Playlist, command: Command, config: &FormatConfig) -> Result<bool> {
    let changed = match command {
        Command::List => {
            print_playlist(playlist);
            false
        }
        Command::Add {
            title,
            artist,
            duration,
            position,
        } => {
            playlist.add_song(title, artist, duration, Position::from_signed(position));
            print_playlist(playlist);
            true
        }
        Command::Remove { title } => {
            let removed = playlist.remove_by_title(&title);
            println!("Removed {} song(s).", removed);
            removed > 0
        }
        Command::RemoveAt { index } => match playlist.remove_at(index) {
            Some(song) => {
                println!("Removed {}", song);
                true
            }
            None => {
                println!("No song at position {}.", index);
                false
            }
        },
        Command::Move { from, to } => {
            let moved = playlist.move_song(from, to);
            if !moved {
                println!("Positions out of range, nothing moved.");
            }
            print_playlist(playlist);
            moved
        }
        Command::Reverse => {
            playlist.reverse();
            print_playlist(playlist);
            true
        }
        Command::Shuffle => {
            playlist.shuffle();
            print_playlist(playlist);
            true
        }
        Command::Search { query } => {
            let mut found = 0;
            for song in playlist.search(&query) {
                println!("Found: {}", song);
                found += 1;
            }
            if found == 0 {
                println!("Song not found.");
            }
            false
        }
        Command::Sort { by } => {
            playlist.sort_by(by.into());
            print_playlist(playlist);
            true
        }
        Command::Import { source } => {
            let source = PathBuf::from(shellexpand::tilde(&source.to_string_lossy()).as_ref());
            let summary = playlist
                .load_from_file(&source, config)
                .with_context(|| format!("Failed to import playlist: {:?}", source))?;
            println!(
                "Imported {} song(s), skipped {} record(s).",
                summary.loaded, summary.skipped
            );
            summary.loaded > 0
        }
        Command::New { save_to } => {
            if let Some(target) = save_to {
                playlist
                    .save_to_file(&target, config)
                    .with_context(|| format!("Failed to save playlist: {:?}", target))?;
                println!("Previous playlist saved to {:?}.", target);
            }
            playlist.clear();
            println!("New playlist created.");
            true
        }
        Command::Check => false,
    };

    Ok(changed)
}

fn print_playlist(playlist: &Playlist) {
    if playlist.is_empty() {
        println!("Playlist is empty.");
        return;
    }

    for line in playlist.display_lines() {
        println!("{}", line);
    }
    println!("Total Duration: {} mins", playlist.total_duration());
}
