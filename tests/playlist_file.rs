use playlist_manager::{FormatConfig, Playlist, PlaylistError, Position};
use std::fs;
use tempfile::TempDir;

/// Create a small test playlist
fn create_test_playlist() -> Playlist {
    let mut playlist = Playlist::new();
    playlist.add_song("Yesterday", "The Beatles", 2.05, Position::End);
    playlist.add_song("Hello, Goodbye", "The Beatles", 3.5, Position::End);
    playlist.add_song("Say \"Hi\"", "Someone", 4.0, Position::At(0));
    playlist
}

#[test]
fn test_save_and_reload_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("playlist.csv");
    let config = FormatConfig::default();

    let playlist = create_test_playlist();
    playlist.save_to_file(&path, &config).expect("save failed");

    let mut restored = Playlist::new();
    let summary = restored.load_from_file(&path, &config).expect("load failed");

    assert_eq!(summary.loaded, 3);
    assert_eq!(summary.skipped, 0);
    assert_eq!(restored.songs(), playlist.songs());
}

#[test]
fn test_save_replaces_existing_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("playlist.csv");
    fs::write(&path, "Old,Entry,1\nOld,Entry,2\nOld,Entry,3\nOld,Entry,4\n").unwrap();

    let mut playlist = Playlist::new();
    playlist.add_song("New", "Entry", 1.0, Position::End);
    playlist.save_to_file(&path, &FormatConfig::default()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("Old"));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_load_appends_to_existing_songs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("more.csv");
    fs::write(&path, "Imported,Artist,5\n").unwrap();

    let mut playlist = create_test_playlist();
    playlist.load_from_file(&path, &FormatConfig::default()).unwrap();

    assert_eq!(playlist.len(), 4);
    assert_eq!(playlist.get(3).unwrap().title, "Imported");
    assert_eq!(playlist.get(0).unwrap().title, "Say \"Hi\"");
}

#[test]
fn test_load_rejects_bad_duration() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bad.csv");
    fs::write(&path, "Fine,Artist,3\nSong,Artist,notanumber\n").unwrap();

    let mut playlist = create_test_playlist();
    let err = playlist
        .load_from_file(&path, &FormatConfig::default())
        .unwrap_err();

    assert!(matches!(err, PlaylistError::InvalidDuration { record: 2, .. }));
    assert_eq!(playlist.len(), 3);
    assert!(playlist.search("Fine").next().is_none());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut playlist = create_test_playlist();

    let err = playlist
        .load_from_file(&temp_dir.path().join("missing.csv"), &FormatConfig::default())
        .unwrap_err();

    assert!(matches!(err, PlaylistError::Io(_)));
    assert_eq!(playlist.len(), 3);
}

#[test]
fn test_save_to_unwritable_path_leaves_playlist_alone() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("no/such/dir/playlist.csv");
    let playlist = create_test_playlist();
    let before = playlist.songs().to_vec();

    let err = playlist
        .save_to_file(&path, &FormatConfig::default())
        .unwrap_err();

    assert!(matches!(err, PlaylistError::Io(_)));
    assert_eq!(playlist.songs(), before.as_slice());
}

#[test]
fn test_tab_delimited_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("playlist.tsv");
    let config = FormatConfig::new().with_delimiter(b'\t');

    let playlist = create_test_playlist();
    playlist.save_to_file(&path, &config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Hello, Goodbye\tThe Beatles\t"));

    let mut restored = Playlist::new();
    restored.load_from_file(&path, &config).unwrap();
    assert_eq!(restored.songs(), playlist.songs());
}

#[test]
fn test_new_playlist_flow() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let backup = temp_dir.path().join("backup.csv");
    let config = FormatConfig::default();

    let mut playlist = create_test_playlist();
    playlist.save_to_file(&backup, &config).unwrap();
    playlist.clear();
    assert!(playlist.is_empty());

    playlist.load_from_file(&backup, &config).unwrap();
    assert_eq!(playlist.len(), 3);
}
