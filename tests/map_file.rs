use std::fs;

use egui::Pos2;
use map_maker::file_handler::{self, FileHandler, group_records};
use map_maker::{AppConfig, DisplayList, MapArea, MapError, Tool};
use tempfile::tempdir;

#[test]
fn test_incomplete_trailing_record_is_dropped() {
    let groups = group_records((0..12).map(|i| format!("line {i}")));
    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(groups[&0][0], "line 0");
    assert_eq!(groups[&1][4], "line 9");
}

#[test]
fn test_empty_input_has_no_records() {
    assert!(group_records(Vec::<String>::new()).is_empty());
    assert!(group_records(["a", "b"]).is_empty());
}

#[test]
fn test_saved_map_loads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dungeon.map");

    let mut area = MapArea::default();
    area.set_tool(Tool::Room);
    area.set_option(4);
    area.press(Pos2::new(50.0, 50.0));
    area.drag(Pos2::new(150.0, 120.0));
    area.release(Pos2::new(150.0, 120.0));

    file_handler::save_map(&path, &area.convert_to_string()).unwrap();
    let records = file_handler::load_map(&path).unwrap();
    assert_eq!(records.len(), 1);

    let mut restored = MapArea::default();
    assert_eq!(restored.convert_from_string(&records), 1);
    assert_eq!(restored.display_list().len(), 5);
    assert_eq!(restored.convert_to_string(), area.convert_to_string());
}

#[test]
fn test_loading_a_missing_map_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nowhere.map");
    match file_handler::load_map(&path) {
        Err(MapError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_text_resources_join_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("info.txt");
    fs::write(&path, "Map Maker\nversion 1\n").unwrap();

    assert_eq!(file_handler::load_text_file(&path, "\n"), "Map Maker\nversion 1");
    assert_eq!(file_handler::load_text_file(&path, " | "), "Map Maker | version 1");
}

#[test]
fn test_missing_text_resource_names_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("help.txt");

    let text = file_handler::load_text_file(&path, "\n");
    assert!(text.contains(&path.display().to_string()));
    assert!(text.contains("was probably not found"));
}

#[test]
fn test_file_handler_follows_the_last_map() {
    let mut files = FileHandler::new(&AppConfig::default());
    assert_eq!(files.extension(), "map");
    assert_eq!(files.directory(), AppConfig::default().maps_directory);

    files.remember_directory(std::path::Path::new("/tmp/maps/keep.map"));
    assert_eq!(files.directory(), std::path::Path::new("/tmp/maps"));

    // A bare file name has no folder to remember
    files.remember_directory(std::path::Path::new("keep.map"));
    assert_eq!(files.directory(), std::path::Path::new("/tmp/maps"));
}
