// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::super::*;
use std::fs;
use tempfile::TempDir;

use crate::ui::components::standard_registry;

/// Helper: writes `content` to `panel.json` in a fresh temp dir
fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("panel.json");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_load_partial_config() {
    let (_temp_dir, path) = create_test_config(
        r#"{
            "controlPanelElements": ["time_and_duration", "mute"],
            "addSeekBar": false
        }"#,
    );

    let partial = load_config_file(&path).unwrap();
    assert_eq!(
        partial.control_panel_elements,
        Some(vec!["time_and_duration".to_string(), "mute".to_string()])
    );
    assert_eq!(partial.add_seek_bar, Some(false));
    assert_eq!(partial.overflow_menu_buttons, None);
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");

    match load_config_file(&path) {
        Err(ConfigError::NotFound(p)) => assert_eq!(p, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_json() {
    let (_temp_dir, path) = create_test_config("{ \"addSeekBar\": ");
    assert!(matches!(load_config_file(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn test_wrong_shape_names_field() {
    let (_temp_dir, path) = create_test_config(r#"{ "addSeekBar": 1 }"#);
    let err = load_config_file(&path).unwrap_err();
    assert!(err.is_invalid_config());
    assert!(err.to_string().contains("addSeekBar"));
}

#[test]
fn test_save_then_load_resolves_identically() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.json");

    let registry = standard_registry().unwrap();
    let original = ConfigResolver::new(registry)
        .resolve(
            &PartialConfiguration::new()
                .control_panel_elements(["fullscreen", "overflow_menu"])
                .overflow_menu_buttons(["cast"])
                .add_seek_bar(false),
        )
        .unwrap();

    save_config_file(&path, &original).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.ends_with('\n'));

    let reloaded = ConfigResolver::new(registry)
        .resolve(&load_config_file(&path).unwrap())
        .unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn test_atomic_write_replaces_content() {
    let (_temp_dir, path) = create_test_config("old");

    write_atomically(&path, "new content").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new content");

    // No temporary files left behind
    let entries = fs::read_dir(path.parent().unwrap()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_expand_path_tilde() {
    if let Ok(home) = std::env::var("HOME") {
        let expanded = expand_path(Path::new("~/panel.json")).unwrap();
        assert_eq!(expanded, Path::new(&home).join("panel.json"));
    }

    let untouched = expand_path(Path::new("/tmp/panel.json")).unwrap();
    assert_eq!(untouched, PathBuf::from("/tmp/panel.json"));
}
