// SPDX-License-Identifier: MPL-2.0
use wipedeck::config::{self, Config};
use wipedeck::domain::slider::{apply_move, initial_positions};
use wipedeck::i18n::fluent::I18n;
use wipedeck::ui::theming::ThemeMode;

use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_configured_constraints_drive_the_solver() {
    // Tighter separation and a wider edge buffer, persisted and reloaded.
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let config = Config {
        min_separation: Some(10.0),
        edge_buffer: Some(5.0),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let constraints = loaded.constraints();

    let positions = apply_move(&initial_positions(3), 0, 100.0, constraints);
    assert!((positions[1] - 95.0).abs() < 0.001);
    assert!((positions[0] - 85.0).abs() < 0.001);
}

#[test]
fn test_out_of_range_settings_are_clamped_on_load() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "min_separation = 400.0\nedge_buffer = -2.0\ncompare_height = 50.0\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert!(loaded.constraints().min_separation.is_max());
    assert!(loaded.constraints().edge_buffer.is_min());
    assert!((loaded.compare_height().value() - 200.0).abs() < f32::EPSILON);
}

#[test]
fn test_theme_mode_round_trips_through_toml() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let config = Config {
        theme_mode: ThemeMode::Dark,
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);
}
