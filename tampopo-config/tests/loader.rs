use std::fs;

use tampopo_config::{
    ConfigLoadError, ConfigLoader, InteractionConfig, InteractionConfigSource,
};
use tempfile::tempdir;

#[test]
fn falls_back_to_defaults_without_sources() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::new()
        .with_root(dir.path())
        .load()
        .expect("defaults load");

    assert_eq!(load.source, InteractionConfigSource::Default);
    assert_eq!(load.config, InteractionConfig::default());
    assert!(load.warnings.is_empty());
}

#[test]
fn discovers_default_candidate_under_root() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/interaction.toml");
    fs::write(
        &path,
        "[effects]\nstroke_range_px = 8.0\nfade_range_px = 32.0\n",
    )
    .unwrap();

    let load = ConfigLoader::new().with_root(dir.path()).load().unwrap();

    assert_eq!(load.source, InteractionConfigSource::File(path));
    assert_eq!(load.config.effects.stroke_range_px, 8.0);
    assert_eq!(load.config.effects.fade_range_px, 32.0);
}

#[test]
fn explicit_path_wins_over_inline_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tuning.json");
    fs::write(&path, r#"{"search":{"result_cap":5}}"#).unwrap();

    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_inline_json(r#"{"search":{"result_cap":7}}"#)
        .with_path(&path)
        .load()
        .unwrap();

    assert_eq!(load.source, InteractionConfigSource::EnvPath(path));
    assert_eq!(load.config.search.result_cap, 5);
}

#[test]
fn inline_json_is_used_when_no_path_given() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_inline_json(r#"{"gesture":{"dead_zone_px":10.0}}"#)
        .load()
        .unwrap();

    assert_eq!(load.source, InteractionConfigSource::EnvInline);
    assert_eq!(load.config.gesture.dead_zone_px, 10.0);
}

#[test]
fn extensionless_file_accepts_toml_or_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tuning");
    fs::write(&path, r#"{"momentum":{"max_step_px":48.0}}"#).unwrap();

    let load = ConfigLoader::new().with_path(&path).load().unwrap();
    assert_eq!(load.config.momentum.max_step_px, 48.0);
}

#[test]
fn guard_rails_reject_bad_values() {
    let dir = tempdir().expect("tempdir");
    let err = ConfigLoader::new()
        .with_root(dir.path())
        .with_inline_json(r#"{"momentum":{"friction_per_frame":1.2}}"#)
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = ConfigLoader::new().with_path(&path).load().unwrap_err();

    match err {
        ConfigLoadError::Read { path: reported, .. } => {
            assert_eq!(reported, path)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("interaction.toml");
    fs::write(&path, "[momentum\nfriction_per_frame = ").unwrap();

    let err = ConfigLoader::new().with_root(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}
