//! Tests for bootstrap configuration and catalogue loading
//!
//! Tests that manipulate VIDCAT_CONFIG or VIDCAT_CATALOGUE are marked with
//! #[serial] so they never run in parallel with each other.

use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use vidcat_common::config::{
    resolve_catalogue_path, resolve_config_path, TomlConfig, CATALOGUE_ENV_VAR, CONFIG_ENV_VAR,
};
use vidcat_common::{Catalogue, Error, VideoLibrary};

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TomlConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();

    assert!(config.catalogue_path.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_file_loaded() {
    let file = write_temp("catalogue_path = \"videos.toml\"\nrandom_seed = 7\n");
    let config = TomlConfig::load_or_default(file.path()).unwrap();

    assert_eq!(config.catalogue_path, Some(PathBuf::from("videos.toml")));
    assert_eq!(config.random_seed, Some(7));
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let file = write_temp("random_seed = \"not a number\"\n");
    let result = TomlConfig::load_or_default(file.path());
    assert!(matches!(result, Err(Error::Toml(_))));
}

#[test]
#[serial]
fn test_catalogue_env_var_beats_toml() {
    env::set_var(CATALOGUE_ENV_VAR, "/tmp/vidcat-env-videos.toml");

    let config = TomlConfig {
        catalogue_path: Some(PathBuf::from("/tmp/vidcat-toml-videos.toml")),
        ..Default::default()
    };
    let path = resolve_catalogue_path(None, &config);
    assert_eq!(path, PathBuf::from("/tmp/vidcat-env-videos.toml"));

    // Cleanup
    env::remove_var(CATALOGUE_ENV_VAR);
}

#[test]
#[serial]
fn test_catalogue_toml_used_without_env() {
    env::remove_var(CATALOGUE_ENV_VAR);

    let config = TomlConfig {
        catalogue_path: Some(PathBuf::from("/tmp/vidcat-toml-videos.toml")),
        ..Default::default()
    };
    let path = resolve_catalogue_path(None, &config);
    assert_eq!(path, PathBuf::from("/tmp/vidcat-toml-videos.toml"));
}

#[test]
#[serial]
fn test_catalogue_default_when_nothing_configured() {
    env::remove_var(CATALOGUE_ENV_VAR);

    let path = resolve_catalogue_path(None, &TomlConfig::default());
    assert!(path.ends_with("videos.toml"));
}

#[test]
#[serial]
fn test_config_path_priority() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/vidcat-env-config.toml");

    assert_eq!(
        resolve_config_path(Some(Path::new("/tmp/cli.toml"))),
        PathBuf::from("/tmp/cli.toml")
    );
    assert_eq!(
        resolve_config_path(None),
        PathBuf::from("/tmp/vidcat-env-config.toml")
    );

    env::remove_var(CONFIG_ENV_VAR);
    let default_path = resolve_config_path(None);
    assert!(default_path.ends_with("config.toml") || default_path.ends_with("vidcat.toml"));
}

#[test]
fn test_load_catalogue_file() {
    let file = write_temp(
        r##"
        [[videos]]
        id = "amazing_cats_video_id"
        title = "Amazing Cats"
        tags = ["#cat", "#animal"]

        [[videos]]
        id = "another_cat_video_id"
        title = "Another Cat Video"
        tags = ["#cat", "#animal"]
        "##,
    );

    let library = VideoLibrary::load(file.path()).unwrap();
    assert_eq!(library.len(), 2);
    assert_eq!(library.all_videos()[1].title(), "Another Cat Video");
}

#[test]
fn test_missing_catalogue_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = VideoLibrary::load(&dir.path().join("videos.toml"));
    assert!(matches!(result, Err(Error::Catalogue(_))));
}

#[test]
fn test_catalogue_with_duplicate_ids_is_an_error() {
    let file = write_temp(
        r#"
        [[videos]]
        id = "same"
        title = "One"

        [[videos]]
        id = "same"
        title = "Two"
        "#,
    );

    let result = VideoLibrary::load(file.path());
    assert!(matches!(result, Err(Error::Catalogue(_))));
}
