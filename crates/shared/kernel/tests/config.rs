use std::fs;
use tempfile::tempdir;
use zoo_kernel::config::{ConfigError, load_config};
use zoo_kernel::domain::config::ApiConfig;
use zoo_kernel::domain::zoo::TerrainType;

const SAMPLE: &str = r#"
[server]
port = 8088

[[zoo.habitats]]
name = "Jungle"
terrain_type = "FOREST"

[[zoo.habitats]]
name = "Sky Dome"
terrain_type = "AVIARY"
"#;

#[test]
fn loads_an_explicit_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("zoo.toml");
    fs::write(&path, SAMPLE).expect("write config");

    let cfg: ApiConfig = load_config(Some(&path)).expect("load config");

    assert_eq!(cfg.server.port, 8088);
    let names: Vec<_> = cfg.zoo.habitats.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Jungle", "Sky Dome"]);
    assert_eq!(cfg.zoo.habitats[1].terrain_type, TerrainType::Aviary);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let result = load_config::<ApiConfig>(Some(dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Config { .. })));
}

#[test]
fn default_file_is_optional() {
    let cfg: ApiConfig = load_config(None::<&str>).expect("defaults");
    assert_eq!(cfg.server.port, 4583);
}
