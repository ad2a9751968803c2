use std::fs;

use log::LevelFilter;
use tempfile::tempdir;
use tinyalsa_version::{
    exit_code_for, level_for_verbosity, load_config, version_command, ConfigOverrides,
    CONFIG_ERROR_EXIT_CODE,
};
use tinyalsa_version_core::ExtractorConfig;

#[test]
fn version_command_returns_bare_version() {
    let temp = tempdir().unwrap();
    let dir = temp.path().join("include").join("tinyalsa");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("version.h"), "#define TINYALSA_VERSION_STRING \"2.1.0\"\n").unwrap();

    let version =
        version_command(Some(temp.path().to_path_buf()), ExtractorConfig::default()).unwrap();
    assert_eq!(version, "2.1.0");
}

#[test]
fn extraction_errors_keep_their_exit_codes() {
    let temp = tempdir().unwrap();
    let err = version_command(Some(temp.path().to_path_buf()), ExtractorConfig::default())
        .unwrap_err();
    assert_eq!(exit_code_for(&err), 2, "unexpected error: {err:#}");

    let dir = temp.path().join("include").join("tinyalsa");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("version.h"), "/* empty */\n").unwrap();
    let err = version_command(Some(temp.path().to_path_buf()), ExtractorConfig::default())
        .unwrap_err();
    assert_eq!(exit_code_for(&err), 1, "unexpected error: {err:#}");
}

#[test]
fn config_errors_map_to_config_exit_code() {
    let temp = tempdir().unwrap();
    let err = load_config(Some(&temp.path().join("missing.json")), ConfigOverrides::default())
        .unwrap_err();
    assert_eq!(exit_code_for(&err), CONFIG_ERROR_EXIT_CODE);
}

#[test]
fn overrides_apply_after_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("cfg.json");
    fs::write(&path, r#"{ "namespace": "salsa", "macro_name": "FROM_FILE" }"#).unwrap();

    let overrides = ConfigOverrides { macro_name: Some("FROM_FLAG".into()), ..Default::default() };
    let config = load_config(Some(&path), overrides).unwrap();
    assert_eq!(config.namespace, "salsa");
    assert_eq!(config.macro_name, "FROM_FLAG");
    assert_eq!(config.header, "version.h");
}

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(level_for_verbosity(0), LevelFilter::Off);
    assert_eq!(level_for_verbosity(1), LevelFilter::Warn);
    assert_eq!(level_for_verbosity(2), LevelFilter::Info);
    assert_eq!(level_for_verbosity(3), LevelFilter::Debug);
    assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
}
