use std::fs;

use tempfile::tempdir;
use tinyalsa_version_core::config::{DEFAULT_HEADER, DEFAULT_MACRO_NAME, DEFAULT_NAMESPACE};
use tinyalsa_version_core::{ExtractorConfig, HeaderLayout};

#[test]
fn defaults_describe_tinyalsa_layout() {
    let config = ExtractorConfig::default();
    assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    assert_eq!(config.header, DEFAULT_HEADER);
    assert_eq!(config.macro_name, DEFAULT_MACRO_NAME);

    let layout = HeaderLayout::new("/src", &config);
    assert!(layout.header_path.ends_with("include/tinyalsa/version.h"));
    assert!(layout.include_dir.ends_with("include/tinyalsa"));
    assert_eq!(
        layout.header_relative_string(),
        format!("include{0}tinyalsa{0}version.h", std::path::MAIN_SEPARATOR)
    );
}

#[test]
fn partial_json_keeps_defaults() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("extractor.json");
    fs::write(&path, r#"{ "macro_name": "SALSA_VERSION" }"#).unwrap();

    let config = ExtractorConfig::load(&path).expect("load config");
    assert_eq!(config.macro_name, "SALSA_VERSION");
    assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    assert_eq!(config.header, DEFAULT_HEADER);
}

#[test]
fn overrides_ignore_none() {
    let config = ExtractorConfig::default().with_namespace(None).with_header(Some("v.h".into()));
    assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    assert_eq!(config.header, "v.h");
}

#[test]
fn invalid_json_errors() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("extractor.json");
    fs::write(&path, "not-json").unwrap();

    let err = ExtractorConfig::load(&path).unwrap_err();
    assert!(
        err.to_string().contains("Failed to parse extractor config JSON"),
        "unexpected error: {err}"
    );
}

#[test]
fn missing_file_errors() {
    let tmp = tempdir().unwrap();
    let err = ExtractorConfig::load(&tmp.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read extractor config"), "unexpected error: {err}");
}
