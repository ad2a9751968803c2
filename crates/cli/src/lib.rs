use std::path::{Path, PathBuf};

use anyhow::Result;
use log::LevelFilter;
use tinyalsa_version_core::config::SOURCE_ROOT_ENV;
use tinyalsa_version_core::{ExtractError, ExtractorConfig, SourceRoot, VersionExtractor};

/// Exit code for an unreadable or invalid `--config` file.
pub const CONFIG_ERROR_EXIT_CODE: u8 = 3;

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub namespace: Option<String>,
    pub header: Option<String>,
    pub macro_name: Option<String>,
}

/// Map `-v` occurrences to a log level. Records always go to stderr.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize `env_logger`; `RUST_LOG` takes precedence over `-v`.
pub fn init_logger(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Build the extractor config from an optional JSON file plus overrides.
pub fn load_config(path: Option<&Path>, overrides: ConfigOverrides) -> Result<ExtractorConfig> {
    let base = match path {
        Some(p) => ExtractorConfig::load(p)?,
        None => ExtractorConfig::default(),
    };
    Ok(base
        .with_namespace(overrides.namespace)
        .with_header(overrides.header)
        .with_macro_name(overrides.macro_name))
}

/// Resolve the source root and extract the version string.
///
/// Warns on stderr when falling back to the current directory.
pub fn version_command(root: Option<PathBuf>, config: ExtractorConfig) -> Result<String> {
    let source_root = SourceRoot::resolve(root)?;
    if source_root.is_fallback() {
        eprintln!(
            "Warning: {SOURCE_ROOT_ENV} env var not set, assuming source code is in {}",
            source_root.path().display()
        );
    }

    let extractor = VersionExtractor::new(config);
    let version = extractor.extract(source_root.path())?;
    log::info!("Extracted version {version}");
    Ok(version.into_string())
}

/// Pick the process exit code for a failed run.
///
/// Extraction failures carry their own code; anything else came from config
/// loading.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ExtractError>() {
        Some(extract_err) => extract_err.exit_code(),
        None => CONFIG_ERROR_EXIT_CODE,
    }
}
