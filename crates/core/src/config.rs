use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Header namespace directory under `include/`.
pub const DEFAULT_NAMESPACE: &str = "tinyalsa";

/// File name of the version header.
pub const DEFAULT_HEADER: &str = "version.h";

/// Macro whose string literal carries the version.
pub const DEFAULT_MACRO_NAME: &str = "TINYALSA_VERSION_STRING";

/// Environment variable Meson sets to the source root when running scripts.
pub const SOURCE_ROOT_ENV: &str = "MESON_SOURCE_ROOT";

/// Which header to open and which macro to look for.
///
/// The defaults describe tinyalsa's own layout. A JSON file may override any
/// subset of the fields; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Directory under `include/` holding the header.
    pub namespace: String,
    /// Header file name.
    pub header: String,
    /// Name of the `#define` carrying the version literal.
    pub macro_name: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            header: DEFAULT_HEADER.to_string(),
            macro_name: DEFAULT_MACRO_NAME.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Load a config from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).with_context(|| {
            format!("Failed to read extractor config at {}", path.display())
        })?;
        let config: ExtractorConfig =
            serde_json::from_str(&json).context("Failed to parse extractor config JSON")?;
        Ok(config)
    }

    /// Builder-style override of the namespace, ignoring `None`.
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        if let Some(ns) = namespace {
            self.namespace = ns;
        }
        self
    }

    /// Builder-style override of the header file name, ignoring `None`.
    pub fn with_header(mut self, header: Option<String>) -> Self {
        if let Some(h) = header {
            self.header = h;
        }
        self
    }

    /// Builder-style override of the macro name, ignoring `None`.
    pub fn with_macro_name(mut self, macro_name: Option<String>) -> Self {
        if let Some(m) = macro_name {
            self.macro_name = m;
        }
        self
    }
}
