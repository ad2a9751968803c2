use std::path::{Path, PathBuf};

use crate::config::ExtractorConfig;

/// Logical location of the version header under a source root.
///
/// This is derived from a chosen root path and an [`ExtractorConfig`]. It does
/// *not* perform any IO itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Source root directory of the project.
    pub root: PathBuf,
    /// Directory holding the public headers (`include/<namespace>`).
    pub include_dir: PathBuf,
    /// Path to the version header itself.
    pub header_path: PathBuf,
}

impl HeaderLayout {
    /// Compute the header layout for a source tree rooted at `root`.
    pub fn new(root: impl AsRef<Path>, config: &ExtractorConfig) -> Self {
        let root = root.as_ref().to_path_buf();
        let include_dir = root.join("include").join(&config.namespace);
        let header_path = include_dir.join(&config.header);

        Self { root, include_dir, header_path }
    }

    /// Header path relative to `root`, for diagnostics.
    pub fn header_relative_string(&self) -> String {
        match self.header_path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => self.header_path.to_string_lossy().to_string(),
        }
    }
}
