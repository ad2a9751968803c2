use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::SOURCE_ROOT_ENV;
use crate::error::{ExtractError, ExtractResult};

/// Where a [`SourceRoot`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootOrigin {
    /// Given directly by the caller (e.g. `--root`).
    Explicit,
    /// Read from `MESON_SOURCE_ROOT`.
    Env,
    /// Neither was available; the current working directory is assumed.
    CurrentDir,
}

/// The source tree the header is looked up in. Resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoot {
    pub path: PathBuf,
    pub origin: RootOrigin,
}

impl SourceRoot {
    /// Resolve the root from an explicit path, then `MESON_SOURCE_ROOT`, then
    /// the current directory.
    pub fn resolve(explicit: Option<PathBuf>) -> ExtractResult<Self> {
        match explicit {
            Some(path) => Ok(Self { path, origin: RootOrigin::Explicit }),
            None => Self::from_env_value(env::var_os(SOURCE_ROOT_ENV)),
        }
    }

    /// Resolve from an already-read environment value.
    ///
    /// An empty value counts as unset.
    pub fn from_env_value(value: Option<OsString>) -> ExtractResult<Self> {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => Ok(Self { path: PathBuf::from(v), origin: RootOrigin::Env }),
            None => {
                let cwd = env::current_dir().map_err(ExtractError::CurrentDir)?;
                log::info!("{SOURCE_ROOT_ENV} not set, falling back to {}", cwd.display());
                Ok(Self { path: cwd, origin: RootOrigin::CurrentDir })
            }
        }
    }

    /// True when neither an explicit root nor the env var was available.
    pub fn is_fallback(&self) -> bool {
        self.origin == RootOrigin::CurrentDir
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
