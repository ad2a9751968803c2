//! tinyalsa-version-core
//!
//! Core library for reading the tinyalsa version string out of
//! `include/tinyalsa/version.h`.
//!
//! The Meson build calls the `tinyalsa-version` binary at configure time; the
//! binary is a thin wrapper and all of the lookup and parsing lives here so it
//! can be tested without spawning processes.

pub mod config;
pub mod error;
pub mod extract;
pub mod layout;
pub mod root;

pub use config::ExtractorConfig;
pub use error::{ExtractError, ExtractResult};
pub use extract::{extract, VersionExtractor, VersionString};
pub use layout::HeaderLayout;
pub use root::{RootOrigin, SourceRoot};
