//! Version extraction from the public header.
//!
//! The header is expected to carry exactly one line of the form
//! `#define TINYALSA_VERSION_STRING "<value>"`. The first line starting with
//! that prefix wins and the rest of the file is not read.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::layout::HeaderLayout;

/// The literal bound to the version macro, quotes removed.
///
/// No semantic-version parsing is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionString(String);

impl VersionString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the exact line prefix for `macro_name`, trailing space included.
pub fn macro_prefix(macro_name: &str) -> String {
    format!("#define {macro_name} ")
}

/// Parse the value out of a single line if it starts with `prefix`.
///
/// Surrounding whitespace is trimmed and every `"` is removed; whitespace
/// inside the literal is kept as-is.
pub fn parse_macro_value(line: &str, prefix: &str) -> Option<String> {
    line.strip_prefix(prefix).map(|rest| rest.trim().replace('"', ""))
}

/// Scan `reader` line by line and return the value of the first matching line.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Returns `Ok(None)` when the input
/// ends without a match. Stops at the first match; later lines are not decoded.
pub fn scan_lines<R: BufRead>(mut reader: R, prefix: &str) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let bytes = buf.as_slice();
        let chunk = bytes
            .strip_suffix(b"\r\n")
            .or_else(|| bytes.strip_suffix(b"\n"))
            .unwrap_or(bytes);

        for segment in chunk.split(|&b| b == b'\r') {
            line_no += 1;
            let line = std::str::from_utf8(segment)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            if let Some(value) = parse_macro_value(line, prefix) {
                log::debug!("Matched version macro on line {line_no}");
                return Ok(Some(value));
            }
        }
    }
}

/// Reads the version string for a given [`ExtractorConfig`].
#[derive(Debug, Clone, Default)]
pub struct VersionExtractor {
    config: ExtractorConfig,
}

impl VersionExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Open the header under `root` and extract the version literal.
    pub fn extract(&self, root: &Path) -> ExtractResult<VersionString> {
        let layout = HeaderLayout::new(root, &self.config);
        let header_rel = PathBuf::from(layout.header_relative_string());
        log::debug!("Reading version header {}", layout.header_path.display());

        let file = File::open(&layout.header_path).map_err(|source| {
            let dir_missing = !layout.include_dir.is_dir();
            if dir_missing {
                log::debug!("Header directory {} is missing", layout.include_dir.display());
            }
            ExtractError::FileAccess {
                header: header_rel.clone(),
                root: layout.root.clone(),
                dir_missing,
                source,
            }
        })?;
        let prefix = macro_prefix(&self.config.macro_name);

        let found = scan_lines(BufReader::new(file), &prefix).map_err(|source| {
            ExtractError::FileAccess {
                header: header_rel.clone(),
                root: layout.root.clone(),
                dir_missing: false,
                source,
            }
        })?;

        match found {
            Some(value) => Ok(VersionString(value)),
            None => Err(ExtractError::NotFound {
                macro_name: self.config.macro_name.clone(),
                header: header_rel,
                root: layout.root,
            }),
        }
    }
}

/// Extract the version from `<root>/include/tinyalsa/version.h`.
pub fn extract(root: &Path) -> ExtractResult<VersionString> {
    VersionExtractor::default().extract(root)
}
