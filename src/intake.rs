//! Upload gate applied before bytes reach the analysis pipeline.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on input size (2 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("No file selected. Please upload a CSV file.")]
    NoFileName,

    #[error("Invalid file format. Only {} files are accepted.", dotted(.allowed))]
    UnsupportedExtension { file: String, allowed: Vec<String> },

    #[error("File is too large ({size} bytes). The limit is {limit} bytes.")]
    TooLarge { size: u64, limit: u64 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Limits applied to every input.
///
/// Example YAML:
/// ```yaml
/// intake:
///   max_bytes: 1048576
///   allowed_extensions: ["csv", "txt"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeConfig {
    pub max_bytes: u64,
    /// Lower-case extensions without the dot.
    pub allowed_extensions: Vec<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            allowed_extensions: vec!["csv".to_string()],
        }
    }
}

impl IntakeConfig {
    /// Check a file name against the allowed extensions (case-insensitive).
    pub fn check_name(&self, name: &str) -> Result<(), IntakeError> {
        if name.trim().is_empty() {
            return Err(IntakeError::NoFileName);
        }

        let allowed = name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| {
                self.allowed_extensions
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(ext))
            });

        if allowed {
            Ok(())
        } else {
            Err(IntakeError::UnsupportedExtension {
                file: name.to_string(),
                allowed: self.allowed_extensions.clone(),
            })
        }
    }

    pub fn check_size(&self, size: u64) -> Result<(), IntakeError> {
        if size > self.max_bytes {
            Err(IntakeError::TooLarge {
                size,
                limit: self.max_bytes,
            })
        } else {
            Ok(())
        }
    }

    /// Read a file (or stdin for `-`) through the gate.
    ///
    /// Stdin has no name, so only the size cap applies to it. Reads stop one
    /// byte past the cap so oversized input is never fully buffered.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>, IntakeError> {
        let display = path.display().to_string();

        if path == Path::new("-") {
            return self.read_capped(std::io::stdin().lock(), &display);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.check_name(&name)?;

        let file = std::fs::File::open(path).map_err(|source| IntakeError::Io {
            path: display.clone(),
            source,
        })?;
        self.read_capped(file, &display)
    }

    fn read_capped<R: Read>(&self, reader: R, path: &str) -> Result<Vec<u8>, IntakeError> {
        let mut buf = Vec::new();
        reader
            .take(self.max_bytes.saturating_add(1))
            .read_to_end(&mut buf)
            .map_err(|source| IntakeError::Io {
                path: path.to_string(),
                source,
            })?;
        tracing::debug!(bytes = buf.len(), path, "input read");
        self.check_size(buf.len() as u64)?;
        Ok(buf)
    }
}

fn dotted(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(", ")
}
