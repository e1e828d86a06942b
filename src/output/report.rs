use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use super::formatter::format_json;
use crate::analysis::AnalysisResult;

/// Save the JSON report to a file atomically
///
/// Uses atomic-write-file so a reader never sees a half-written report.
pub fn save_report(path: &Path, result: &AnalysisResult) -> Result<()> {
    let json = format_json(result).context("Failed to serialize report")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    file.commit().context("Failed to save report")?;

    tracing::debug!(path = %path.display(), "report saved");
    Ok(())
}
