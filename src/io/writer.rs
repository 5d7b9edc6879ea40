//! Audit ledger serialization to CSV

use crate::error::Result;
use crate::types::MatchAuditRow;
use anyhow::Context;
use std::path::Path;

/// Write audit rows as CSV with a header row
pub fn write_audit_rows<W: std::io::Write>(sink: W, rows: &[MatchAuditRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write audit rows to a CSV file, returning the number of rows written
pub fn write_audit_rows_to_path(path: &Path, rows: &[MatchAuditRow]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_audit_rows(file, rows)
        .with_context(|| format!("Failed to write ledger to {}", path.display()))?;

    Ok(rows.len())
}
