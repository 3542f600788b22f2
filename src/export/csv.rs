// Author: kelexine (https://github.com/kelexine)
// export/csv.rs — CSV export logic

use crate::models::ScanResult;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// One row per extracted function. Bodies stay out of the CSV — only their
/// presence and size — since multi-line spans make for miserable spreadsheets.
pub fn export_csv(result: &ScanResult, path: &Path) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(BufWriter::new(f));

    wtr.write_record(["Path", "Function", "Has Body", "Body Bytes", "Last Modified"])?;

    for script in &result.scripts {
        let last_mod = script
            .last_modified
            .map(|d| d.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            .unwrap_or_default();

        for name in &script.index.names {
            let body = script.index.body_of(name);
            wtr.write_record([
                script.path.to_string_lossy().as_ref(),
                name,
                if body.is_some() { "yes" } else { "no" },
                &body.map(|b| b.len()).unwrap_or(0).to_string(),
                &last_mod,
            ])?;
        }
    }

    wtr.flush()?;
    println!("[SUCCESS] Exported CSV → {}", path.display());
    Ok(())
}
