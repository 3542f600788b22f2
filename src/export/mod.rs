// Author: kelexine (https://github.com/kelexine)
// export/mod.rs — Export dispatcher

pub mod csv;
pub mod json;

use crate::models::ScanResult;
use anyhow::Result;
use std::path::Path;

pub enum ExportFormat {
    Json,
    Jsonl,
    Csv,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "jsonl" => Some(Self::Jsonl),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

pub fn export(result: &ScanResult, output_path: &str, include_bodies: bool) -> Result<()> {
    let path = Path::new(output_path);

    match ExportFormat::from_path(path) {
        Some(ExportFormat::Json) => json::export_json(result, path, include_bodies),
        Some(ExportFormat::Jsonl) => json::export_jsonl(result, path, include_bodies),
        Some(ExportFormat::Csv) => csv::export_csv(result, path),
        None => anyhow::bail!(
            "Unsupported export format '{}'. Use .json, .jsonl, or .csv",
            path.extension().and_then(|e| e.to_str()).unwrap_or("?")
        ),
    }
}
