// Author: kelexine (https://github.com/kelexine)
// export/json.rs — JSON and JSONL export logic

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::json;

use crate::models::{ScanResult, ScriptInfo};

pub fn export_json(result: &ScanResult, path: &Path, include_bodies: bool) -> Result<()> {
    let data = json!({
        "metadata": {
            "total_files": result.file_count(),
            "total_lines": result.total_lines(),
            "total_functions": result.total_functions(),
            "total_bodies": result.total_bodies(),
            "bodies_included": include_bodies,
            "timestamp": Utc::now().to_rfc3339(),
            "generator": "jsfn v0.1.2 by kelexine (https://github.com/kelexine)",
        },
        "files": result.scripts.iter().map(|s| script_to_value(s, include_bodies)).collect::<Vec<_>>(),
    });

    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), &data)
        .with_context(|| "Failed to serialize JSON")?;

    eprintln!("[SUCCESS] Exported JSON → {}", path.display());
    Ok(())
}

pub fn export_jsonl(result: &ScanResult, path: &Path, include_bodies: bool) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(f);

    for script in &result.scripts {
        let line = serde_json::to_string(&script_to_value(script, include_bodies))
            .with_context(|| "Failed to serialize JSONL record")?;
        writeln!(writer, "{}", line)?;
    }

    eprintln!("[SUCCESS] Exported JSONL → {}", path.display());
    Ok(())
}

pub fn script_to_value(script: &ScriptInfo, include_bodies: bool) -> serde_json::Value {
    // Functions in discovery order, each carrying its body only on request.
    let functions: Vec<_> = script
        .index
        .names
        .iter()
        .map(|name| {
            let body = script.index.body_of(name);
            let mut f = json!({
                "name": name,
                "has_body": body.is_some(),
            });
            if include_bodies && let Some(body) = body {
                f["body"] = json!(body);
            }
            f
        })
        .collect();

    json!({
        "path": script.path.to_string_lossy(),
        "lines": script.lines,
        "extension": script.extension(),
        "last_modified": script.last_modified.map(|d| d.to_rfc3339()),
        "function_count": script.function_count(),
        "body_count": script.body_count(),
        "functions": functions,
    })
}
