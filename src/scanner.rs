// Author: kelexine (https://github.com/kelexine)
// scanner.rs — File discovery and per-file indexing

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use walkdir::WalkDir;

use crate::cli::Args;
use crate::config::GlobalConfig;
use crate::engine::ParseEngine;
use crate::models::{ScanResult, ScriptInfo};

/// Extensions considered part of the JS family during directory scans.
/// A single-file target skips this filter entirely.
pub static SCRIPT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [".js", ".mjs", ".cjs", ".jsx", ".ts", ".tsx", ".mts", ".cts"]
        .iter()
        .copied()
        .collect()
});

/// Directories pruned by default.
pub static EXCLUDED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node_modules", ".git", "bower_components", "vendor", "dist", "build",
        "out", "coverage", ".next", ".nuxt", ".cache", ".idea", ".vscode",
    ]
    .iter()
    .copied()
    .collect()
});

/// Configuration for one indexing run.
#[derive(Clone)]
pub struct ScanConfig {
    pub target: PathBuf,
    pub show_bodies: bool,
    pub preview_lines: usize,
    pub name_filter: Option<Regex>,
    pub parallel: bool,
    pub include_hidden: bool,
    pub custom_ignore: HashSet<String>,
}

impl ScanConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let target = Path::new(&args.target);
        if !target.exists() {
            anyhow::bail!("File does not exist: {}", target.display());
        }
        let target = target
            .canonicalize()
            .with_context(|| format!("Cannot resolve target: {}", args.target))?;

        let global_config = GlobalConfig::load();

        let pattern = args
            .name_filter
            .clone()
            .or(global_config.default_match.clone());
        let name_filter = match pattern {
            Some(p) => Some(
                Regex::new(&p).with_context(|| format!("Invalid --match pattern: {}", p))?,
            ),
            None => None,
        };

        let custom_ignore = if target.is_dir() {
            load_ignore_file(&target)
        } else {
            HashSet::new()
        };

        Ok(Self {
            target,
            show_bodies: args.bodies || global_config.always_show_bodies.unwrap_or(false),
            preview_lines: args
                .preview
                .or(global_config.preview_lines)
                .unwrap_or(0),
            name_filter,
            parallel: !args.no_parallel,
            include_hidden: args.include_hidden,
            custom_ignore,
        })
    }
}

/// Run the full scan and return a ScanResult.
pub fn run_scan(config: &ScanConfig) -> Result<ScanResult> {
    let mut files = if config.target.is_file() {
        vec![config.target.clone()]
    } else {
        discover_scripts(&config.target, &config.custom_ignore, config.include_hidden)
    };
    files.sort_unstable();

    let scripts: Vec<ScriptInfo> = if config.parallel && files.len() > 50 {
        files
            .par_iter()
            .filter_map(|path| report_or_warn(path, config))
            .collect()
    } else {
        files
            .iter()
            .filter_map(|path| report_or_warn(path, config))
            .collect()
    };

    let mut scripts = scripts;
    scripts.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(ScanResult { scripts })
}

// ─────────────────────────────────────────────────────────────────────────────
// File processing
// ─────────────────────────────────────────────────────────────────────────────

fn report_or_warn(path: &Path, config: &ScanConfig) -> Option<ScriptInfo> {
    match process_file(path, config) {
        Ok(info) => Some(info),
        Err(e) => {
            eprintln!("[WARN] Skipped {}: {}", path.display(), e);
            None
        }
    }
}

fn process_file(path: &Path, config: &ScanConfig) -> Result<ScriptInfo> {
    let mut engine = ParseEngine::from_file(path)?;
    engine.parse();

    let lines = engine.source().lines().count();
    let last_modified = get_fs_last_modified(path);

    let mut index = engine.into_index();
    if let Some(re) = &config.name_filter {
        // Names and bodies drop together, keeping the reported view aligned.
        index.retain(|name| re.is_match(name));
    }

    Ok(ScriptInfo::new(path.to_path_buf(), lines, last_modified).with_index(index))
}

fn is_script(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();
    SCRIPT_EXTENSIONS.contains(ext.as_str())
}

// ─────────────────────────────────────────────────────────────────────────────
// Discovery
// ─────────────────────────────────────────────────────────────────────────────

fn load_ignore_file(dir: &Path) -> HashSet<String> {
    let path = dir.join(".jsfnignore");
    if let Ok(content) = std::fs::read_to_string(path) {
        content
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| l.to_string())
            .collect()
    } else {
        HashSet::new()
    }
}

fn discover_scripts(
    dir: &Path,
    custom_ignore: &HashSet<String>,
    include_hidden: bool,
) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |e| {
            if e.depth() == 0 {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            if e.file_type().is_dir() {
                if EXCLUDED_DIRS.contains(name.as_ref()) || custom_ignore.contains(name.as_ref()) {
                    return false;
                }
                include_hidden || !name.starts_with('.')
            } else {
                !custom_ignore.contains(name.as_ref()) && (include_hidden || !name.starts_with('.'))
            }
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| is_script(p))
        .collect()
}

fn get_fs_last_modified(path: &Path) -> Option<DateTime<Utc>> {
    path.metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .and_then(|d| Utc.timestamp_opt(d.as_secs() as i64, 0).single())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn base_config(target: &Path) -> ScanConfig {
        ScanConfig {
            target: target.to_path_buf(),
            show_bodies: false,
            preview_lines: 0,
            name_filter: None,
            parallel: false,
            include_hidden: false,
            custom_ignore: HashSet::new(),
        }
    }

    #[test]
    fn test_discover_scripts_filters_extensions_and_dirs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.js"), "var a = function() {};").unwrap();
        fs::write(dir.path().join("notes.md"), "# notes").unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();
        fs::write(dir.path().join("node_modules/dep.js"), "x = function() {};").unwrap();

        let found = discover_scripts(dir.path(), &HashSet::new(), false);
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["app.js"]);
    }

    #[test]
    fn test_custom_ignore_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".jsfnignore"), "# local\ngenerated.js\n").unwrap();
        fs::write(dir.path().join("generated.js"), "g = function() {};").unwrap();
        fs::write(dir.path().join("kept.js"), "k = function() {};").unwrap();

        let ignore = load_ignore_file(dir.path());
        assert!(ignore.contains("generated.js"));

        let found = discover_scripts(dir.path(), &ignore, false);
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["kept.js"]);
    }

    #[test]
    fn test_run_scan_indexes_nested_files() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        fs::write(
            dir.path().join("app.js"),
            "var main = function() { start(); };",
        )
        .unwrap();
        fs::write(
            dir.path().join("lib/util.ts"),
            "var clamp = function(v){ return v; };",
        )
        .unwrap();

        let result = run_scan(&base_config(dir.path())).unwrap();
        assert_eq!(result.file_count(), 2);
        assert_eq!(result.total_functions(), 2);
        assert_eq!(result.total_bodies(), 2);
    }

    #[test]
    fn test_run_scan_single_file_ignores_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snippet.txt");
        fs::write(&path, "var solo = function() { s(); };").unwrap();

        let result = run_scan(&base_config(&path)).unwrap();
        assert_eq!(result.file_count(), 1);
        assert_eq!(result.total_functions(), 1);
    }

    #[test]
    fn test_name_filter_drops_names_and_bodies() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.js");
        fs::write(
            &path,
            "var render = function() { r(); };\nvar helper = function() { h(); };",
        )
        .unwrap();

        let mut config = base_config(&path);
        config.name_filter = Some(Regex::new("^render").unwrap());

        let result = run_scan(&config).unwrap();
        let index = &result.scripts[0].index;
        assert_eq!(index.names, vec!["render"]);
        assert!(index.bodies.contains_key("render"));
        assert!(!index.bodies.contains_key("helper"));
    }
}
