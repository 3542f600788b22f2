// Author: kelexine (https://github.com/kelexine)
// models.rs — Core data structures for the function indexer

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// The immutable product of one parse: the ordered, duplicate-free name
/// sequence plus the name → body mapping. Every body key also appears in
/// `names`; the reverse does not hold — a name may have no recoverable body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunctionIndex {
    pub names: Vec<String>,
    pub bodies: HashMap<String, String>,
}

impl FunctionIndex {
    #[inline]
    pub fn function_count(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body_of(&self, name: &str) -> Option<&str> {
        self.bodies.get(name).map(String::as_str)
    }

    /// Drop every name not satisfying `keep`, and its body with it.
    pub fn retain<F: Fn(&str) -> bool>(&mut self, keep: F) {
        self.names.retain(|n| keep(n));
        self.bodies.retain(|n, _| keep(n));
    }
}

/// One indexed script file.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptInfo {
    pub path: PathBuf,
    pub lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    pub index: FunctionIndex,
}

impl ScriptInfo {
    pub fn new(path: PathBuf, lines: usize, last_modified: Option<DateTime<Utc>>) -> Self {
        Self {
            path,
            lines,
            last_modified,
            index: FunctionIndex::default(),
        }
    }

    pub fn with_index(mut self, index: FunctionIndex) -> Self {
        self.index = index;
        self
    }

    #[inline]
    pub fn function_count(&self) -> usize {
        self.index.function_count()
    }

    #[inline]
    pub fn body_count(&self) -> usize {
        self.index.body_count()
    }

    /// File extension without the leading dot, or empty string.
    pub fn extension(&self) -> &str {
        self.path.extension().and_then(|e| e.to_str()).unwrap_or("")
    }
}

/// The full result of one scan.
#[derive(Debug)]
pub struct ScanResult {
    pub scripts: Vec<ScriptInfo>,
}

impl ScanResult {
    pub fn file_count(&self) -> usize {
        self.scripts.len()
    }

    pub fn total_lines(&self) -> usize {
        self.scripts.iter().map(|s| s.lines).sum()
    }

    pub fn total_functions(&self) -> usize {
        self.scripts.iter().map(|s| s.function_count()).sum()
    }

    pub fn total_bodies(&self) -> usize {
        self.scripts.iter().map(|s| s.body_count()).sum()
    }
}
