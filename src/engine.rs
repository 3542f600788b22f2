// Author: kelexine (https://github.com/kelexine)
// engine.rs — The parse engine: source in, function index out

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::extract::{bodies, names};
use crate::models::FunctionIndex;

/// Run the two extraction passes over `source` and produce the index.
///
/// Pure: same input, same output, no state anywhere. Name extraction runs
/// first; body extraction consumes its ordered name list together with the
/// untouched original text.
pub fn index_source(source: &str) -> FunctionIndex {
    let names = names::extract_names(source);
    let bodies = bodies::extract_bodies(source, &names);
    FunctionIndex { names, bodies }
}

/// Heuristic function indexer over a single piece of script source.
///
/// Owns its source text exclusively; `parse` rebuilds the index from scratch
/// every time, so repeated calls yield identical (never additive) results.
pub struct ParseEngine {
    source: String,
    index: FunctionIndex,
}

impl ParseEngine {
    /// Build an engine over literal source text.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            index: FunctionIndex::default(),
        }
    }

    /// Build an engine over the contents of a script file. The whole file is
    /// read up front; a missing path is the one error that aborts processing.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!("File does not exist: {}", path.display());
        }
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        Ok(Self::from_source(source))
    }

    /// The raw source text this engine was built over.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run name extraction then body extraction. Always affirmative on
    /// normal completion — an empty result set is not a failure.
    pub fn parse(&mut self) -> bool {
        self.index = index_source(&self.source);
        true
    }

    /// Snapshot of the ordered, duplicate-free name sequence.
    pub fn function_names(&self) -> Vec<String> {
        self.index.names.clone()
    }

    /// Snapshot of the name → body mapping.
    pub fn function_bodies(&self) -> HashMap<String, String> {
        self.index.bodies.clone()
    }

    /// Hand the built index over, consuming the engine.
    pub fn into_index(self) -> FunctionIndex {
        self.index
    }
}
