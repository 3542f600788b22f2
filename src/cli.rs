// Author: kelexine (https://github.com/kelexine)
// cli.rs — CLI argument parsing via clap derive

use clap::Parser;

/// jsfn — Lightweight JavaScript function indexer
///
/// Extracts function names and body spans from script files with lexical
/// heuristics: good enough for editor previews and quick indexes, with no
/// pretense of being a real parser.
///
/// Author: kelexine (https://github.com/kelexine)
#[derive(Parser, Debug)]
#[command(
    name = "jsfn",
    version,
    author = "kelexine <https://github.com/kelexine>",
    about = "JavaScript function indexer — names, body spans, JSON/CSV export",
    after_help = "\
EXAMPLES:
  jsfn                         Index scripts under the current directory
  jsfn app.js                  Index a single file
  jsfn src/ -b                 Show extracted function bodies
  jsfn -b --preview 6          Bodies truncated to 6 lines each
  jsfn -d                      Per-file breakdown table
  jsfn -m '^render'            Only functions whose name matches the regex
  jsfn -e index.json           Export to JSON
  jsfn -e funcs.csv -b         Export CSV, bodies in terminal too
  jsfn src/ -m on -e out.jsonl --no-parallel

SCANNED EXTENSIONS:
  .js .mjs .cjs .jsx .ts .tsx .mts .cts
  (a single-file target is indexed regardless of extension)

HEURISTICS, NOT A GRAMMAR:
  Names come from token shapes (`name = function`, `function name (`);
  bodies from brace-depth counting over the raw text. Braces inside string
  literals or comments are counted as structural — a name with no
  recoverable body is reported without one rather than failing the scan."
)]
pub struct Args {
    /// Script file or directory to index (default: current directory)
    #[arg(default_value = ".")]
    pub target: String,

    /// Print extracted function bodies after the listing
    #[arg(short = 'b', long = "bodies")]
    pub bodies: bool,

    /// Show per-file breakdown table
    #[arg(short = 'd', long = "detailed")]
    pub detailed: bool,

    /// Only report function names matching this regex
    #[arg(short = 'm', long = "match", value_name = "PATTERN")]
    pub name_filter: Option<String>,

    /// Export results to file (.json, .jsonl, or .csv)
    #[arg(short = 'e', long = "export", value_name = "FILE")]
    pub export: Option<String>,

    /// Truncate printed bodies to this many lines (0 = unlimited)
    #[arg(long = "preview", value_name = "LINES")]
    pub preview: Option<usize>,

    /// Descend into hidden files and directories
    #[arg(long = "include-hidden")]
    pub include_hidden: bool,

    /// Disable parallel file processing
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,
}
