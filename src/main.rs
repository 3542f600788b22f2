// jsfn — JavaScript Function Indexer
//
// Author : kelexine (https://github.com/kelexine)
// Version: Dynamic (Cargo.toml)
// License: MIT
//
// Indexes function declarations in script source with lexical heuristics:
//   • Token-positional name classification (assignment and declaration shapes)
//   • Brace-depth body spans over the raw text — no grammar, no AST
//   • Rayon data-parallelism for directory scans
//   • walkdir traversal with sensible default exclusions
//   • Regex name filtering, JSON/JSONL/CSV export
//   • Typed errors via anyhow — no silent panics

mod cli;
mod config;
mod display;
mod engine;
mod export;
mod extract;
mod models;
mod scanner;

use clap::Parser;
use colored::Colorize;
use std::process;

fn main() {
    let args = cli::Args::parse();

    let config = match scanner::ScanConfig::from_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            process::exit(1);
        }
    };

    let result = match scanner::run_scan(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            process::exit(1);
        }
    };

    // Listing + summary
    display::display_results(&result, &config.target, args.detailed);

    // Optional body dump
    if config.show_bodies {
        display::display_bodies(&result, &config.target, config.preview_lines);
    }

    // Optional export
    if let Some(ref output_file) = args.export {
        if let Err(e) = export::export(&result, output_file, config.show_bodies) {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            process::exit(1);
        }
    }
}
