// Author: kelexine (https://github.com/kelexine)
// display.rs — Colored terminal output and breakdown tables

use colored::*;
use std::path::Path;

use crate::models::{ScanResult, ScriptInfo};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn fmt_num(n: usize) -> String {
    // Thousands-separator formatting
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

fn rel_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public display functions
// ─────────────────────────────────────────────────────────────────────────────

pub fn display_results(result: &ScanResult, root: &Path, detailed: bool) {
    println!();
    println!("{}", "Function Index:".bold());
    println!();

    for script in &result.scripts {
        print_script(script, root);
    }

    let total_fns = result.total_functions();
    let total_bodies = result.total_bodies();

    println!();
    println!("{}", "=".repeat(70));
    println!(
        "{} {}",
        "[SUCCESS]".green().bold(),
        format!("Indexed {} functions", fmt_num(total_fns)).bold()
    );
    println!(
        "{} Script Files:     {}",
        "[INFO]   ".blue(),
        fmt_num(result.file_count())
    );
    println!(
        "{} Lines Scanned:    {}",
        "[INFO]   ".blue(),
        fmt_num(result.total_lines())
    );
    println!(
        "{} Bodies Recovered: {}",
        "[INFO]   ".blue(),
        fmt_num(total_bodies)
    );

    let missing = total_fns.saturating_sub(total_bodies);
    if missing > 0 {
        println!(
            "{} {} function(s) without a recoverable body",
            "[WARN]   ".yellow(),
            fmt_num(missing)
        );
    }
    println!("{}", "=".repeat(70));
    println!();

    if detailed {
        display_breakdown(result, root);
    }
}

fn print_script(script: &ScriptInfo, root: &Path) {
    let rel = rel_path(&script.path, root);

    if script.function_count() == 0 {
        println!("{} {}", rel.cyan(), "(no functions)".dimmed());
        return;
    }

    println!(
        "{} {} {}",
        rel.green(),
        format!("[{} fn]", script.function_count()).magenta(),
        format!("({} lines)", fmt_num(script.lines)).bright_black()
    );

    for name in &script.index.names {
        let body_tag = if script.index.body_of(name).is_none() {
            format!(" {}", "[no body]".yellow())
        } else {
            String::new()
        };
        println!("  {} {}{}", "•".blue(), name.cyan(), body_tag);
    }
}

fn display_breakdown(result: &ScanResult, root: &Path) {
    println!();
    println!("{}", "[INFO] Breakdown by file:".blue());
    println!();
    println!(
        "{:<44} {:>10} {:>10} {:>8} {:>12}",
        "Path", "Lines", "Functions", "Bodies", "Modified"
    );
    println!("{}", "-".repeat(88));

    for script in &result.scripts {
        let modified = script
            .last_modified
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!(
            "{:<44} {:>10} {:>10} {:>8} {:>12}",
            rel_path(&script.path, root),
            fmt_num(script.lines),
            fmt_num(script.function_count()),
            fmt_num(script.body_count()),
            modified
        );
    }
    println!();
}

pub fn display_bodies(result: &ScanResult, root: &Path, preview_lines: usize) {
    let with_bodies: Vec<_> = result
        .scripts
        .iter()
        .filter(|s| s.body_count() > 0)
        .collect();

    if with_bodies.is_empty() {
        println!("{}", "[WARN] No function bodies recovered.".yellow());
        return;
    }

    println!("{}", "[INFO] Function Bodies".blue().bold());
    println!("{}", "=".repeat(70));

    for script in with_bodies {
        println!();
        println!("{}", rel_path(&script.path, root).bold());

        // Discovery order, not map order.
        for name in &script.index.names {
            let Some(body) = script.index.body_of(name) else {
                continue;
            };
            println!();
            println!("  {}", name.cyan().bold());
            print_body(body, preview_lines);
        }
    }

    println!();
    println!("{}", "=".repeat(70));
    println!();
}

fn print_body(body: &str, preview_lines: usize) {
    let lines: Vec<&str> = body.lines().collect();
    let shown = if preview_lines == 0 {
        lines.len()
    } else {
        preview_lines.min(lines.len())
    };

    for line in &lines[..shown] {
        println!("  {} {}", "│".bright_black(), line);
    }
    if shown < lines.len() {
        println!(
            "  {} {}",
            "│".bright_black(),
            format!("... (+{} more lines)", lines.len() - shown).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(0), "0");
        assert_eq!(fmt_num(999), "999");
        assert_eq!(fmt_num(1234), "1,234");
        assert_eq!(fmt_num(1234567), "1,234,567");
    }

    #[test]
    fn test_rel_path_falls_back_to_full_path() {
        let root = Path::new("/tmp/project");
        assert_eq!(
            rel_path(Path::new("/tmp/project/src/app.js"), root),
            "src/app.js"
        );
        // A single-file scan strips to nothing; show the full path instead.
        assert_eq!(
            rel_path(Path::new("/tmp/project"), root),
            "/tmp/project"
        );
        assert_eq!(rel_path(Path::new("/elsewhere/x.js"), root), "/elsewhere/x.js");
    }
}
