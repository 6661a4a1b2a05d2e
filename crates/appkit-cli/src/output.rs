//! Console progress reporting and table rendering

use appkit_core::Reporter;
use colored::Colorize;
use std::io::Write;

/// Reporter printing `message...` when a stage starts and a green `done`
/// when it finishes
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn starting(&self, message: &str) {
        print!("  {} {}...", "->".blue(), message);
        let _ = std::io::stdout().flush();
    }

    fn done(&self) {
        println!(" {}", "done".green());
    }
}

/// Render rows as a unicode box-drawing table
///
/// Column widths are sized to the longest cell (header included). `rows`
/// cells beyond the header count are ignored; missing cells render empty.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let edge = |left: &str, mid: &str, right: &str| {
        let mut line = String::from(left);
        for (i, w) in widths.iter().enumerate() {
            line.push_str(&"─".repeat(w + 2));
            line.push_str(if i + 1 == widths.len() { right } else { mid });
        }
        line.push('\n');
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("│");
        for (i, w) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {:<width$} │", cell, width = w));
        }
        line.push('\n');
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&edge("┌", "┬", "┐"));
    out.push_str(&format_row(&header_cells));
    out.push_str(&edge("├", "┼", "┤"));
    for row in rows {
        out.push_str(&format_row(row));
    }
    out.push_str(&edge("└", "┴", "┘"));
    out
}
