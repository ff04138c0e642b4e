//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::dispatch::bench::SuiteReport;
use crate::dispatch::code::CallShape;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Seconds with 6 decimal places
pub fn format_seconds(secs: f64) -> String {
    format!("{:.6}", secs)
}

/// Ratio with 2 decimal places, or `n/a` when it could not be computed
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}x", r),
        None => "n/a".to_string(),
    }
}

/// Width of the label column, wide enough for the longest shape label
fn label_width() -> usize {
    CallShape::ALL
        .iter()
        .map(|s| s.label().len() + 1)
        .max()
        .unwrap_or(40)
}

/// Build the report lines. Kept separate from printing so it can be tested.
pub fn report_lines(report: &SuiteReport) -> Vec<String> {
    let width = label_width();
    let mut lines = vec![
        format!("--- Performance Comparison ({} ops) ---", report.iterations),
        format!(
            "Result: {}",
            report
                .final_result()
                .map_or_else(|| "n/a".to_string(), |r| r.to_string())
        ),
        String::new(),
    ];

    for r in &report.results {
        lines.push(format!(
            "{:<width$} {} seconds",
            format!("{}:", r.shape.label()),
            format_seconds(r.result.elapsed_secs),
            width = width
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "{:<width$} {}",
        "Dynamic / static ratio:",
        format_ratio(report.dynamic_ratio()),
        width = width
    ));
    lines.push(format!(
        "{:<width$} {}",
        "Dynamic (no inline) / static ratio:",
        format_ratio(report.no_inline_ratio()),
        width = width
    ));
    lines.push(String::new());
    lines.push("Conclusion:".to_string());
    lines.push("Dynamic calls incur overhead; inlining can reduce static call time.".to_string());
    lines
}

/// Print the comparison report
pub fn print_report(report: &SuiteReport) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Static vs Dynamic Dispatch ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}
