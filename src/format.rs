use std::fmt::Write;

use crate::{MAX_LINE_LENGTH, Report};

/// Render a report: one message per offending line, then the summary, then
/// the read-failure diagnostic if the pass was cut short.
pub fn render(report: &Report) -> String {
    let mut out = String::new();

    for n in &report.over_length {
        let _ = writeln!(
            out,
            "The length of the line at line number {n} is greater than \
             {MAX_LINE_LENGTH} characters."
        );
    }

    if report.over_length.is_empty() {
        let _ = writeln!(
            out,
            "No lines have a length of more than {MAX_LINE_LENGTH} characters."
        );
    } else {
        let _ = writeln!(
            out,
            "\nTotal {} lines have a length of more than {MAX_LINE_LENGTH} characters.",
            report.over_length.len()
        );
    }

    if let Some(err) = &report.failure {
        let _ = writeln!(
            out,
            "\nread error after line {}: {err}",
            report.total_lines
        );
    }

    out
}
