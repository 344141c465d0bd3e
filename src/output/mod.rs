//! Output writing, progress, and warning reporting

mod progress;
mod writers;

pub use self::progress::ProgressReporter;
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Warning;
use ansi_term::Colour::Yellow;

/// Format the accumulated warning list for terminal display
///
/// Warnings are reported separately from the document body, one line per
/// warning plus a summary header.
pub fn format_warnings(warnings: &[Warning], use_colors: bool) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let header = format!(
        "{} warning{} during analysis:",
        warnings.len(),
        if warnings.len() == 1 { "" } else { "s" }
    );

    let mut out = String::new();
    if use_colors {
        out.push_str(&Yellow.bold().paint(&header).to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for warning in warnings {
        let line = format!("  {}", warning);
        if use_colors {
            out.push_str(&Yellow.paint(&line).to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}

/// Print warnings to stderr
pub fn report_warnings(warnings: &[Warning], use_colors: bool) {
    let formatted = format_warnings(warnings, use_colors);
    if !formatted.is_empty() {
        eprint!("{}", formatted);
    }
}
