//! Report formatting and printing utilities.
//!
//! Separate from the engine so sheetlift can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{Extraction, Inspection, TargetKind};
use crate::notices::{Notice, Report, Severity};
use crate::utils::pluralize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a notice in cargo-style format to stdout.
pub fn print_notice(notice: &Notice, file_path: &Path) {
    print_notice_to(notice, file_path, &mut io::stdout().lock());
}

/// Print a notice to a custom writer.
pub fn print_notice_to<W: Write>(notice: &Notice, file_path: &Path, writer: &mut W) {
    let severity = match notice.report_severity() {
        Severity::Info => "info".bold().blue(),
        Severity::Warning => "warning".bold().yellow(),
        Severity::Error => "error".bold().red(),
    };
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        notice.message(),
        notice.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path.display());
    if let Some(details) = notice.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }
}

/// Print the summary line of a successful extraction.
///
/// After a dry run the rewritten text goes to stdout, so the summary goes to
/// stderr.
pub fn print_extracted(extraction: &Extraction, file_path: &Path, applied: bool) {
    if applied {
        print_extracted_to(extraction, file_path, applied, &mut io::stdout().lock());
    } else {
        print_extracted_to(extraction, file_path, applied, &mut io::stderr().lock());
    }
}

pub fn print_extracted_to<W: Write>(
    extraction: &Extraction,
    file_path: &Path,
    applied: bool,
    writer: &mut W,
) {
    let names = extraction.style_names.join(", ");
    let message = format!(
        "{} {} into {} ({})",
        if applied { "Extracted" } else { "Would extract" },
        pluralize(extraction.style_names.len(), "style"),
        extraction.registry_name,
        names
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
    if applied {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path.display());
    }
}

/// Print a file inspection to stdout.
pub fn print_inspection(inspection: &Inspection, file_path: &Path) {
    print_inspection_to(inspection, file_path, &mut io::stdout().lock());
}

pub fn print_inspection_to<W: Write>(inspection: &Inspection, file_path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "{}", file_path.display().to_string().bold());

    let language = inspection.language_id.as_deref().unwrap_or("unknown");
    let _ = writeln!(
        writer,
        "  language: {} ({})",
        language,
        mark(inspection.advice.language_supported, "supported", "unsupported")
    );
    let _ = writeln!(
        writer,
        "  dialect:  {}",
        mark(inspection.advice.looks_like_dialect, "react-native", "not detected")
    );
    if let Some(has_style) = inspection.advice.line_has_inline_style {
        let _ = writeln!(
            writer,
            "  line:     {}",
            mark(has_style, "inline style", "no inline style")
        );
    }

    if let Some(error) = &inspection.parse_error {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), error);
    }

    let _ = writeln!(writer);
    let registry_count = match inspection.registries.len() {
        1 => "1 registry".to_string(),
        count => format!("{} registries", count),
    };
    let _ = writeln!(writer, "{}", registry_count.bold());
    let width = inspection
        .registries
        .iter()
        .map(|registry| registry.line.to_string().len())
        .max()
        .unwrap_or(1);
    for registry in &inspection.registries {
        let entries = if registry.entries.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            registry.entries.join(", ")
        };
        let _ = writeln!(
            writer,
            "  {:>width$} {} {}: {}",
            registry.line.to_string().blue(),
            "|".blue(),
            registry.name.cyan(),
            entries,
            width = width
        );
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{}",
        pluralize(inspection.targets.len(), "inline style").bold()
    );
    let locations: Vec<String> = inspection
        .targets
        .iter()
        .map(|target| format!("{}:{}", target.line, target.column))
        .collect();
    let width = locations
        .iter()
        .map(|location| UnicodeWidthStr::width(location.as_str()))
        .max()
        .unwrap_or(0);
    for (target, location) in inspection.targets.iter().zip(&locations) {
        let kind = match target.kind {
            TargetKind::Attribute => "attribute",
            TargetKind::ArrayElement => "array element",
        };
        let _ = writeln!(
            writer,
            "  {:<width$} {} {}, {} static, {} dynamic",
            location.blue(),
            "|".blue(),
            kind,
            target.static_count,
            target.dynamic_count,
            width = width
        );
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "next name: {}", inspection.suggested_name.cyan());
}

fn mark(ok: bool, yes: &str, no: &str) -> String {
    if ok {
        format!("{} {}", SUCCESS_MARK.green(), yes)
    } else {
        format!("{} {}", FAILURE_MARK.red(), no)
    }
}
