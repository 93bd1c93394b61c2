//! Report formatting and printing utilities.
//!
//! Separate from the sync run so lochelper can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::{
    core::{ChangeCounts, SourceReport, SyncReport, TableReport},
    error::LocError,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a run to stdout.
pub fn print(report: &SyncReport, verbose: bool) {
    print_to(report, verbose, &mut io::stdout().lock());
    print_skipped_warning_to(report.skipped_entries, verbose, &mut io::stderr().lock());
}

/// Print the outcome of a run to a custom writer.
///
/// Per-table sections and per-source macro counts are only printed when
/// `verbose` is set; the summary is always printed.
pub fn print_to<W: Write>(report: &SyncReport, verbose: bool, writer: &mut W) {
    if verbose {
        for table in &report.tables {
            print_table(table, writer);
        }
        for source in &report.sources {
            print_source(source, writer);
        }
        let _ = writeln!(
            writer,
            "{}",
            format!(
                "{} macro {} in total",
                report.macro_calls,
                plural(report.macro_calls, "call", "calls")
            )
            .dimmed()
        );
        let _ = writeln!(writer);
    }

    let _ = writeln!(writer, "{}", "Summary".bold());
    print_counts(&report.total(), writer);

    let _ = writeln!(writer);
    let scanned = format!(
        "Scanned {} source {}, {} interface {}",
        report.source_files,
        plural(report.source_files, "file", "files"),
        report.interface_files,
        plural(report.interface_files, "file", "files"),
    );
    if report.written {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} - wrote {} strings {}",
                scanned,
                report.tables.len(),
                plural(report.tables.len(), "file", "files")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} - dry run, no files written",
            "note:".bold().yellow(),
            scanned
        );
    }
}

/// Print the error that aborted a run.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    // Run errors already include their cause in the message.
    let message = match err.downcast_ref::<LocError>() {
        Some(err) => err.to_string(),
        None => format!("{:#}", err),
    };
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        message
    );
}

/// Warn about directory entries that could not be read.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} directory {} could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            plural(count, "entry", "entries"),
            "-v".cyan()
        );
    }
}

fn print_table<W: Write>(table: &TableReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}",
        table.path.display().to_string().bold(),
        format!(
            "({} {})",
            table.entry_count,
            plural(table.entry_count, "entry", "entries")
        )
        .dimmed()
    );
    print_counts(&table.counts, writer);
}

fn print_source<W: Write>(source: &SourceReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}",
        format!(
            "{}: {} macro {}",
            source.path.display(),
            source.macro_calls,
            plural(source.macro_calls, "call", "calls")
        )
        .dimmed()
    );
}

fn print_counts<W: Write>(counts: &ChangeCounts, writer: &mut W) {
    if counts.is_empty() {
        let _ = writeln!(writer, "    No changes made");
        return;
    }
    for (count, verb) in [
        (counts.added, "added".green()),
        (counts.updated, "updated".yellow()),
        (counts.removed, "removed".red()),
    ] {
        if count > 0 {
            let _ = writeln!(
                writer,
                "    {} {} {}",
                count,
                plural(count, "entry", "entries"),
                verb
            );
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
