//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::types::{ClassificationReport, TargetType};
use console::{style, Style};
use std::io::{self, Write};

const RULE_HEAVY: &str = "═══════════════════════════════════════════════════════════════";
const RULE_LIGHT: &str = "───────────────────────────────────────────────────────────────";

/// Print a report in human-readable plain text format.
pub fn print_plain(report: &ClassificationReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plain(&mut out, report)
}

/// Write a report in plain text format to `out`.
pub fn write_plain<W: Write>(out: &mut W, report: &ClassificationReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(RULE_HEAVY).cyan())?;
    writeln!(
        out,
        "                 {} Classification Results",
        style("targetscope").cyan().bold()
    )?;
    writeln!(out, "{}", style(RULE_HEAVY).cyan())?;
    writeln!(out)?;

    writeln!(out, "  {} {}", style("Summary:").bold(), report.summary())?;
    writeln!(out)?;

    if report.targets.is_empty() {
        writeln!(out, "  {}", style("No targets classified.").dim())?;
    } else {
        writeln!(out, "  {}", style(RULE_LIGHT).dim())?;
        writeln!(
            out,
            "  {:<16}  {:<28}  {}",
            style("TYPE").bold(),
            style("INPUT").bold(),
            style("NORMALIZED").bold()
        )?;
        writeln!(out, "  {}", style(RULE_LIGHT).dim())?;

        for target in &report.targets {
            writeln!(
                out,
                "  {:<16}  {:<28}  {}",
                type_style(target.target_type).apply_to(target.target_type.as_str()),
                truncate_string(&target.original, 28),
                target.details.value()
            )?;
        }

        writeln!(out, "  {}", style(RULE_LIGHT).dim())?;
    }

    if !report.rejected.is_empty() {
        writeln!(out)?;
        writeln!(out, "  {}", style("Rejected:").red().bold())?;
        for rejected in &report.rejected {
            writeln!(
                out,
                "    {} {}",
                style("✗").red(),
                style(&rejected.reason).dim()
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", style(RULE_HEAVY).cyan())?;
    writeln!(out)?;

    Ok(())
}

fn type_style(target_type: TargetType) -> Style {
    match target_type {
        TargetType::IpAddress => Style::new().yellow(),
        TargetType::Repository => Style::new().magenta(),
        TargetType::WebApplication => Style::new().green(),
        TargetType::LocalCode => Style::new().blue(),
    }
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Truncate a string to a maximum number of characters, adding ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
