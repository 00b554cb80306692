//! CSV output formatting.

use crate::types::ClassificationReport;
use std::io::{self, Write};

/// Print a report in CSV format.
pub fn print_csv(report: &ClassificationReport) -> io::Result<()> {
    let stdout = io::stdout();
    write_csv(stdout.lock(), report)
}

/// Write a report as CSV to `out`.
///
/// Rejected inputs are written with an empty type and the reason in the
/// `error` column.
pub fn write_csv<W: Write>(out: W, report: &ClassificationReport) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["input", "type", "key", "value", "error"])?;

    for target in &report.targets {
        wtr.write_record([
            target.original.as_str(),
            target.target_type.as_str(),
            target.details.key(),
            target.details.value(),
            "",
        ])?;
    }

    for rejected in &report.rejected {
        wtr.write_record([rejected.input.as_str(), "", "", "", rejected.reason.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
