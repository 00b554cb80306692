//! JSON output formatting.

use crate::types::ClassificationReport;
use std::io;

/// Print a report in JSON format.
pub fn print_json(report: &ClassificationReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
