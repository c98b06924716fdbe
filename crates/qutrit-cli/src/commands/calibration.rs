//! Calibration command implementation.
//!
//! List the Gaussian pulse calibrations used to drive each transition.

use anyhow::Result;
use console::style;
use std::path::Path;
use tracing::info;

use qutrit_gates::Subspace;

use super::common::OutputFormat;
use crate::config::{CalibrationFile, PulseCalibration};

/// Execute the calibration command.
pub fn execute(
    path: Option<&Path>,
    backend: Option<&str>,
    transition: Option<Subspace>,
    format: OutputFormat,
) -> Result<()> {
    let (file, source) = CalibrationFile::load(path)?;
    let records = file.select(backend, transition);
    info!(source = %source, matched = records.len(), "selected calibrations");

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Table => print_table(&records, &source),
    }

    Ok(())
}

fn print_table(records: &[&PulseCalibration], source: &str) {
    println!(
        "{} ({})",
        style("Pulse calibrations").cyan().bold(),
        style(source).dim()
    );
    println!();

    if records.is_empty() {
        println!("  {}", style("No matching calibrations").yellow());
        return;
    }

    println!(
        "  {:<14} {:>5} {:>4} {:<8} {:>8} {:>7} {:>10}  {:<16} {}",
        "BACKEND", "QUBIT", "SUB", "VARIANT", "DURATION", "SIGMA", "AMPLITUDE", "FREQUENCY", "UPDATED"
    );
    println!("  {}", "─".repeat(96));
    for cal in records {
        let frequency = cal
            .frequency_hz
            .map_or_else(|| "-".to_string(), |f| format!("{:.6} GHz", f / 1e9));
        println!(
            "  {:<14} {:>5} {:>4} {:<8} {:>8} {:>7.1} {:>10.6}  {:<16} {}",
            style(&cal.backend).bold(),
            cal.qubit,
            cal.transition,
            cal.variant,
            cal.duration,
            cal.sigma,
            cal.amplitude,
            frequency,
            cal.updated.as_deref().unwrap_or("-"),
        );
    }
}
