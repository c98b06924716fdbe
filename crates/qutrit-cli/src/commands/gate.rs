//! Gate command implementation.
//!
//! Build a gate from the catalogue and print its matrix.

use anyhow::{Context, Result};
use console::style;
use num_complex::Complex64;
use serde::Serialize;
use tracing::info;

use qutrit_gates::{Level, QutritGate, UNITARITY_TOLERANCE, Unitary3x3};

use super::common::{OutputFormat, parse_angles};

/// Result of applying a gate to a basis state.
#[derive(Debug, Serialize)]
pub struct Evolution {
    /// Initial basis label.
    pub initial: Level,
    /// Output amplitudes in (g, e, h) order.
    pub amplitudes: [Complex64; 3],
    /// Output populations in (g, e, h) order.
    pub populations: [f64; 3],
}

/// Everything the gate command reports.
#[derive(Debug, Serialize)]
pub struct GateReport {
    /// The gate with its bound angles.
    pub gate: QutritGate,
    /// The 3x3 matrix.
    pub matrix: Unitary3x3,
    /// Largest deviation of U†U from the identity.
    pub unitarity_error: f64,
    /// Output state, if an initial state was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evolution: Option<Evolution>,
}

impl GateReport {
    /// Build the report for `name(params)`, optionally applied to `initial`.
    pub fn build(name: &str, params: &[f64], initial: Option<Level>) -> Result<Self> {
        let gate = QutritGate::from_name(name, params)?;
        let matrix = gate.matrix();
        let evolution = initial.map(|level| {
            let ket = level.basis_state().map(|amp| Complex64::new(amp, 0.0));
            let amplitudes = matrix.apply(&ket);
            Evolution {
                initial: level,
                amplitudes,
                populations: amplitudes.map(|a| a.norm_sqr()),
            }
        });

        Ok(Self {
            gate,
            matrix,
            unitarity_error: matrix.unitarity_error(),
            evolution,
        })
    }
}

/// Execute the gate command.
pub fn execute(
    name: &str,
    params: &[String],
    initial: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let angles = parse_angles(params)?;
    let initial = initial
        .map(str::parse::<Level>)
        .transpose()
        .context("Invalid initial state")?;

    let report = GateReport::build(name, &angles, initial)?;
    info!(gate = %report.gate, error = report.unitarity_error, "built gate");

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &GateReport) {
    let scope = match report.gate.subspace() {
        Some(s) => format!("subspace {s}"),
        None => "single level".to_string(),
    };
    println!(
        "{} {} on {}",
        style("Gate").cyan().bold(),
        style(report.gate).bold(),
        scope
    );
    println!();
    print!("{}", report.matrix);
    println!();

    let verdict = if !report.matrix.is_finite() {
        style("non-finite").red().bold()
    } else if report.unitarity_error <= UNITARITY_TOLERANCE {
        style("unitary").green()
    } else {
        style("NOT unitary").red().bold()
    };
    println!(
        "  Unitarity error: {:.3e} ({verdict})",
        report.unitarity_error
    );

    if let Some(evo) = &report.evolution {
        println!();
        println!("  Initial state |{}⟩:", evo.initial);
        for level in Level::ALL {
            let i = level.index();
            let amp = evo.amplitudes[i];
            let pop = evo.populations[i];
            let bar: String = "█".repeat((pop * 40.0).round() as usize);
            println!(
                "    |{}⟩  {:>8.4} {:+.4}i  {:>6.2}% {}",
                style(level).cyan(),
                amp.re,
                amp.im,
                pop * 100.0,
                style(bar).green()
            );
        }
    }
}
