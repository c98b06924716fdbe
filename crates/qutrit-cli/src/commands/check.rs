//! Check command implementation.
//!
//! Sweep every gate in the catalogue over a dense angle grid and report the
//! worst unitarity error, locality violations and zero-angle identity checks.

use anyhow::Result;
use console::style;
use std::f64::consts::PI;
use tracing::{debug, warn};

use qutrit_gates::{QutritGate, Subspace, Unitary3x3};

/// Worst-case findings for one gate family.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyReport {
    /// Gate name.
    pub name: &'static str,
    /// Number of matrices checked.
    pub evaluated: usize,
    /// Largest unitarity error seen.
    pub worst_error: f64,
    /// Angles at which the worst error occurred.
    pub worst_params: Vec<f64>,
    /// Number of matrices that mixed the spectator level into the subspace.
    pub locality_violations: usize,
    /// Whether all-zero angles gave the identity.
    pub identity_at_zero: bool,
}

impl FamilyReport {
    /// True if the family passed every check at `tolerance`.
    pub fn passed(&self, tolerance: f64) -> bool {
        self.worst_error <= tolerance && self.locality_violations == 0 && self.identity_at_zero
    }
}

/// Angle grid: `samples` evenly spaced points over [-4π, 4π] plus edge values.
pub fn angle_grid(samples: usize) -> Vec<f64> {
    let mut angles = vec![0.0, PI, -PI, 2.0 * PI, -2.0 * PI, 100.0 * PI, -1001.0 * PI, 1e-12];
    if samples > 1 {
        let step = 8.0 * PI / (samples - 1) as f64;
        angles.extend((0..samples).map(|k| -4.0 * PI + k as f64 * step));
    }
    angles
}

/// Sweep one gate family over `angles`.
///
/// Four-parameter gates draw their remaining angles from shifted positions in
/// the same grid so every combination stays deterministic.
pub fn check_family(name: &'static str, angles: &[f64]) -> Result<FamilyReport> {
    let n_params = QutritGate::arity(name)?;
    let zero = QutritGate::from_name(name, &vec![0.0; n_params])?;
    let mut report = FamilyReport {
        name,
        evaluated: 0,
        worst_error: 0.0,
        worst_params: vec![0.0; n_params],
        locality_violations: 0,
        identity_at_zero: zero.matrix() == Unitary3x3::identity(),
    };

    let len = angles.len();
    for i in 0..len {
        let params: Vec<f64> = [0, 3, 7, 11][..n_params]
            .iter()
            .map(|shift| angles[(i + shift) % len])
            .collect();
        let gate = QutritGate::from_name(name, &params)?;
        let matrix = gate.matrix();
        let error = matrix.unitarity_error();

        if error.is_nan() || error > report.worst_error {
            report.worst_error = error;
            report.worst_params.clone_from(&params);
        }
        // Composites carry a phase on the spectator, so only leakage counts.
        if let Some(spectator) = gate.subspace().map(Subspace::spectator) {
            let local = if gate.is_composite() {
                matrix.isolates(spectator)
            } else {
                matrix.acts_trivially_on(spectator)
            };
            if !local {
                report.locality_violations += 1;
            }
        }
        report.evaluated += 1;
    }

    debug!(
        gate = name,
        evaluated = report.evaluated,
        worst_error = report.worst_error,
        "checked gate family"
    );
    Ok(report)
}

/// Execute the check command.
pub fn execute(samples: usize, tolerance: f64) -> Result<()> {
    let angles = angle_grid(samples);
    println!(
        "{} {} gate families over {} angles (tolerance {:.0e})\n",
        style("Checking").cyan().bold(),
        QutritGate::NAMES.len(),
        angles.len(),
        tolerance
    );

    let mut failures = 0;
    for name in QutritGate::NAMES {
        let report = check_family(name, &angles)?;
        let passed = report.passed(tolerance);
        if !passed {
            warn!(gate = name, ?report, "gate family failed checks");
            failures += 1;
        }
        println!(
            "  {} {:<4} {:>6} matrices  worst error {:.3e}  locality {}  identity at 0 {}",
            if passed {
                style("✓").green()
            } else {
                style("✗").red()
            },
            style(name).bold(),
            report.evaluated,
            report.worst_error,
            if report.locality_violations == 0 {
                style("ok".to_string()).green()
            } else {
                style(format!("{} violations", report.locality_violations)).red()
            },
            if report.identity_at_zero {
                style("ok").green()
            } else {
                style("no").red()
            },
        );
    }

    if failures > 0 {
        anyhow::bail!("{failures} gate families failed the unitarity checks");
    }
    println!("\n{} All gate families passed", style("✓").green().bold());
    Ok(())
}
