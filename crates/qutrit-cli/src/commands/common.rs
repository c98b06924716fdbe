//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use std::f64::consts::PI;

/// Output format for commands that print structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Parse an angle in radians.
///
/// Accepts plain numbers (`1.5708`, `-0.3`, `nan`) and multiples of π written
/// as `pi`, `-pi`, `2pi`, `3*pi/4`, `-pi/2` or `0.5*pi`.
pub fn parse_angle(input: &str) -> Result<f64> {
    let text = input.trim().to_ascii_lowercase();
    if text.is_empty() {
        anyhow::bail!("Empty angle");
    }

    let (numerator, denominator) = match text.split_once('/') {
        Some((num, den)) => {
            let den: f64 = den
                .trim()
                .parse()
                .with_context(|| format!("Invalid angle denominator in '{input}'"))?;
            if den == 0.0 {
                anyhow::bail!("Angle denominator is zero in '{input}'");
            }
            (num.trim(), den)
        }
        None => (text.as_str(), 1.0),
    };

    let value = match numerator.strip_suffix("pi") {
        Some(coeff) => {
            let coeff = coeff.trim().trim_end_matches('*').trim();
            let factor = match coeff {
                "" | "+" => 1.0,
                "-" => -1.0,
                other => other
                    .parse::<f64>()
                    .with_context(|| format!("Invalid multiple of pi in '{input}'"))?,
            };
            factor * PI
        }
        None => numerator
            .parse::<f64>()
            .with_context(|| format!("Invalid angle '{input}'"))?,
    };

    Ok(value / denominator)
}

/// Parse a list of angles.
pub fn parse_angles(inputs: &[String]) -> Result<Vec<f64>> {
    inputs.iter().map(|s| parse_angle(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-15
    }

    #[test]
    fn test_plain_numbers() {
        assert!(close(parse_angle("1.25").unwrap(), 1.25));
        assert!(close(parse_angle("-0.5").unwrap(), -0.5));
        assert!(close(parse_angle(" 3 ").unwrap(), 3.0));
    }

    #[test]
    fn test_pi_expressions() {
        assert!(close(parse_angle("pi").unwrap(), PI));
        assert!(close(parse_angle("PI").unwrap(), PI));
        assert!(close(parse_angle("-pi").unwrap(), -PI));
        assert!(close(parse_angle("2pi").unwrap(), 2.0 * PI));
        assert!(close(parse_angle("-pi/2").unwrap(), -PI / 2.0));
        assert!(close(parse_angle("3*pi/4").unwrap(), 3.0 * PI / 4.0));
        assert!(close(parse_angle("0.5 * pi").unwrap(), 0.5 * PI));
        assert!(close(parse_angle("1/4").unwrap(), 0.25));
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert!(parse_angle("nan").unwrap().is_nan());
        assert!(parse_angle("inf").unwrap().is_infinite());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_angle("").is_err());
        assert!(parse_angle("tau").is_err());
        assert!(parse_angle("pi/0").is_err());
        assert!(parse_angle("xpi").is_err());
        assert!(parse_angle("pi/two").is_err());
    }
}
