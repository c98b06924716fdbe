//! State command implementation.

use anyhow::Result;
use console::style;

use qutrit_gates::{Level, basis_state};

use super::common::OutputFormat;

/// Execute the state command.
pub fn execute(label: &str, format: OutputFormat) -> Result<()> {
    let vector = basis_state(label)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&vector)?),
        OutputFormat::Table => {
            println!("{} |{}⟩", style("Basis state").cyan().bold(), label);
            for level in Level::ALL {
                println!("  {}  {}", style(level).dim(), vector[level.index()]);
            }
        }
    }

    Ok(())
}
