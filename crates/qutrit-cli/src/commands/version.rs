//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - single-qutrit gate algebra",
        style("qutrit").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qutrit-gates  Subspace rotations, phases and composite R01/R12 gates");
    println!("  qutrit-cli    Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
