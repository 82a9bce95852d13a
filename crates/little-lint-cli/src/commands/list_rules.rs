//! List rules command implementation.

use anyhow::{Context, Result};
use little_lint::rules::rule_infos;
use little_lint::ViolationKind;

/// Runs the list-rules command.
pub fn run() -> Result<()> {
    let infos = rule_infos().context("Failed to build the built-in rules")?;

    println!("Available rules:\n");
    println!("{:<30} Description", "Name");
    println!("{}", "-".repeat(80));
    for info in infos {
        println!("{:<30} {}", info.name, info.description);
    }

    println!("\nViolation kinds:\n");
    println!("{:<8} {:<38} Severity", "Code", "Name");
    println!("{}", "-".repeat(80));
    for kind in ViolationKind::ALL {
        println!("{:<8} {:<38} {}", kind.code(), kind.name(), kind.severity());
    }

    println!("\nUse --select / --ignore with names or codes, e.g.:");
    println!("  little-lint check --select imports-not-at-top,LL006");
    println!("  little-lint check --ignore module-not-found");
    println!("\nDisable a rule in little-lint.toml:");
    println!("  [rules.import-order]");
    println!("  enabled = false");
    Ok(())
}
