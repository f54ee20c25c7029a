use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use orderdesk_core::persist;
use orderdesk_core::{FieldSpec, ItemKind, OrderPanel};

#[derive(Parser, Debug)]
#[command(
    name = "orderdesk",
    author,
    version,
    about = "Terminal form editor for car-part orders",
    long_about = "Assemble an order of headlights, doors and engines, each edited as a \
                  small form, and save or reopen it as a YAML file. Run without a \
                  command to start the interactive editor."
)]
pub struct Cli {
    /// Order file used by Open and Save (overrides config and ORDERDESK_FILE)
    #[arg(long, short = 'f', global = true)]
    pub file: Option<PathBuf>,

    /// Config file (default: ~/.orderdesk/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the order file, then list its items
    Check,
    /// List item types and their fields
    Schema,
}

/// Load `path` the way Open does and print one line per item
pub fn run_check(path: &Path) -> Result<()> {
    let order = persist::load(path)
        .with_context(|| format!("Failed to load order file {}", path.display()))?;

    // Rebuilding the forms catches records that do not fit their schema
    let mut panel = OrderPanel::new();
    panel
        .repopulate(&order)
        .with_context(|| format!("Order file {} does not match the schema", path.display()))?;

    println!("{}: {} item(s)", path.display(), order.len());
    for (idx, record) in panel.snapshot().iter().enumerate() {
        let fields: Vec<String> = record
            .fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        println!("{:>3}. {} {}", idx + 1, record.kind, fields.join(" "));
    }

    Ok(())
}

fn describe(spec: &FieldSpec) -> String {
    match spec {
        FieldSpec::Choice { label, options, .. } => {
            format!("{}: choice [{}]", label, options.join(", "))
        }
        FieldSpec::Integer { label, min, max, .. } => {
            format!("{}: integer {}..={}", label, min, max)
        }
        FieldSpec::Flag { label, default } => {
            format!("{}: flag{}", label, if *default { " (default)" } else { "" })
        }
    }
}

/// Print the item schema registry
pub fn run_schema() {
    for kind in ItemKind::ALL {
        println!("{}", kind);
        for spec in kind.fields() {
            println!("  {}", describe(spec));
        }
    }
}
