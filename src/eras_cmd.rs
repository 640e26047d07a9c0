//! Eras command: list the era catalog.

use std::io::{self, Write};

use anyhow::{Context, Result};

use wareki_era::{CATALOG_VERSION, ERA_CATALOG};

use crate::cli::ErasArgs;

/// Print the catalog.
pub fn run(args: ErasArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    if args.json {
        let json =
            serde_json::to_string_pretty(&ERA_CATALOG).context("failed to serialize catalog")?;
        writeln!(out, "{json}").context("failed to write output")?;
        return Ok(());
    }
    for line in table_lines() {
        writeln!(out, "{line}").context("failed to write output")?;
    }
    Ok(())
}

fn table_lines() -> Vec<String> {
    let mut lines = vec![format!("# era catalog v{CATALOG_VERSION}")];
    lines.extend(ERA_CATALOG.iter().map(|info| {
        format!(
            "{} {} {} ({}) {}",
            info.id, info.initial, info.name, info.romaji, info.start
        )
    }));
    lines
}
