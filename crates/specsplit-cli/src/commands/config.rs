use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use specsplit_core::detection::{HighlightParams, Scale};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the table to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ParamsTable {
    log: HighlightParams,
    mel: HighlightParams,
    lin: HighlightParams,
}

/// Print the static per-scale parameter table as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let table = ParamsTable {
        log: Scale::Log.params(),
        mel: Scale::Mel.params(),
        lin: Scale::Lin.params(),
    };
    let toml_str = toml::to_string_pretty(&table)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Parameter table saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
