use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use specsplit_core::detection::{
    choose_split, find_split_columns, highlight_transition, Scale, SplitDecision,
};
use specsplit_core::io::image_io::{load_image, luma_grid};

use super::{collect_inputs, ScaleArg};

#[derive(Args)]
pub struct DetectArgs {
    /// Input spectrogram image or directory of images
    pub input: PathBuf,

    /// Frequency scale used on the spectrogram y-axis
    #[arg(short, long, value_enum)]
    pub scale: ScaleArg,

    /// List every candidate column, not just the chosen one
    #[arg(long)]
    pub candidates: bool,
}

/// Dry run: report the detected split column per image, writing nothing.
pub fn run(args: &DetectArgs) -> Result<()> {
    let inputs = collect_inputs(&args.input)?;
    let params = Scale::from(args.scale).params();

    println!("{:>10}  {:>6}  {}", "Split", "Cands", "File");
    println!("{}", "-".repeat(40));

    for path in &inputs {
        let image = load_image(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        let mask = highlight_transition(&luma_grid(&image), &params)?;
        let candidates = find_split_columns(&mask);

        let chosen = match choose_split(&candidates) {
            SplitDecision::SplitAt(column) => column.to_string(),
            SplitDecision::NoSplitFound => "-".to_string(),
        };
        println!(
            "{:>10}  {:>6}  {}",
            chosen,
            candidates.len(),
            path.display()
        );

        if args.candidates && !candidates.is_empty() {
            let listed: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
            println!("            columns: {}", listed.join(", "));
        }
    }

    Ok(())
}
