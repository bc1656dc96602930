use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use specsplit_core::detection::Scale;
use specsplit_core::pipeline::{process_spectrogram, OutputLayout, SplitOutcome};
use tracing::{info, warn};

use crate::summary::{print_batch_summary, BatchStats};

use super::{collect_inputs, ScaleArg};

#[derive(Args)]
pub struct SplitArgs {
    /// Input spectrogram image or directory of images (scanned non-recursively)
    pub input: PathBuf,

    /// Output directory root; before halves go to c/, after halves to w/
    #[arg(short, long)]
    pub output: PathBuf,

    /// Frequency scale used on the spectrogram y-axis
    #[arg(short, long, value_enum)]
    pub scale: ScaleArg,
}

pub fn run(args: &SplitArgs) -> Result<()> {
    let inputs = collect_inputs(&args.input)?;
    let scale = Scale::from(args.scale);
    let params = scale.params();
    let layout = OutputLayout::new(&args.output);

    println!("Dividing {} spectrogram(s), {} scale", inputs.len(), scale);

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut stats = BatchStats::default();
    for path in &inputs {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<non-utf8>");
        pb.set_message(format!("Processing {name}"));

        match process_spectrogram(path, &params, &layout) {
            Ok(SplitOutcome::Divided { column }) => {
                info!(path = %path.display(), column, "divided spectrogram");
                stats.divided += 1;
            }
            Ok(SplitOutcome::NoTransition) => {
                info!(path = %path.display(), "no transition found");
                stats.skipped += 1;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to process spectrogram");
                stats.failures.push((path.clone(), e.to_string()));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_batch_summary(&stats, &layout);

    if !stats.failures.is_empty() {
        bail!(
            "{} of {} spectrogram(s) failed",
            stats.failures.len(),
            inputs.len()
        );
    }
    Ok(())
}
