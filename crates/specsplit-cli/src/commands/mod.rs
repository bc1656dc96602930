pub mod config;
pub mod detect;
pub mod split;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use specsplit_core::detection::Scale;
use specsplit_core::io::image_io::is_spectrogram_file;

#[derive(Clone, Copy, ValueEnum)]
pub enum ScaleArg {
    /// Logarithmic frequency axis
    Log,
    /// Mel-warped frequency axis
    Mel,
    /// Linear frequency axis
    Lin,
}

impl From<ScaleArg> for Scale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Log => Scale::Log,
            ScaleArg::Mel => Scale::Mel,
            ScaleArg::Lin => Scale::Lin,
        }
    }
}

/// Resolve the input argument into a list of spectrogram image paths.
///
/// A single qualifying file is returned as-is; a directory is scanned
/// non-recursively. Anything else is fatal, as is a directory with no
/// qualifying images.
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        if !is_spectrogram_file(input) {
            bail!(
                "{} is neither a spectrogram image, nor a folder",
                input.display()
            );
        }
        return Ok(vec![input.to_path_buf()]);
    }

    if input.is_dir() {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
        {
            let path = entry?.path();
            if path.is_file() && is_spectrogram_file(&path) {
                files.push(path);
            }
        }
        if files.is_empty() {
            bail!("{} doesn't contain any spectrogram images", input.display());
        }
        files.sort();
        return Ok(files);
    }

    bail!(
        "{} is neither a spectrogram image, nor a folder",
        input.display()
    );
}
