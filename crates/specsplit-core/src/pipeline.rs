use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::{AFTER_DIR_NAME, BEFORE_DIR_NAME};
use crate::detection::{
    choose_split, find_split_columns, highlight_transition, HighlightParams, SplitDecision,
};
use crate::error::Result;
use crate::io::divide::divide_at_column;
use crate::io::image_io::{load_image, luma_grid};

/// Output directory pair for the two halves of each divided spectrogram.
#[derive(Clone, Debug)]
pub struct OutputLayout {
    /// Receives the pre-transition halves.
    pub before_dir: PathBuf,
    /// Receives the post-transition halves.
    pub after_dir: PathBuf,
}

impl OutputLayout {
    /// Standard layout beneath an output root: `<root>/c` and `<root>/w`.
    pub fn new(output_root: &Path) -> Self {
        Self {
            before_dir: output_root.join(BEFORE_DIR_NAME),
            after_dir: output_root.join(AFTER_DIR_NAME),
        }
    }
}

/// Result of processing one spectrogram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitOutcome {
    /// The image was divided at the given column.
    Divided { column: usize },
    /// No transition marker was found; nothing was written.
    NoTransition,
}

/// Process a single spectrogram end to end: highlight the transition
/// marker, locate the split column, and divide the image into the layout's
/// directories.
///
/// A missing transition is a normal outcome, not an error. A chosen column
/// of zero would leave the left half empty and is likewise reported as
/// [`SplitOutcome::NoTransition`].
pub fn process_spectrogram(
    path: &Path,
    params: &HighlightParams,
    layout: &OutputLayout,
) -> Result<SplitOutcome> {
    let image = load_image(path)?;
    let grid = luma_grid(&image);

    let mask = highlight_transition(&grid, params)?;
    let candidates = find_split_columns(&mask);
    debug!(
        path = %path.display(),
        candidates = candidates.len(),
        "scanned mask for split columns"
    );

    let column = match choose_split(&candidates) {
        SplitDecision::NoSplitFound => return Ok(SplitOutcome::NoTransition),
        SplitDecision::SplitAt(0) => {
            debug!(path = %path.display(), "split at column 0 leaves an empty half, skipping");
            return Ok(SplitOutcome::NoTransition);
        }
        SplitDecision::SplitAt(column) => column,
    };

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("spectrogram.png");
    divide_at_column(
        &image,
        column,
        &layout.before_dir,
        &layout.after_dir,
        filename,
    )?;

    Ok(SplitOutcome::Divided { column })
}
