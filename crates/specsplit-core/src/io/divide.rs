use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::{Result, SpecsplitError};

/// Split an image into left and right halves at `split_column` and write
/// both, reusing `filename` in each output directory.
///
/// The partition is exact: the left half holds columns `[0, split_column)`,
/// the right half `[split_column, width)`; their union reconstructs the
/// source. Both halves keep the source height and channel depth.
///
/// `split_column` must satisfy `0 < split_column < width`; a split at
/// column zero would produce an empty left half and is rejected. Output
/// directories are created on first need; existing files at the
/// destination paths are overwritten.
pub fn divide_at_column(
    image: &DynamicImage,
    split_column: usize,
    left_dir: &Path,
    right_dir: &Path,
    filename: &str,
) -> Result<(PathBuf, PathBuf)> {
    let (w, h) = (image.width(), image.height());
    if w == 0 || h == 0 {
        return Err(SpecsplitError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    if split_column == 0 || split_column >= w as usize {
        return Err(SpecsplitError::InvalidSplitColumn {
            column: split_column,
            width: w as usize,
        });
    }

    let split = split_column as u32;
    let left = image.crop_imm(0, 0, split, h);
    let right = image.crop_imm(split, 0, w - split, h);

    fs::create_dir_all(left_dir)?;
    fs::create_dir_all(right_dir)?;

    let left_path = left_dir.join(filename);
    let right_path = right_dir.join(filename);
    left.save(&left_path)?;
    right.save(&right_path)?;

    Ok((left_path, right_path))
}
