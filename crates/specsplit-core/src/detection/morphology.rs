use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{Result, SpecsplitError};

/// Morphological closing (dilation followed by erosion) with a rectangular
/// `width x height` structuring element.
///
/// Bridges small gaps in broken line segments and thickens candidate
/// vertical strokes without materially growing the overall foreground
/// extent.
pub fn close(mask: &Array2<bool>, width: usize, height: usize) -> Result<Array2<bool>> {
    if width == 0 || height == 0 {
        return Err(SpecsplitError::InvalidParameter(format!(
            "structuring element must be at least 1x1, got {width}x{height}"
        )));
    }
    let dilated = dilate(mask, width, height);
    Ok(erode(&dilated, width, height))
}

/// Binary dilation: a pixel becomes true if ANY pixel under the structuring
/// element is true. Out-of-bounds neighbors count as background.
pub fn dilate(mask: &Array2<bool>, width: usize, height: usize) -> Array2<bool> {
    map_rows(mask, |row, col| {
        neighborhood(mask, row, col, width, height).any(|v| v)
    })
}

/// Binary erosion: a pixel stays true only if ALL pixels under the
/// structuring element are true. Out-of-bounds neighbors count as
/// foreground, so strokes touching the image border survive intact.
pub fn erode(mask: &Array2<bool>, width: usize, height: usize) -> Array2<bool> {
    map_rows(mask, |row, col| {
        neighborhood(mask, row, col, width, height).all(|v| v)
    })
}

/// Apply a per-pixel predicate over the whole mask, row-parallel for large
/// images.
fn map_rows(
    mask: &Array2<bool>,
    predicate: impl Fn(usize, usize) -> bool + Sync,
) -> Array2<bool> {
    let (h, w) = mask.dim();
    let map_row = |row: usize| -> Vec<bool> { (0..w).map(|col| predicate(row, col)).collect() };

    let rows: Vec<Vec<bool>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(map_row).collect()
    } else {
        (0..h).map(map_row).collect()
    };

    let mut result = Array2::from_elem((h, w), false);
    for (row, values) in rows.iter().enumerate() {
        for (col, &v) in values.iter().enumerate() {
            result[[row, col]] = v;
        }
    }
    result
}

/// Iterate the in-bounds mask values under a `width x height` structuring
/// element anchored at its center over `(row, col)`.
fn neighborhood(
    mask: &Array2<bool>,
    row: usize,
    col: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = bool> + '_ {
    let (h, w) = mask.dim();
    let top = row as isize - (height / 2) as isize;
    let left = col as isize - (width / 2) as isize;

    (0..height as isize).flat_map(move |dr| {
        (0..width as isize).filter_map(move |dc| {
            let nr = top + dr;
            let nc = left + dc;
            if nr < 0 || nr >= h as isize || nc < 0 || nc >= w as isize {
                None
            } else {
                Some(mask[[nr as usize, nc as usize]])
            }
        })
    })
}
