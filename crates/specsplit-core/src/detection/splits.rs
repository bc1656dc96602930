use ndarray::Array2;

use crate::consts::FULL_COLUMN_FRACTION;

/// Outcome of split-point selection over a candidate list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitDecision {
    /// No column qualified as a transition marker.
    NoSplitFound,
    /// The authoritative split column.
    SplitAt(usize),
}

/// Scan the mask for columns that form an unbroken vertical line.
///
/// A column qualifies when at least `FULL_COLUMN_FRACTION` of its samples
/// are foreground. Columns are evaluated independently; a transition band
/// several columns thick yields several contiguous candidates, resolved by
/// [`choose_split`].
///
/// Returns the qualifying column indices in ascending order; empty if none
/// qualify.
pub fn find_split_columns(mask: &Array2<bool>) -> Vec<usize> {
    let (h, w) = mask.dim();
    if h == 0 {
        return Vec::new();
    }

    let required = (h as f32 * FULL_COLUMN_FRACTION).ceil() as usize;
    let mut columns = Vec::new();
    for col in 0..w {
        let foreground = mask.column(col).iter().filter(|&&v| v).count();
        if foreground >= required {
            columns.push(col);
        }
    }
    columns
}

/// Pick the split column from an ascending candidate list.
///
/// A band of qualifying columns is assumed roughly symmetric around the
/// true transition, so the middle candidate (index `len / 2`) is chosen.
pub fn choose_split(candidates: &[usize]) -> SplitDecision {
    if candidates.is_empty() {
        SplitDecision::NoSplitFound
    } else {
        SplitDecision::SplitAt(candidates[candidates.len() / 2])
    }
}
