use ndarray::Array2;

/// Binarize an intensity grid: a sample becomes foreground iff its value
/// lies in `[low, high]` inclusive.
///
/// An inverted range (`low > high`) selects nothing and yields the
/// all-background mask.
pub fn range_mask(grid: &Array2<u8>, low: u8, high: u8) -> Array2<bool> {
    grid.mapv(|v| v >= low && v <= high)
}
