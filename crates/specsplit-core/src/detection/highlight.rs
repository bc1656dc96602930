use ndarray::Array2;

use super::config::HighlightParams;
use super::morphology::close;
use super::threshold::range_mask;
use crate::error::Result;

/// Isolate pixels likely to belong to a transition marker.
///
/// Pipeline: inclusive range threshold -> morphological closing with a
/// rectangular `h_kernel x v_kernel` element. Closing connects broken line
/// segments so a true transition marker comes out as an unbroken vertical
/// stroke.
///
/// The returned mask has the same dimensions as the input grid.
pub fn highlight_transition(
    grid: &Array2<u8>,
    params: &HighlightParams,
) -> Result<Array2<bool>> {
    params.validate()?;
    let mask = range_mask(grid, params.low_threshold, params.high_threshold);
    close(&mask, params.h_kernel, params.v_kernel)
}
