use ndarray::array;

use specsplit_core::detection::threshold::range_mask;

#[test]
fn test_range_is_inclusive_on_both_bounds() {
    let grid = array![[14u8, 15], [255, 16]];
    let mask = range_mask(&grid, 15, 255);

    assert!(!mask[[0, 0]]);
    assert!(mask[[0, 1]]);
    assert!(mask[[1, 0]]);
    assert!(mask[[1, 1]]);
}

#[test]
fn test_inverted_range_selects_nothing() {
    let grid = array![[0u8, 100, 200], [50, 150, 255]];
    let mask = range_mask(&grid, 200, 100);

    assert!(mask.iter().all(|&v| !v));
}

#[test]
fn test_mask_matches_grid_dimensions() {
    let grid = ndarray::Array2::<u8>::zeros((128, 1000));
    let mask = range_mask(&grid, 15, 255);

    assert_eq!(mask.dim(), (128, 1000));
    assert!(mask.iter().all(|&v| !v));
}
