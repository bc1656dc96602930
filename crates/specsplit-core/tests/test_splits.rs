use ndarray::Array2;

use specsplit_core::detection::{choose_split, find_split_columns, SplitDecision};

/// Mask with one vertical line in `col`, foreground in all but the last
/// `missing` rows.
fn mask_with_column(h: usize, w: usize, col: usize, missing: usize) -> Array2<bool> {
    let mut mask = Array2::from_elem((h, w), false);
    for row in 0..h - missing {
        mask[[row, col]] = true;
    }
    mask
}

#[test]
fn test_full_column_is_single_candidate() {
    let mask = mask_with_column(100, 50, 20, 0);
    assert_eq!(find_split_columns(&mask), vec![20]);
}

#[test]
fn test_nearly_full_column_qualifies() {
    // 95 of 100 rows foreground sits exactly on the qualifying fraction.
    let mask = mask_with_column(100, 50, 20, 5);
    assert_eq!(find_split_columns(&mask), vec![20]);
}

#[test]
fn test_broken_column_does_not_qualify() {
    let mask = mask_with_column(100, 50, 20, 6);
    assert!(find_split_columns(&mask).is_empty());
}

#[test]
fn test_empty_mask_has_no_candidates() {
    let mask = Array2::from_elem((128, 1000), false);
    assert!(find_split_columns(&mask).is_empty());
}

#[test]
fn test_thick_band_yields_contiguous_candidates() {
    let mut mask = Array2::from_elem((64, 30), false);
    for col in 10..=12 {
        for row in 0..64 {
            mask[[row, col]] = true;
        }
    }

    let candidates = find_split_columns(&mask);
    assert_eq!(candidates, vec![10, 11, 12]);
    assert_eq!(choose_split(&candidates), SplitDecision::SplitAt(11));
}

#[test]
fn test_candidates_are_ascending() {
    let mut mask = Array2::from_elem((32, 40), false);
    for &col in &[25, 5, 15] {
        for row in 0..32 {
            mask[[row, col]] = true;
        }
    }

    assert_eq!(find_split_columns(&mask), vec![5, 15, 25]);
}
