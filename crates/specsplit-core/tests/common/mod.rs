use image::{GrayImage, Luma, Rgb, RgbImage};

/// Build a dark grayscale spectrogram-like image with an optional bright
/// full-height vertical line.
pub fn make_spectrogram(width: u32, height: u32, line_col: Option<u32>) -> GrayImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([0]));
    if let Some(col) = line_col {
        for row in 0..height {
            img.put_pixel(col, row, Luma([200]));
        }
    }
    img
}

/// Color variant of [`make_spectrogram`]: dark blue background with a
/// bright full-height vertical line.
pub fn make_rgb_spectrogram(width: u32, height: u32, line_col: Option<u32>) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, Rgb([0, 0, 10]));
    if let Some(col) = line_col {
        for row in 0..height {
            img.put_pixel(col, row, Rgb([220, 220, 220]));
        }
    }
    img
}
