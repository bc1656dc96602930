use std::ffi::OsStr;
use std::path::Path;

use image::DynamicImage;
use ndarray::Array2;

use crate::error::Result;

/// Extensions accepted as spectrogram images (lossless raster formats).
const SPECTROGRAM_EXTENSIONS: &[&str] = &["png", "tif", "tiff", "bmp"];

/// Load a spectrogram image, preserving its channel depth.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Reduce an image to an 8-bit intensity grid, shape = (height, width).
pub fn luma_grid(image: &DynamicImage) -> Array2<u8> {
    let gray = image.to_luma8();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<u8>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            data[[row, col]] = gray.get_pixel(col as u32, row as u32).0[0];
        }
    }

    data
}

/// Check if a path has a supported spectrogram image extension.
pub fn is_spectrogram_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        SPECTROGRAM_EXTENSIONS
            .iter()
            .any(|s| ext.eq_ignore_ascii_case(OsStr::new(s)))
    })
}
