/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Maximum 8-bit intensity; the upper threshold bound for every scale.
pub const MAX_INTENSITY: u8 = 255;

/// Fraction of a column's height that must be foreground for the column to
/// count as an unbroken vertical line.
pub const FULL_COLUMN_FRACTION: f32 = 0.95;

/// Low intensity threshold shared by all frequency scales.
pub const DEFAULT_LOW_THRESHOLD: u8 = 15;

/// Horizontal structuring element size shared by all frequency scales.
pub const DEFAULT_H_KERNEL: usize = 3;

/// Vertical structuring element size for log-scaled spectrograms.
pub const LOG_V_KERNEL: usize = 10;

/// Vertical structuring element size for mel- and linear-scaled spectrograms.
pub const MEL_LIN_V_KERNEL: usize = 20;

/// Subdirectory of the output root receiving the pre-transition halves.
pub const BEFORE_DIR_NAME: &str = "c";

/// Subdirectory of the output root receiving the post-transition halves.
pub const AFTER_DIR_NAME: &str = "w";
