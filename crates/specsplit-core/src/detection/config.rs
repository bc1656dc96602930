use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_H_KERNEL, DEFAULT_LOW_THRESHOLD, LOG_V_KERNEL, MAX_INTENSITY, MEL_LIN_V_KERNEL,
};
use crate::error::{Result, SpecsplitError};

/// Frequency-axis scale of the spectrograms in a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Logarithmic frequency axis.
    Log,
    /// Mel-warped frequency axis.
    Mel,
    /// Linear frequency axis.
    Lin,
}

impl Scale {
    /// All supported scales, in declaration order.
    pub const ALL: [Scale; 3] = [Scale::Log, Scale::Mel, Scale::Lin];

    /// Highlight parameters tuned for this scale.
    pub fn params(self) -> HighlightParams {
        match self {
            Scale::Log => HighlightParams::default(),
            Scale::Mel | Scale::Lin => HighlightParams {
                v_kernel: MEL_LIN_V_KERNEL,
                ..HighlightParams::default()
            },
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scale::Log => write!(f, "log"),
            Scale::Mel => write!(f, "mel"),
            Scale::Lin => write!(f, "lin"),
        }
    }
}

/// Threshold range and structuring element sizes used to highlight a
/// transition marker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HighlightParams {
    /// Lower bound of the intensity range kept as foreground (inclusive).
    #[serde(default = "default_low_threshold")]
    pub low_threshold: u8,
    /// Upper bound of the intensity range kept as foreground (inclusive).
    #[serde(default = "default_high_threshold")]
    pub high_threshold: u8,
    /// Width of the rectangular structuring element for closing.
    #[serde(default = "default_h_kernel")]
    pub h_kernel: usize,
    /// Height of the rectangular structuring element for closing.
    #[serde(default = "default_v_kernel")]
    pub v_kernel: usize,
}

fn default_low_threshold() -> u8 {
    DEFAULT_LOW_THRESHOLD
}
fn default_high_threshold() -> u8 {
    MAX_INTENSITY
}
fn default_h_kernel() -> usize {
    DEFAULT_H_KERNEL
}
fn default_v_kernel() -> usize {
    LOG_V_KERNEL
}

impl Default for HighlightParams {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: MAX_INTENSITY,
            h_kernel: DEFAULT_H_KERNEL,
            v_kernel: LOG_V_KERNEL,
        }
    }
}

impl HighlightParams {
    /// Reject structuring element sizes that cannot form a kernel.
    pub fn validate(&self) -> Result<()> {
        if self.h_kernel == 0 || self.v_kernel == 0 {
            return Err(SpecsplitError::InvalidParameter(format!(
                "structuring element must be at least 1x1, got {}x{}",
                self.h_kernel, self.v_kernel
            )));
        }
        Ok(())
    }
}
