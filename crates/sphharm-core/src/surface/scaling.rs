use super::Grid;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Mapping from harmonic values to surface radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialProfile {
    /// `|Re Y| / max |Re Y|` squashed through `2 / (1 + e^(-2u)) - 1`.
    #[default]
    CompressedMagnitude,
    /// Plain `|Y|`. Large lobes dominate the plot under this profile.
    RawMagnitude,
}

impl RadialProfile {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompressedMagnitude => "compressed_magnitude",
            Self::RawMagnitude => "raw_magnitude",
        }
    }
}

impl Display for RadialProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Bounded sigmoid on `[0, 1]`; equal to `tanh(normalized)`.
pub fn compress_magnitude(normalized: f64) -> f64 {
    2.0 / (1.0 + (-2.0 * normalized).exp()) - 1.0
}

/// Radii for the compressed profile. An all-zero field collapses to the origin.
pub fn compressed_radii(color: &Grid) -> Grid {
    let max_val = crate::numerics::max_abs(color.values());
    if max_val == 0.0 {
        return Grid::zeros(color.rows(), color.cols());
    }

    color.map(|value| compress_magnitude(value.abs() / max_val))
}
