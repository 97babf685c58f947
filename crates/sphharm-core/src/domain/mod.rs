mod errors;

pub use errors::{ErrorCategory, ExitCodeMapping, SphError};

use crate::surface::SurfaceError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Validated (degree, order) pair with `degree >= 0` and `|order| <= degree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuantumNumbers {
    degree: i32,
    order: i32,
}

impl QuantumNumbers {
    pub fn new(degree: i32, order: i32) -> Result<Self, SurfaceError> {
        if degree < 0 || order.unsigned_abs() > degree.unsigned_abs() {
            return Err(SurfaceError::InvalidQuantumNumbers { degree, order });
        }

        Ok(Self { degree, order })
    }

    pub const fn degree(self) -> i32 {
        self.degree
    }

    pub const fn order(self) -> i32 {
        self.order
    }
}

impl Display for QuantumNumbers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Y({}, {})", self.degree, self.order)
    }
}

/// How a front-end draws a surface field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationMode {
    #[default]
    Markers,
    Surface,
    Wireframe,
    Contour,
}

impl VisualizationMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markers => "markers",
            Self::Surface => "surface",
            Self::Wireframe => "wireframe",
            Self::Contour => "contour",
        }
    }

    /// Contour projections plot color over (phi, theta) instead of (x, y, z).
    pub const fn uses_angle_axes(self) -> bool {
        matches!(self, Self::Contour)
    }
}

impl Display for VisualizationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}
