//! Per-request render configuration.
//!
//! A `RenderConfig` is rebuilt for every render; nothing here is global.
//! Files are JSON objects whose keys all default, so partial files are valid.

use super::constants::{DEFAULT_DEGREE, DEFAULT_ORDER, DEFAULT_RESOLUTION};
use crate::domain::{QuantumNumbers, VisualizationMode};
use crate::surface::{RadialProfile, SurfaceError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub degree: i32,
    pub order: i32,
    pub resolution: usize,
    pub profile: RadialProfile,
    pub mode: VisualizationMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            order: DEFAULT_ORDER,
            resolution: DEFAULT_RESOLUTION,
            profile: RadialProfile::default(),
            mode: VisualizationMode::default(),
        }
    }
}

impl RenderConfig {
    pub fn quantum_numbers(&self) -> Result<QuantumNumbers, SurfaceError> {
        QuantumNumbers::new(self.degree, self.order)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderConfigError {
    #[error("failed to read render config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse render config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_render_config(
    config_path: impl AsRef<Path>,
) -> Result<RenderConfig, RenderConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| RenderConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| RenderConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}
