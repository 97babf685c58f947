//! Surface generation for spherical-harmonic visualizations.
//!
//! The crate turns a pair of quantum numbers and a grid resolution into
//! Cartesian surface data that a plotting front-end can draw directly.

pub mod common;
pub mod controls;
pub mod domain;
pub mod numerics;
pub mod serialization;
pub mod surface;

pub use common::config::{RenderConfig, RenderConfigError, load_render_config};
pub use controls::{ControlEvent, ControlState, apply_event};
pub use domain::{ErrorCategory, QuantumNumbers, SphError, VisualizationMode};
pub use surface::{
    AngularGrid, Grid, RadialProfile, SurfaceError, SurfaceField, SurfaceGenerator,
    SurfacePoint, generate_surface, render_surface,
};
