//! Control-panel state as an explicit update function.
//!
//! Each user interaction is a `ControlEvent`; `apply_event` folds it into the
//! previous `ControlState`. The order control is clamped whenever the degree
//! moves, so every reachable state describes a valid harmonic.

use crate::common::config::RenderConfig;
use crate::common::constants::{
    DEFAULT_DEGREE, DEFAULT_ORDER, DEFAULT_RESOLUTION, MAX_CONTROL_DEGREE, MAX_CONTROL_RESOLUTION,
    MIN_CONTROL_RESOLUTION,
};
use crate::domain::VisualizationMode;
use crate::surface::RadialProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub degree: i32,
    pub order: i32,
    pub resolution: usize,
    pub mode: VisualizationMode,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            order: DEFAULT_ORDER,
            resolution: DEFAULT_RESOLUTION,
            mode: VisualizationMode::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    DegreeChanged(i32),
    OrderChanged(i32),
    ResolutionChanged(usize),
    ModeChanged(VisualizationMode),
}

pub fn apply_event(event: ControlEvent, previous: &ControlState) -> ControlState {
    let mut next = *previous;
    match event {
        ControlEvent::DegreeChanged(degree) => {
            next.degree = degree.clamp(0, MAX_CONTROL_DEGREE);
            next.order = clamp_order(next.order, next.degree);
        }
        ControlEvent::OrderChanged(order) => {
            next.order = clamp_order(order, next.degree);
        }
        ControlEvent::ResolutionChanged(resolution) => {
            next.resolution = resolution.clamp(MIN_CONTROL_RESOLUTION, MAX_CONTROL_RESOLUTION);
        }
        ControlEvent::ModeChanged(mode) => next.mode = mode,
    }
    next
}

fn clamp_order(order: i32, degree: i32) -> i32 {
    let bound = degree.max(0);
    order.clamp(-bound, bound)
}

impl ControlState {
    pub fn render_config(&self, profile: RadialProfile) -> RenderConfig {
        RenderConfig {
            degree: self.degree,
            order: self.order,
            resolution: self.resolution,
            profile,
            mode: self.mode,
        }
    }
}
