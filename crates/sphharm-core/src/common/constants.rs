//! Shared numeric constants and control defaults.

pub const PI: f64 = std::f64::consts::PI;
pub const PI2: f64 = 2.0 * PI;
pub const FOUR_PI: f64 = 4.0 * PI;

/// Largest radius the compressed-magnitude profile can produce, `tanh(1)`.
pub const COMPRESSED_RADIUS_LIMIT: f64 = 0.761_594_155_955_764_9_f64;

pub const DEFAULT_DEGREE: i32 = 3;
pub const DEFAULT_ORDER: i32 = 0;
pub const DEFAULT_RESOLUTION: usize = 100;

pub const MAX_CONTROL_DEGREE: i32 = 10;
pub const MIN_CONTROL_RESOLUTION: usize = 1;
pub const MAX_CONTROL_RESOLUTION: usize = 400;
