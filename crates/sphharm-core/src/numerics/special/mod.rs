pub mod harmonics;

pub use harmonics::{
    SphericalHarmonicsApi, SphericalHarmonicsInput, StandardSphericalHarmonics, spherical_y,
    y_lm,
};
