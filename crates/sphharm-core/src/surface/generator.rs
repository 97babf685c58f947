use super::{AngularGrid, Grid, RadialProfile, SurfaceError, SurfaceField, compressed_radii};
use crate::common::config::RenderConfig;
use crate::domain::QuantumNumbers;
use crate::numerics::{SphericalHarmonicsApi, SphericalHarmonicsInput, StandardSphericalHarmonics};
use num_complex::Complex64;

/// Builds surface fields from quantum numbers. Holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct SurfaceGenerator<H = StandardSphericalHarmonics> {
    harmonics: H,
    profile: RadialProfile,
}

impl SurfaceGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: SphericalHarmonicsApi> SurfaceGenerator<H> {
    pub fn with_harmonics(harmonics: H) -> Self {
        Self {
            harmonics,
            profile: RadialProfile::default(),
        }
    }

    pub fn with_profile(mut self, profile: RadialProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> RadialProfile {
        self.profile
    }

    pub fn harmonics(&self) -> &H {
        &self.harmonics
    }

    /// Validates `(degree, order)` and `resolution` before touching the grid,
    /// then evaluates the harmonic at every `(phi, theta)` sample.
    pub fn generate(
        &self,
        degree: i32,
        order: i32,
        resolution: usize,
    ) -> Result<SurfaceField, SurfaceError> {
        let quantum_numbers = QuantumNumbers::new(degree, order)?;
        let angles = AngularGrid::new(resolution)?;
        Ok(self.generate_on(quantum_numbers, angles))
    }

    fn generate_on(&self, quantum_numbers: QuantumNumbers, angles: AngularGrid) -> SurfaceField {
        let (rows, cols) = angles.shape();
        let (theta, phi) = angles.into_parts();

        let harmonic: Vec<Complex64> = theta
            .iter()
            .zip(phi.iter())
            .map(|(theta, phi)| {
                self.harmonics.y_lm(SphericalHarmonicsInput::new(
                    quantum_numbers.degree(),
                    quantum_numbers.order(),
                    theta,
                    phi,
                ))
            })
            .collect();

        let color = Grid::from_fn(rows, cols, |row, col| harmonic[row * cols + col].re);
        let radius = match self.profile {
            RadialProfile::CompressedMagnitude => compressed_radii(&color),
            RadialProfile::RawMagnitude => {
                Grid::from_fn(rows, cols, |row, col| harmonic[row * cols + col].norm())
            }
        };

        let cartesian = |project: fn(f64, f64, f64) -> f64| {
            Grid::from_fn(rows, cols, |row, col| {
                let index = (row, col);
                project(radius[index], theta[index], phi[index])
            })
        };
        let x = cartesian(|r, theta, phi| r * theta.sin() * phi.cos());
        let y = cartesian(|r, theta, phi| r * theta.sin() * phi.sin());
        let z = cartesian(|r, theta, _| r * theta.cos());

        SurfaceField {
            quantum_numbers,
            profile: self.profile,
            x,
            y,
            z,
            color,
            radius,
            theta,
            phi,
        }
    }
}

/// Surface for `Y(degree, order)` with the compressed radial profile.
pub fn generate_surface(
    degree: i32,
    order: i32,
    resolution: usize,
) -> Result<SurfaceField, SurfaceError> {
    SurfaceGenerator::new().generate(degree, order, resolution)
}

/// Surface described by a full render request.
pub fn render_surface(config: &RenderConfig) -> Result<SurfaceField, SurfaceError> {
    SurfaceGenerator::new()
        .with_profile(config.profile)
        .generate(config.degree, config.order, config.resolution)
}
