//! Orthonormal complex spherical harmonics with the Condon-Shortley phase.
//!
//! Arguments travel as a named struct rather than positionally: `theta` is
//! the polar angle measured from +z and `phi` is the azimuth in the xy-plane.

use crate::common::constants::FOUR_PI;
use num_complex::Complex64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalHarmonicsInput {
    pub degree: i32,
    pub order: i32,
    /// Polar angle in `[0, pi]`.
    pub theta: f64,
    /// Azimuthal angle in `[0, 2 pi)`.
    pub phi: f64,
}

impl SphericalHarmonicsInput {
    pub fn new(degree: i32, order: i32, theta: f64, phi: f64) -> Self {
        Self {
            degree,
            order,
            theta,
            phi,
        }
    }
}

/// Evaluator seam used by the surface generator.
///
/// Callers must only pass `degree >= 0` and `|order| <= degree`.
pub trait SphericalHarmonicsApi {
    fn y_lm(&self, input: SphericalHarmonicsInput) -> Complex64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardSphericalHarmonics;

impl SphericalHarmonicsApi for StandardSphericalHarmonics {
    fn y_lm(&self, input: SphericalHarmonicsInput) -> Complex64 {
        spherical_y(input)
    }
}

pub fn y_lm(degree: i32, order: i32, theta: f64, phi: f64) -> Complex64 {
    assert!(degree >= 0, "spherical harmonics requires degree >= 0");
    assert!(
        order.unsigned_abs() <= degree.unsigned_abs(),
        "spherical harmonics requires |order| <= degree"
    );

    let degree = degree.unsigned_abs() as usize;
    let abs_order = order.unsigned_abs() as usize;
    let positive = non_negative_order(degree, abs_order, theta, phi);

    match (order < 0, abs_order % 2 == 0) {
        (false, _) => positive,
        (true, true) => positive.conj(),
        (true, false) => -positive.conj(),
    }
}

pub fn spherical_y(input: SphericalHarmonicsInput) -> Complex64 {
    y_lm(input.degree, input.order, input.theta, input.phi)
}

fn non_negative_order(degree: usize, order: usize, theta: f64, phi: f64) -> Complex64 {
    let legendre = normalized_legendre(degree, order, theta.cos());

    Complex64::from_polar(1.0, (order as f64) * phi) * legendre
}

/// `sqrt((2l + 1) / (4 pi) * (l - m)! / (l + m)!) * P_l^m(x)`.
///
/// The normalization is carried through every recurrence step, so no
/// factorial ratio is ever formed and high orders stay representable.
fn normalized_legendre(degree: usize, order: usize, x: f64) -> f64 {
    debug_assert!(order <= degree);

    let sin_theta = (1.0 - x * x).max(0.0).sqrt();
    let diagonal = (1..=order).fold((1.0 / FOUR_PI).sqrt(), |value, k| {
        let k = k as f64;
        value * -((2.0 * k + 1.0) / (2.0 * k)).sqrt() * sin_theta
    });
    if degree == order {
        return diagonal;
    }

    let m = order as f64;
    let mut previous = diagonal;
    let mut current = (2.0 * m + 3.0).sqrt() * x * diagonal;
    for l in (order + 2)..=degree {
        let l = l as f64;
        let lower = l - 1.0;
        let scale = ((4.0 * l * l - 1.0) / (l * l - m * m)).sqrt();
        let damping = ((lower * lower - m * m) / (4.0 * lower * lower - 1.0)).sqrt();
        let next = scale * (x * current - damping * previous);
        previous = current;
        current = next;
    }

    current
}
