pub mod special;

pub use special::{
    SphericalHarmonicsApi, SphericalHarmonicsInput, StandardSphericalHarmonics, spherical_y,
    y_lm,
};

/// Evenly spaced samples over `[start, end]`, endpoint included.
///
/// Mirrors `linspace` semantics: a single sample is just `start`, and zero
/// samples is rejected.
pub fn linear_grid(start: f64, end: f64, count: usize) -> Option<Vec<f64>> {
    match count {
        0 => None,
        1 => Some(vec![start]),
        _ => {
            let step = (end - start) / ((count - 1) as f64);
            let mut grid: Vec<f64> = (0..count)
                .map(|index| start + step * (index as f64))
                .collect();
            if let Some(last) = grid.last_mut() {
                *last = end;
            }
            Some(grid)
        }
    }
}

/// Evenly spaced samples over `[start, start + period)`, endpoint excluded.
pub fn periodic_grid(start: f64, period: f64, count: usize) -> Option<Vec<f64>> {
    if count == 0 {
        return None;
    }

    let step = period / (count as f64);
    Some(
        (0..count)
            .map(|index| start + step * (index as f64))
            .collect(),
    )
}

/// Largest absolute value, or 0 for an empty slice. NaN entries are skipped.
pub fn max_abs(values: &[f64]) -> f64 {
    values
        .iter()
        .map(|value| value.abs())
        .filter(|value| !value.is_nan())
        .fold(0.0, f64::max)
}
