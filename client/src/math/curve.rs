//! Curve sampler for y = x⁻ˣ and y = xˣ over [0, 1].

use frames::Identity;

/// Samples per unit interval used by the visualizer.
pub const DEFAULT_RESOLUTION: usize = 150;

/// One sampled point of the active curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Sample the active curve on a uniform grid of `resolution + 1` points
/// over [0, 1].
///
/// The value at x = 0 is defined as 1: both curves share the x→0⁺ limit of
/// xˣ, and the grid would otherwise evaluate 0⁰.
#[must_use]
pub fn sample_curve(identity: Identity, resolution: usize) -> Vec<CurvePoint> {
    let resolution = resolution.max(1);
    let step = 1.0 / resolution as f64;

    (0..=resolution)
        .map(|i| {
            let x = i as f64 * step;
            let y = if x == 0.0 {
                1.0
            } else {
                match identity {
                    Identity::First => x.powf(-x),
                    Identity::Second => x.powf(x),
                }
            };
            CurvePoint { x, y }
        })
        .collect()
}

#[cfg(test)]
#[path = "curve_test.rs"]
mod tests;
