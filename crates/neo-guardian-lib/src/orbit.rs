//! Orbit outline sampling for the geometry plot.

use std::f64::consts::TAU;

use serde::Serialize;

/// One sample on the orbit outline, in units of the semi-major axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitPoint {
    pub x: f64,
    pub y: f64,
}

/// Ratio of semi-minor to semi-major axis for eccentricity `e`.
pub fn axis_ratio(eccentricity: f64) -> f64 {
    (1.0 - eccentricity * eccentricity).max(0.0).sqrt()
}

/// Sample an ellipse with unit semi-major axis.
///
/// Angles are spaced evenly over `[0, 2π]` with both ends included, so the
/// first and last points coincide and the outline closes.
pub fn orbit_outline(eccentricity: f64, samples: usize) -> Vec<OrbitPoint> {
    let b = axis_ratio(eccentricity);
    match samples {
        0 => Vec::new(),
        1 => vec![OrbitPoint { x: 1.0, y: 0.0 }],
        n => {
            let step = TAU / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = step * i as f64;
                    OrbitPoint {
                        x: t.cos(),
                        y: b * t.sin(),
                    }
                })
                .collect()
        }
    }
}
