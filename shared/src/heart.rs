use crate::point::Point3D;
use std::f64::consts::TAU;

/// Uniform scale applied to every generated coordinate.
pub const HEART_SCALE: f64 = 0.6;

/// Step of the curve parameter t over [0, 2π).
const T_STEP: f64 = 0.1;

/// Extruded depth range, sampled inclusively.
const Z_MIN: f64 = -10.0;
const Z_MAX: f64 = 10.0;
const Z_STEP: f64 = 0.5;

/// |z| at which the cross-section would shrink to nothing.
const TAPER_DEPTH: f64 = 15.0;

/// Classic parametric heart curve at parameter `t`, unscaled.
/// Y grows downwards so the curve reads upright on a terminal.
pub fn heart_curve(t: f64) -> (f64, f64) {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    (x, y)
}

/// Cross-section scale for an extrusion depth; 1 at the centre, linear falloff with |z|.
pub fn taper(z: f64) -> f64 {
    (TAPER_DEPTH - z.abs()) / TAPER_DEPTH
}

/// The fixed point cloud approximating a 3D heart.
///
/// Built once at startup and shared read-only by every stream.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point3D>,
}

impl PointSet {
    /// Sample the heart surface over the full (t, z) grid.
    pub fn generate() -> Self {
        let t_samples = (0..).map(|i| i as f64 * T_STEP).take_while(|t| *t < TAU);
        let z_count = ((Z_MAX - Z_MIN) / Z_STEP).round() as usize + 1;

        let mut points = Vec::new();
        for t in t_samples {
            let (x, y) = heart_curve(t);
            for j in 0..z_count {
                let z = Z_MIN + j as f64 * Z_STEP;
                let r = taper(z);
                points.push(Point3D::new(
                    x * HEART_SCALE * r,
                    y * HEART_SCALE * r,
                    z * HEART_SCALE,
                ));
            }
        }

        Self { points }
    }

    pub fn as_slice(&self) -> &[Point3D] {
        &self.points
    }
}
