/// A point in model space. Never mutated once generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Rotate about the vertical (Y) axis in the X/Z plane.
///
/// Takes the precomputed cosine and sine so a whole frame shares one
/// `sin_cos` call.
pub fn rotate_y(p: Point3D, cos_a: f64, sin_a: f64) -> Point3D {
    Point3D {
        x: p.x * cos_a - p.z * sin_a,
        y: p.y,
        z: p.x * sin_a + p.z * cos_a,
    }
}
