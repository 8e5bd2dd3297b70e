use crate::config::RenderConfig;
use crate::point::{rotate_y, Point3D};

/// Characters a frame can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Blank,
    /// Point sits in front of the near depth band
    Near,
    Mid,
    /// Point sits behind the far depth band
    Far,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Blank => ' ',
            Glyph::Near => '@',
            Glyph::Mid => '*',
            Glyph::Far => '.',
        }
    }

    /// Shade for a rotated depth value.
    pub fn for_depth(z: f64, config: &RenderConfig) -> Self {
        if z > config.near_depth {
            Glyph::Near
        } else if z < config.far_depth {
            Glyph::Far
        } else {
            Glyph::Mid
        }
    }
}

/// Character grid with its parallel depth buffer, scoped to one render.
///
/// Both grids are row-major and always exactly `width * height` cells.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    glyphs: Vec<Glyph>,
    depth: Vec<f64>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width * height;
        Self {
            width,
            height,
            glyphs: vec![Glyph::Blank; cells],
            depth: vec![f64::NEG_INFINITY; cells],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph(&self, col: usize, row: usize) -> Glyph {
        self.glyphs[row * self.width + col]
    }

    pub fn depth(&self, col: usize, row: usize) -> f64 {
        self.depth[row * self.width + col]
    }

    /// Depth-tested write. Only a strictly greater depth replaces the cell,
    /// so among equal depths the first point plotted keeps it.
    /// Returns whether the cell was written.
    pub fn plot(&mut self, col: usize, row: usize, z: f64, glyph: Glyph) -> bool {
        let idx = row * self.width + col;
        if z > self.depth[idx] {
            self.depth[idx] = z;
            self.glyphs[idx] = glyph;
            true
        } else {
            false
        }
    }

    /// Row-major text, every row newline-terminated.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.glyphs.chunks(self.width) {
            out.extend(row.iter().map(|g| g.as_char()));
            out.push('\n');
        }
        out
    }
}

/// Map a rotated point to a grid cell, or `None` when it falls outside the viewport.
fn project(p: Point3D, config: &RenderConfig) -> Option<(usize, usize)> {
    let sx = ((config.width / 2) as f64 + p.x).floor();
    let sy = ((config.height / 2) as f64 + p.y * config.y_aspect).floor();
    if sx < 0.0 || sy < 0.0 || sx >= config.width as f64 || sy >= config.height as f64 {
        return None;
    }
    Some((sx as usize, sy as usize))
}

/// Rasterize the point cloud rotated by `angle` radians about the vertical axis.
pub fn rasterize(points: &[Point3D], angle: f64, config: &RenderConfig) -> FrameBuffer {
    let mut frame = FrameBuffer::new(config.width, config.height);
    let (sin_a, cos_a) = angle.sin_cos();

    for &p in points {
        let r = rotate_y(p, cos_a, sin_a);
        if let Some((col, row)) = project(r, config) {
            frame.plot(col, row, r.z, Glyph::for_depth(r.z, config));
        }
    }

    frame
}

/// Render one text frame of the heart at `angle`.
pub fn render_frame(points: &[Point3D], angle: f64, config: &RenderConfig) -> String {
    rasterize(points, angle, config).to_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heart::PointSet;
    use std::f64::consts::PI;

    fn default_frame(angle: f64) -> String {
        let set = PointSet::generate();
        render_frame(set.as_slice(), angle, &RenderConfig::default())
    }

    #[test]
    fn frame_has_exact_grid_shape() {
        let set = PointSet::generate();
        let config = RenderConfig::default();
        for i in 0..63 {
            let frame = render_frame(set.as_slice(), i as f64 * 0.1, &config);
            assert!(frame.ends_with('\n'));
            let rows: Vec<&str> = frame.lines().collect();
            assert_eq!(rows.len(), 30);
            for row in rows {
                assert_eq!(row.chars().count(), 60);
            }
        }
    }

    #[test]
    fn frame_uses_only_known_glyphs() {
        let set = PointSet::generate();
        let config = RenderConfig::default();
        for i in 0..32 {
            let frame = render_frame(set.as_slice(), i as f64 * 0.2, &config);
            assert!(frame
                .chars()
                .all(|c| matches!(c, ' ' | '*' | '@' | '.' | '\n')));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(default_frame(1.3), default_frame(1.3));
    }

    #[test]
    fn front_view_is_mostly_mid_glyphs_and_not_blank() {
        let frame = default_frame(0.0);
        let stars = frame.chars().filter(|c| *c == '*').count();
        assert!(stars > 50, "expected a visible heart, got {} stars", stars);
    }

    #[test]
    fn side_view_shows_depth_shading() {
        // At a quarter turn the extrusion axis lies across the screen, so both
        // depth bands become visible.
        let frame = default_frame(PI / 2.0);
        assert!(frame.contains('@'));
    }

    #[test]
    fn glyph_bands_follow_thresholds() {
        let c = RenderConfig::default();
        assert_eq!(Glyph::for_depth(5.01, &c), Glyph::Near);
        assert_eq!(Glyph::for_depth(5.0, &c), Glyph::Mid);
        assert_eq!(Glyph::for_depth(-5.0, &c), Glyph::Mid);
        assert_eq!(Glyph::for_depth(-5.01, &c), Glyph::Far);
    }

    #[test]
    fn nearer_point_wins_cell() {
        let mut fb = FrameBuffer::new(4, 2);
        assert!(fb.plot(1, 1, -1.0, Glyph::Far));
        assert!(fb.plot(1, 1, 2.0, Glyph::Mid));
        assert!(!fb.plot(1, 1, 0.0, Glyph::Near));
        assert_eq!(fb.glyph(1, 1), Glyph::Mid);
        assert_eq!(fb.depth(1, 1), 2.0);
    }

    #[test]
    fn equal_depth_keeps_first_point() {
        let mut fb = FrameBuffer::new(2, 2);
        assert!(fb.plot(0, 0, 3.0, Glyph::Mid));
        assert!(!fb.plot(0, 0, 3.0, Glyph::Near));
        assert_eq!(fb.glyph(0, 0), Glyph::Mid);
    }

    #[test]
    fn points_outside_viewport_are_dropped() {
        let config = RenderConfig::default();
        let points = [
            Point3D::new(-31.0, 0.0, 0.0),
            Point3D::new(30.0, 0.0, 0.0),
            Point3D::new(0.0, 31.0, 0.0),
            Point3D::new(0.0, -30.1, 0.0),
        ];
        let frame = render_frame(&points, 0.0, &config);
        assert!(frame.chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn projection_floors_toward_negative() {
        let config = RenderConfig::default();
        // x = -30.5 floors to column -1 and must be clipped, not truncated to 0
        assert_eq!(project(Point3D::new(-30.5, 0.0, 0.0), &config), None);
        assert_eq!(project(Point3D::new(-29.5, 0.0, 0.0), &config), Some((0, 15)));
        assert_eq!(project(Point3D::new(0.0, 2.0, 0.0), &config), Some((30, 16)));
        assert_eq!(project(Point3D::new(29.9, 29.9, 0.0), &config), Some((59, 29)));
    }

    #[test]
    fn single_point_lands_at_centre() {
        let config = RenderConfig::default();
        let fb = rasterize(&[Point3D::new(0.0, 0.0, 6.0)], 0.0, &config);
        assert_eq!(fb.glyph(30, 15), Glyph::Near);
        assert_eq!(fb.depth(30, 15), 6.0);
        assert_eq!((fb.width(), fb.height()), (60, 30));
    }

    #[test]
    fn empty_cloud_renders_blank_grid() {
        let config = RenderConfig {
            width: 3,
            height: 2,
            ..Default::default()
        };
        assert_eq!(render_frame(&[], 0.4, &config), "   \n   \n");
    }
}
