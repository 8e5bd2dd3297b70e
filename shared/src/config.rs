/// Viewport and shading parameters for the frame renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Grid width in character cells
    pub width: usize,
    /// Grid height in character cells (one terminal line per row)
    pub height: usize,
    /// Rotated depth above which a point is drawn as the highlight glyph
    pub near_depth: f64,
    /// Rotated depth below which a point is drawn as the shadow glyph
    pub far_depth: f64,
    /// Vertical squash applied to model Y; terminal cells are roughly twice as tall as wide
    pub y_aspect: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 30,
            near_depth: 5.0,
            far_depth: -5.0,
            y_aspect: 0.5,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("width and height must be > 0".to_string());
        }
        if !self.near_depth.is_finite() || !self.far_depth.is_finite() {
            return Err("near_depth and far_depth must be finite".to_string());
        }
        if self.far_depth > self.near_depth {
            return Err("far_depth must be <= near_depth".to_string());
        }
        if !self.y_aspect.is_finite() || self.y_aspect <= 0.0 {
            return Err("y_aspect must be finite and > 0".to_string());
        }
        Ok(())
    }
}
