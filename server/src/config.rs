use heart_shared::RenderConfig;
use std::f64::consts::TAU;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Time between frames on one stream
    pub tick_interval: Duration,
    /// Rotation added per frame (radians)
    pub angle_step: f64,
    pub render: RenderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            tick_interval: Duration::from_millis(80),
            angle_step: 0.2,
            render: RenderConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("listen_addr must not be empty".to_string());
        }
        if self.tick_interval.is_zero() {
            return Err("tick_interval must be > 0".to_string());
        }
        if !self.angle_step.is_finite() || self.angle_step <= 0.0 || self.angle_step >= TAU {
            return Err("angle_step must be finite and in (0, 2π)".to_string());
        }
        self.render.validate()
    }
}
