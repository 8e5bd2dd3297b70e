use heart_shared::ansi::PALETTE;
use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Bring an angle back into [0, 2π).
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Per-connection animation state, owned by one stream driver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderState {
    angle: f64,
    color_index: usize,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Step the rotation after a frame has been sent.
    ///
    /// The colour moves to the next palette entry whenever the truncated
    /// tenth-radian angle is a multiple of 5.
    pub fn advance(&mut self, step: f64) {
        self.angle = wrap_angle(self.angle + step);
        if (self.angle * 10.0) as u64 % 5 == 0 {
            self.color_index = (self.color_index + 1) % PALETTE.len();
        }
    }
}

/// Process-wide bookkeeping of open streams.
#[derive(Debug, Default)]
pub struct ConnectionCounter {
    next_id: AtomicU64,
    active: AtomicUsize,
}

impl ConnectionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stream. The returned guard unregisters it on drop.
    pub fn open(self: &Arc<Self>) -> ConnectionGuard {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let active = self.active.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::info!(stream = id, active, "Stream opened");
        ConnectionGuard {
            id,
            counter: Arc::clone(self),
        }
    }

    /// Number of streams whose driver is still running
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }
}

pub struct ConnectionGuard {
    id: u64,
    counter: Arc<ConnectionCounter>,
}

impl ConnectionGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        let active = self.counter.active.fetch_sub(1, Ordering::AcqRel) - 1;
        tracing::info!(stream = self.id, active, "Stream closed");
    }
}
