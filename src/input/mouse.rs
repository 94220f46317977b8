use glam::Vec2;

/// Turns absolute cursor positions and relative motion into one
/// accumulated delta per frame.
pub(crate) struct MouseTracker {
    /// Last absolute cursor position, `None` until the first sample.
    last_pos: Option<Vec2>,
    accumulated: Vec2,
}

impl MouseTracker {
    pub(crate) fn new() -> Self {
        Self {
            last_pos: None,
            accumulated: Vec2::ZERO,
        }
    }

    /// Record an absolute position. The first sample only primes the
    /// tracker so the camera does not jump when the cursor enters.
    pub(crate) fn handle_cursor_moved(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        if let Some(last) = self.last_pos {
            self.accumulated += pos - last;
        }
        self.last_pos = Some(pos);
    }

    /// Record relative motion.
    pub(crate) fn handle_motion(&mut self, dx: f32, dy: f32) {
        self.accumulated += Vec2::new(dx, dy);
    }

    /// Delta since the previous call.
    pub(crate) fn take_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.accumulated)
    }

    /// Forget the last position (cursor left or focus lost).
    pub(crate) fn reset(&mut self) {
        self.last_pos = None;
    }
}
