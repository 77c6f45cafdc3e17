/// Scroll and viewport tracking model. Updated from scroll events and window
/// resizes; read by the focus and reveal predicates.
pub struct ViewportState {
    pub(in crate::app) scroll_y: f32,
    pub(in crate::app) viewport_width: f32,
    pub(in crate::app) viewport_height: f32,
    /// Total height of the scrollable content, 0 until the first scroll
    /// event reports real bounds.
    pub(in crate::app) content_height: f32,
}

impl ViewportState {
    pub(in crate::app) fn new(viewport_width: f32, viewport_height: f32) -> Self {
        ViewportState {
            scroll_y: 0.0,
            viewport_width: viewport_width.max(0.0),
            viewport_height: viewport_height.max(0.0),
            content_height: 0.0,
        }
    }

    /// Vertical midpoint of the viewport in page coordinates. This is the
    /// focus band for nav tracking: a zero-height line, not a region.
    pub(in crate::app) fn centerline(&self) -> f32 {
        self.scroll_y + self.viewport_height / 2.0
    }

    /// Largest reachable scroll offset, or `None` before the first scroll
    /// event has reported content bounds.
    pub(in crate::app) fn max_scroll(&self) -> Option<f32> {
        (self.content_height > self.viewport_height)
            .then(|| (self.content_height - self.viewport_height).max(0.0))
    }
}
