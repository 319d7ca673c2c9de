//! Scroll position access.

/// The scroll container the engine drives.
///
/// Writes may be clamped by the host; callers read the position back to see
/// what was actually applied.
pub trait ScrollViewport {
    fn scroll_top(&self) -> f32;

    fn set_scroll_top(&mut self, offset: f32);
}

impl<V: ScrollViewport + ?Sized> ScrollViewport for &mut V {
    fn scroll_top(&self) -> f32 {
        (**self).scroll_top()
    }

    fn set_scroll_top(&mut self, offset: f32) {
        (**self).set_scroll_top(offset)
    }
}

/// In-memory viewport with the clamping behaviour of a browser scroll
/// container: the offset stays within `[0, content_height - viewport_height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedViewport {
    scroll_top: f32,
    content_height: f32,
    viewport_height: f32,
}

impl SimulatedViewport {
    pub fn new(content_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_top: 0.0,
            content_height: content_height.max(0.0),
            viewport_height: viewport_height.max(0.0),
        }
    }

    pub fn with_scroll_top(mut self, offset: f32) -> Self {
        self.set_scroll_top(offset);
        self
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll()
    }
}

impl ScrollViewport for SimulatedViewport {
    fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: f32) {
        if offset.is_nan() {
            return;
        }
        self.scroll_top = offset.clamp(0.0, self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_scrollable_range() {
        let mut viewport = SimulatedViewport::new(1000.0, 400.0);
        viewport.set_scroll_top(-20.0);
        assert_eq!(viewport.scroll_top(), 0.0);
        assert!(viewport.at_top());

        viewport.set_scroll_top(10_000.0);
        assert_eq!(viewport.scroll_top(), 600.0);
        assert!(viewport.at_bottom());
    }

    #[test]
    fn short_content_cannot_scroll() {
        let viewport =
            SimulatedViewport::new(200.0, 400.0).with_scroll_top(50.0);
        assert_eq!(viewport.max_scroll(), 0.0);
        assert_eq!(viewport.scroll_top(), 0.0);
    }

    #[test]
    fn nan_writes_are_ignored() {
        let mut viewport =
            SimulatedViewport::new(1000.0, 400.0).with_scroll_top(120.0);
        viewport.set_scroll_top(f32::NAN);
        assert_eq!(viewport.scroll_top(), 120.0);
    }
}
