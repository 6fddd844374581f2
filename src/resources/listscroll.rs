//! Scroll position of the history list.

use bevy_ecs::prelude::Resource;

/// Pixels scrolled per mouse wheel notch.
pub const SCROLL_STEP: f32 = 40.0;

/// Vertical scroll offset of the history list, in pixels from the top.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ListScroll {
    pub offset: f32,
}

impl ListScroll {
    /// Apply a wheel movement (positive scrolls up) and clamp to the content.
    ///
    /// `content_height` is the full height of all rows, `view_height` the
    /// visible height of the list area.
    pub fn scroll_by(&mut self, wheel: f32, content_height: f32, view_height: f32) {
        let max = (content_height - view_height).max(0.0);
        self.offset = (self.offset - wheel * SCROLL_STEP).clamp(0.0, max);
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_and_clamp_to_content() {
        let mut s = ListScroll::default();
        s.scroll_by(-1.0, 1000.0, 400.0);
        assert_eq!(s.offset, SCROLL_STEP);
        s.scroll_by(-100.0, 1000.0, 400.0);
        assert_eq!(s.offset, 600.0);
    }

    #[test]
    fn test_scroll_up_stops_at_top() {
        let mut s = ListScroll { offset: 30.0 };
        s.scroll_by(5.0, 1000.0, 400.0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut s = ListScroll::default();
        s.scroll_by(-3.0, 100.0, 400.0);
        assert_eq!(s.offset, 0.0);
    }
}
