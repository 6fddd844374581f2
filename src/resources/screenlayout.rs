//! Screen layout resource.
//!
//! Positions of every widget on the screen, derived from [`ScreenSize`]:
//!
//! ```text
//! +---------------------------+
//! |          title            |
//! |  +---------------------+  |
//! |  |   effect area 50px  |  |  <- counter text, "+1" labels, particles
//! |  |    [ Increment ]    |  |
//! |  +---------------------+  |  <- counter panel, 80% wide
//! |  history list (<=400px)   |
//! +---------------------------+
//! ```
//!
//! Recomputed by [`crate::systems::layout::update_screen_layout`] whenever the
//! window is resized; input hit-testing and rendering both read it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::screensize::ScreenSize;

pub const TITLE_FONT_SIZE: i32 = 28;
pub const COUNTER_FONT_SIZE: i32 = 24;
pub const BUTTON_FONT_SIZE: i32 = 20;
/// Height of the area particles and labels move in.
pub const EFFECT_AREA_HEIGHT: f32 = 50.0;
/// Maximum height of the history list.
pub const LIST_MAX_HEIGHT: f32 = 400.0;
/// Height of one history row including its spacing.
pub const LIST_ROW_HEIGHT: f32 = 58.0;

const OUTER_MARGIN: f32 = 20.0;
const TITLE_TOP: f32 = 20.0;
const PANEL_TOP: f32 = 70.0;
const PANEL_WIDTH_RATIO: f32 = 0.8;
const PANEL_PADDING: f32 = 16.0;
const BUTTON_HEIGHT: f32 = 44.0;
const BUTTON_WIDTH_RATIO: f32 = 0.6;
const LIST_GAP: f32 = 20.0;

#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenLayout {
    pub screen: ScreenSize,
    /// Top edge of the title text; the text is centred horizontally when drawn.
    pub title_y: f32,
    pub panel: Rectangle,
    pub effect_area: Rectangle,
    pub button: Rectangle,
    pub list: Rectangle,
}

impl ScreenLayout {
    pub fn compute(screen: ScreenSize) -> Self {
        let w = screen.w.max(0) as f32;
        let h = screen.h.max(0) as f32;

        let panel_w = w * PANEL_WIDTH_RATIO;
        let panel_x = (w - panel_w) / 2.0;

        let effect_area = Rectangle {
            x: panel_x,
            y: PANEL_TOP + PANEL_PADDING,
            width: panel_w,
            height: EFFECT_AREA_HEIGHT,
        };

        let button_w = panel_w * BUTTON_WIDTH_RATIO;
        let button = Rectangle {
            x: panel_x + (panel_w - button_w) / 2.0,
            y: effect_area.y + effect_area.height + PANEL_PADDING,
            width: button_w,
            height: BUTTON_HEIGHT,
        };

        let panel = Rectangle {
            x: panel_x,
            y: PANEL_TOP,
            width: panel_w,
            height: button.y + button.height + PANEL_PADDING - PANEL_TOP,
        };

        let list_y = panel.y + panel.height + LIST_GAP;
        let list = Rectangle {
            x: OUTER_MARGIN,
            y: list_y,
            width: (w - 2.0 * OUTER_MARGIN).max(0.0),
            height: (h - list_y - OUTER_MARGIN).clamp(0.0, LIST_MAX_HEIGHT),
        };

        ScreenLayout {
            screen,
            title_y: TITLE_TOP,
            panel,
            effect_area,
            button,
            list,
        }
    }

    pub fn button_contains(&self, point: Vector2) -> bool {
        rect_contains(&self.button, point)
    }

    pub fn list_contains(&self, point: Vector2) -> bool {
        rect_contains(&self.list, point)
    }

    /// Total height of `rows` history rows.
    pub fn list_content_height(rows: usize) -> f32 {
        rows as f32 * LIST_ROW_HEIGHT
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::compute(ScreenSize { w: 480, h: 800 })
    }
}

fn rect_contains(rect: &Rectangle, p: Vector2) -> bool {
    p.x >= rect.x && p.x < rect.x + rect.width && p.y >= rect.y && p.y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(ScreenSize { w: 500, h: 900 })
    }

    #[test]
    fn test_panel_is_centred_and_eighty_percent_wide() {
        let l = layout();
        assert_eq!(l.panel.width, 400.0);
        assert_eq!(l.panel.x, 50.0);
    }

    #[test]
    fn test_widgets_stack_top_to_bottom() {
        let l = layout();
        assert!(l.effect_area.y >= l.panel.y);
        assert!(l.button.y >= l.effect_area.y + l.effect_area.height);
        assert!(l.list.y >= l.panel.y + l.panel.height);
        assert_eq!(l.effect_area.height, EFFECT_AREA_HEIGHT);
    }

    #[test]
    fn test_list_height_capped() {
        let l = layout();
        assert_eq!(l.list.height, LIST_MAX_HEIGHT);
        let small = ScreenLayout::compute(ScreenSize { w: 300, h: 300 });
        assert!(small.list.height < LIST_MAX_HEIGHT);
        assert!(small.list.height >= 0.0);
    }

    #[test]
    fn test_button_hit_test() {
        let l = layout();
        let centre = Vector2 {
            x: l.button.x + l.button.width / 2.0,
            y: l.button.y + l.button.height / 2.0,
        };
        assert!(l.button_contains(centre));
        assert!(!l.button_contains(Vector2 { x: 1.0, y: 1.0 }));
        assert!(!l.button_contains(Vector2 {
            x: l.button.x + l.button.width,
            y: centre.y,
        }));
    }

    #[test]
    fn test_degenerate_screen_does_not_panic() {
        let l = ScreenLayout::compute(ScreenSize { w: 0, h: 0 });
        assert_eq!(l.list.width, 0.0);
        assert_eq!(l.list.height, 0.0);
    }
}
