//! Keeps [`ScreenLayout`] in sync with the window size.

use bevy_ecs::prelude::*;

use crate::resources::screenlayout::ScreenLayout;
use crate::resources::screensize::ScreenSize;

/// Recompute the layout when the screen size changed.
pub fn update_screen_layout(screen: Res<ScreenSize>, mut layout: ResMut<ScreenLayout>) {
    if layout.screen != *screen {
        *layout = ScreenLayout::compute(*screen);
    }
}
