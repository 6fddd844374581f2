//! The floating "+1" label spawned by each tap.

use crate::entities::fade;

pub const START_FONT_SIZE: f32 = 40.0;
const RISE_PER_TICK: f32 = 3.0;
const OPACITY_DECAY: f32 = 0.05;
const SHRINK_PER_TICK: f32 = 2.0;

/// "+1" text that rises from the top of the effect area while fading out.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingLabel {
    pub id: u64,
    /// Vertical offset in pixels from the top of the effect area; goes negative as it rises.
    pub top: f32,
    pub opacity: f32,
    pub font_size: f32,
}

impl FloatingLabel {
    pub fn new(id: u64) -> Self {
        FloatingLabel {
            id,
            top: 0.0,
            opacity: 1.0,
            font_size: START_FONT_SIZE,
        }
    }

    /// The label one tick later.
    pub fn advanced(&self) -> Self {
        FloatingLabel {
            id: self.id,
            top: self.top - RISE_PER_TICK,
            opacity: fade(self.opacity, OPACITY_DECAY),
            font_size: (self.font_size - SHRINK_PER_TICK).max(0.0),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Advance every label by one tick and drop the ones that faded out.
pub fn tick_labels(labels: &[FloatingLabel]) -> Vec<FloatingLabel> {
    labels
        .iter()
        .map(FloatingLabel::advanced)
        .filter(FloatingLabel::is_alive)
        .collect()
}
