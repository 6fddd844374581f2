//! Screen colours and the counter panel flash.
//!
//! [`map_color`] only brightens the panel base colour [`PANEL_BASE`]; any
//! other colour passes through.

use raylib::prelude::Color;

use crate::entities::particle::ParticleColor;

pub const BACKGROUND: Color = Color { r: 0x22, g: 0x22, b: 0x22, a: 255 };
pub const TITLE: Color = Color { r: 0x21, g: 0x96, b: 0xf3, a: 255 };
pub const PANEL_BASE: Color = Color { r: 0x33, g: 0x33, b: 0x33, a: 255 };
pub const ACCENT_BLUE: Color = Color { r: 0x4a, g: 0x90, b: 0xe2, a: 255 };
pub const ACCENT_RED: Color = Color { r: 0xe2, g: 0x4a, b: 0x4a, a: 255 };
pub const TEXT: Color = Color { r: 255, g: 255, b: 255, a: 255 };

/// Panel colour for a given flash intensity.
///
/// For [`PANEL_BASE`] this blends linearly toward `rgb(151, 101, 251)` as
/// `intensity` goes from 0 to 1; other base colours are returned unchanged.
pub fn map_color(base: Color, intensity: f32) -> Color {
    if rgba(base) != rgba(PANEL_BASE) {
        return base;
    }
    let i = intensity.clamp(0.0, 1.0);
    let channel = |start: u8, gain: f32| (start as f32 + gain * i).round().min(255.0) as u8;
    Color::new(
        channel(base.r, 100.0),
        channel(base.g, 50.0),
        channel(base.b, 200.0),
        base.a,
    )
}

/// Channels of `color` as a tuple, for comparisons.
pub fn rgba(color: Color) -> (u8, u8, u8, u8) {
    (color.r, color.g, color.b, color.a)
}

/// Draw colour of a palette entry.
pub fn particle_color(color: ParticleColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::new(r, g, b, 255)
}

/// `color` with its alpha scaled by `opacity` in `[0, 1]`.
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    let a = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_intensity_is_base() {
        assert_eq!(rgba(map_color(PANEL_BASE, 0.0)), rgba(PANEL_BASE));
    }

    #[test]
    fn test_full_intensity() {
        assert_eq!(rgba(map_color(PANEL_BASE, 1.0)), (151, 101, 251, 255));
    }

    #[test]
    fn test_half_intensity_is_linear() {
        let c = map_color(PANEL_BASE, 0.5);
        assert_eq!((c.r, c.g, c.b), (101, 76, 151));
    }

    #[test]
    fn test_intensity_is_clamped() {
        assert_eq!(
            rgba(map_color(PANEL_BASE, 5.0)),
            rgba(map_color(PANEL_BASE, 1.0))
        );
        assert_eq!(rgba(map_color(PANEL_BASE, -1.0)), rgba(PANEL_BASE));
    }

    #[test]
    fn test_other_colours_pass_through() {
        assert_eq!(rgba(map_color(ACCENT_RED, 1.0)), rgba(ACCENT_RED));
        assert_eq!(rgba(map_color(BACKGROUND, 0.7)), rgba(BACKGROUND));
    }

    #[test]
    fn test_with_opacity_scales_alpha_only() {
        let c = with_opacity(ACCENT_BLUE, 0.5);
        assert_eq!((c.r, c.g, c.b), (0x4a, 0x90, 0xe2));
        assert_eq!(c.a, 128);
        assert_eq!(with_opacity(ACCENT_BLUE, 0.0).a, 0);
    }

    #[test]
    fn test_particle_color_matches_palette() {
        let c = particle_color(ParticleColor::Green);
        assert_eq!((c.r, c.g, c.b), (0x4a, 0xe2, 0x4a));
    }
}
