//! RGB color helpers.
//!
//! Colors are plain `Vec3`s with each channel normalized to `[0, 1]`.

use lumen_math::Vec3;

/// Color type alias (RGB values 0-1)
pub type Color = Vec3;

/// Black, the value of every pixel nothing contributes to.
pub const BLACK: Color = Vec3::ZERO;

/// White.
pub const WHITE: Color = Vec3::ONE;

/// Build a color from 8-bit channels.
pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32, g as f32, b as f32) / 255.0
}

/// Clamp every channel to `[0, 1]`.
#[inline]
pub fn clamp_01(color: Color) -> Color {
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Add two colors, saturating each channel at 1.
#[inline]
pub fn saturating_add(a: Color, b: Color) -> Color {
    (a + b).min(Vec3::ONE)
}

/// Convert a color to 8-bit RGB. Non-finite channels map to 0.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let channel = |c: f32| {
        if c.is_finite() {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        } else {
            0
        }
    };
    [channel(color.x), channel(color.y), channel(color.z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_conversions() {
        assert_eq!(to_rgb8(from_rgb8(180, 100, 45)), [180, 100, 45]);
        assert_eq!(to_rgb8(WHITE), [255, 255, 255]);
        assert_eq!(to_rgb8(BLACK), [0, 0, 0]);
    }

    #[test]
    fn test_to_rgb8_clamps_and_drops_nan() {
        assert_eq!(to_rgb8(Color::new(2.0, -1.0, f32::NAN)), [255, 0, 0]);
    }

    #[test]
    fn test_saturating_add() {
        let sum = saturating_add(Color::new(0.75, 0.25, 0.0), Color::new(0.5, 0.25, 0.0));
        assert_eq!(sum, Color::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_clamp_01() {
        assert_eq!(clamp_01(Color::new(-0.5, 0.5, 1.5)), Color::new(0.0, 0.5, 1.0));
    }
}
