//! Point and directional lights.

use crate::{Color, Intersection};
use lumen_math::Vec3;

/// A light that radiates in every direction from a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

/// A light shining along a fixed direction.
///
/// It still has a position: falloff and shadow rays are measured from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point(PointLight),
    Directional(DirectionalLight),
}

impl Light {
    pub fn point(position: Vec3, color: Color, intensity: f32) -> Self {
        Light::Point(PointLight {
            position,
            color,
            intensity,
        })
    }

    pub fn directional(position: Vec3, direction: Vec3, color: Color, intensity: f32) -> Self {
        Light::Directional(DirectionalLight {
            position,
            direction,
            color,
            intensity,
        })
    }

    pub fn position(&self) -> Vec3 {
        match self {
            Light::Point(light) => light.position,
            Light::Directional(light) => light.position,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Point(light) => light.color,
            Light::Directional(light) => light.color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Point(light) => light.intensity,
            Light::Directional(light) => light.intensity,
        }
    }

    /// Unit vector from `point` toward the light.
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        match self {
            Light::Point(light) => (light.position - point).normalize_or_zero(),
            Light::Directional(light) => -light.direction.normalize_or_zero(),
        }
    }

    /// Distance from `point` to the light's position.
    pub fn distance_from(&self, point: Vec3) -> f32 {
        self.position().distance(point)
    }

    /// Cosine between the surface normal and the light direction, in [0, 1].
    pub fn n_dot_l(&self, hit: &Intersection<'_>) -> f32 {
        hit.normal
            .dot(self.direction_from(hit.position))
            .clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::test_objects::FixedHit;
    use crate::{ObjectId, SurfaceHit};

    fn hit_facing_up(surface: &FixedHit) -> Intersection<'_> {
        Intersection::new(
            SurfaceHit {
                position: Vec3::ZERO,
                distance: 1.0,
                normal: Vec3::Y,
            },
            ObjectId(0),
            surface,
        )
    }

    #[test]
    fn test_point_light_n_dot_l() {
        let surface = FixedHit::miss();
        let hit = hit_facing_up(&surface);

        let above = Light::point(Vec3::new(0.0, 5.0, 0.0), Color::ONE, 1.0);
        assert!((above.n_dot_l(&hit) - 1.0).abs() < 1e-6);

        let grazing = Light::point(Vec3::new(5.0, 5.0, 0.0), Color::ONE, 1.0);
        assert!((grazing.n_dot_l(&hit) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);

        let below = Light::point(Vec3::new(0.0, -5.0, 0.0), Color::ONE, 1.0);
        assert_eq!(below.n_dot_l(&hit), 0.0);
    }

    #[test]
    fn test_directional_light_uses_direction_for_cosine() {
        let surface = FixedHit::miss();
        let hit = hit_facing_up(&surface);

        // Positioned off to the side, but shining straight down
        let light = Light::directional(
            Vec3::new(10.0, 1.0, 0.0),
            Vec3::new(0.0, -3.0, 0.0),
            Color::ONE,
            2.0,
        );
        assert!((light.n_dot_l(&hit) - 1.0).abs() < 1e-6);
        assert!((light.distance_from(hit.position) - 101.0f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_accessors() {
        let light = Light::point(Vec3::new(4.0, 3.0, 7.0), Color::new(1.0, 0.5, 0.25), 0.4);
        assert_eq!(light.position(), Vec3::new(4.0, 3.0, 7.0));
        assert_eq!(light.color(), Color::new(1.0, 0.5, 0.25));
        assert_eq!(light.intensity(), 0.4);
    }
}
