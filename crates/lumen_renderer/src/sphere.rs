//! Sphere primitive.

use crate::{Color, SceneObject, SurfaceHit};
use lumen_math::{Interval, Ray, Vec3};

/// Hits are accepted anywhere in front of the ray origin.
const IN_FRONT: Interval = Interval {
    min: 0.0,
    max: f32::INFINITY,
};

/// A solid-colored sphere.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            color,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl SceneObject for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in front of the origin
        let mut root = (h - sqrtd) / a;
        if !IN_FRONT.contains(root) {
            root = (h + sqrtd) / a;
            if !IN_FRONT.contains(root) {
                return None;
            }
        }

        let position = ray.at(root);
        let normal = (position - self.center) / self.radius;
        Some(SurfaceHit::at(ray, root, normal))
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.intersect(&ray).expect("ray should hit the sphere");
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::ONE);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere.intersect(&ray).is_none());

        // Ray passing beside it
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_from_inside_hits_far_side() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, Color::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray).expect("inside rays leave through the shell");
        assert!((hit.distance - 2.0).abs() < 1e-5);
        assert!((hit.position - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_unnormalized_direction_reports_world_distance() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-5);
    }
}
