//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{Color, SceneObject, SurfaceHit};
use lumen_math::{Ray, Vec3};

/// Rays closer to parallel than this never hit.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A single-sided-normal, double-sided-hit triangle.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    color: Color,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal follows counter-clockwise winding.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, color: Color) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        Self {
            v0,
            v1,
            v2,
            normal,
            color,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Face normal flipped, if needed, to point against the ray.
    pub(crate) fn facing_normal(&self, ray: &Ray) -> Vec3 {
        if ray.direction().dot(self.normal) > 0.0 {
            -self.normal
        } else {
            self.normal
        }
    }

    /// Möller-Trumbore. Returns the ray parameter `t` of a hit in front of
    /// the origin.
    pub(crate) fn hit_t(&self, ray: &Ray) -> Option<f32> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        (t >= 0.0).then_some(t)
    }
}

impl SceneObject for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let t = self.hit_t(ray)?;
        Some(SurfaceHit::at(ray, t, self.facing_normal(ray)))
    }

    fn color(&self) -> Color {
        self.color
    }
}
