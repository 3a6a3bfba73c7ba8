//! The scene object capability and intersection records.

use crate::Color;
use lumen_math::{Ray, Vec3};
use std::fmt;

/// Hit data reported by a single object for a single ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Point of intersection
    pub position: Vec3,
    /// Distance from the ray origin to the hit, in world units
    pub distance: f32,
    /// Unit outward surface normal at the hit
    pub normal: Vec3,
}

impl SurfaceHit {
    /// Build a hit at parameter `t` along `ray`.
    ///
    /// The distance is scaled by the ray direction's length so it stays a
    /// world-space length for rays that were not normalized.
    pub fn at(ray: &Ray, t: f32, normal: Vec3) -> Self {
        Self {
            position: ray.at(t),
            distance: t * ray.direction().length(),
            normal,
        }
    }
}

/// Anything a ray can hit.
pub trait SceneObject: Send + Sync {
    /// Nearest intersection of `ray` with this object in front of the ray
    /// origin, or `None`.
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit>;

    /// Surface color, channels in `[0, 1]`.
    fn color(&self) -> Color;
}

/// Identity of an object within a scene: its insertion index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A resolved hit: the surface data plus which object produced it.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    pub position: Vec3,
    pub distance: f32,
    pub normal: Vec3,
    pub id: ObjectId,
    pub object: &'a dyn SceneObject,
}

impl<'a> Intersection<'a> {
    pub fn new(hit: SurfaceHit, id: ObjectId, object: &'a dyn SceneObject) -> Self {
        Self {
            position: hit.position,
            distance: hit.distance,
            normal: hit.normal,
            id,
            object,
        }
    }

    /// Color of the surface that was hit.
    pub fn color(&self) -> Color {
        self.object.color()
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("position", &self.position)
            .field("distance", &self.distance)
            .field("normal", &self.normal)
            .field("id", &self.id)
            .finish()
    }
}

/// Iterate a slice of boxed objects together with their identities.
pub(crate) fn enumerate_objects<'a>(
    objects: &'a [Box<dyn SceneObject>],
) -> impl Iterator<Item = (ObjectId, &'a dyn SceneObject)> + 'a {
    objects
        .iter()
        .enumerate()
        .map(|(index, object)| -> (ObjectId, &'a dyn SceneObject) {
            (ObjectId(index), object.as_ref())
        })
}
