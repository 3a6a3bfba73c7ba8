//! Nearest-hit resolution by linear scan.

use crate::object::enumerate_objects;
use crate::{Intersection, ObjectId, SceneObject};
use lumen_math::{Interval, Ray};

/// Find the nearest hit of `ray` among `objects`.
///
/// - `excluded`: an object to skip entirely (e.g. the surface a secondary ray
///   starts on)
/// - `clip`: when given, a hit is only eligible if the world-space Z of its
///   position lies in the range, bounds included. This compares absolute
///   depth, not distance along the ray.
///
/// Hits with negative distance are ignored. Ties keep the earlier object.
pub fn resolve<'a>(
    ray: &Ray,
    objects: &'a [Box<dyn SceneObject>],
    excluded: Option<ObjectId>,
    clip: Option<Interval>,
) -> Option<Intersection<'a>> {
    let mut closest: Option<Intersection<'a>> = None;

    for (id, object) in enumerate_objects(objects) {
        if excluded == Some(id) {
            continue;
        }
        let Some(hit) = object.intersect(ray) else {
            continue;
        };

        let in_front = hit.distance >= 0.0;
        let nearer = closest.map_or(true, |best| hit.distance < best.distance);
        let unclipped = clip.map_or(true, |range| range.contains(hit.position.z));

        if in_front && nearer && unclipped {
            closest = Some(Intersection::new(hit, id, object));
        }
    }

    closest
}
