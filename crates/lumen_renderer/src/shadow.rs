//! Hard-shadow visibility between a surface point and a light.

use crate::object::enumerate_objects;
use crate::{Light, ObjectId, SceneObject};
use lumen_math::{Interval, Ray, Vec3};

/// True if any object other than `caster` blocks the segment from
/// `hit_point` to the light's position.
///
/// An occluder counts when its hit distance is strictly between 0 and the
/// distance to the light. The first occluder found ends the scan.
pub fn is_occluded(
    hit_point: Vec3,
    light: &Light,
    objects: &[Box<dyn SceneObject>],
    caster: Option<ObjectId>,
) -> bool {
    let light_distance = light.distance_from(hit_point);
    let shadow_ray = Ray::towards(hit_point, light.position());
    let blocking = Interval::new(0.0, light_distance);

    enumerate_objects(objects)
        .filter(|(id, _)| Some(*id) != caster)
        .filter_map(|(_, object)| object.intersect(&shadow_ray))
        .any(|hit| blocking.surrounds(hit.distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::test_objects::FixedHit;
    use crate::{Color, Sphere};

    fn light_above() -> Light {
        Light::point(Vec3::new(0.0, 10.0, 0.0), Color::ONE, 1.0)
    }

    #[test]
    fn test_nothing_between_is_lit() {
        let objects: Vec<Box<dyn SceneObject>> = vec![Box::new(Sphere::new(
            Vec3::new(5.0, 5.0, 0.0),
            1.0,
            Color::ONE,
        ))];
        assert!(!is_occluded(Vec3::ZERO, &light_above(), &objects, None));
    }

    #[test]
    fn test_blocker_between_point_and_light() {
        let objects: Vec<Box<dyn SceneObject>> = vec![Box::new(Sphere::new(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Color::ONE,
        ))];
        assert!(is_occluded(Vec3::ZERO, &light_above(), &objects, None));
    }

    #[test]
    fn test_object_behind_light_does_not_shadow() {
        let objects: Vec<Box<dyn SceneObject>> = vec![Box::new(Sphere::new(
            Vec3::new(0.0, 15.0, 0.0),
            1.0,
            Color::ONE,
        ))];
        assert!(!is_occluded(Vec3::ZERO, &light_above(), &objects, None));
    }

    #[test]
    fn test_caster_never_shadows_itself() {
        let objects: Vec<Box<dyn SceneObject>> = vec![
            Box::new(FixedHit::at_distance(2.0, 0.0)),
            Box::new(FixedHit::miss()),
        ];
        assert!(!is_occluded(Vec3::ZERO, &light_above(), &objects, Some(ObjectId(0))));
        assert!(is_occluded(Vec3::ZERO, &light_above(), &objects, Some(ObjectId(1))));
    }

    #[test]
    fn test_distance_bounds_are_exclusive() {
        let light = light_above();

        let touching_point: Vec<Box<dyn SceneObject>> = vec![Box::new(FixedHit::at_distance(0.0, 0.0))];
        assert!(!is_occluded(Vec3::ZERO, &light, &touching_point, None));

        let at_light: Vec<Box<dyn SceneObject>> = vec![Box::new(FixedHit::at_distance(10.0, 0.0))];
        assert!(!is_occluded(Vec3::ZERO, &light, &at_light, None));

        let just_short: Vec<Box<dyn SceneObject>> = vec![Box::new(FixedHit::at_distance(9.99, 0.0))];
        assert!(is_occluded(Vec3::ZERO, &light, &just_short, None));
    }

    #[test]
    fn test_occlusion_is_per_light() {
        let objects: Vec<Box<dyn SceneObject>> = vec![Box::new(Sphere::new(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Color::ONE,
        ))];
        let blocked = light_above();
        let clear = Light::point(Vec3::new(10.0, 0.0, 0.0), Color::ONE, 1.0);

        assert!(is_occluded(Vec3::ZERO, &blocked, &objects, None));
        assert!(!is_occluded(Vec3::ZERO, &clear, &objects, None));
    }
}
