//! Local illumination: Blinn-Phong terms, inverse-square falloff, hard
//! shadows, accumulated over every light.

use crate::color::{clamp_01, saturating_add, BLACK};
use crate::shadow::is_occluded;
use crate::{Color, Intersection, Light, SceneObject};
use lumen_math::Vec3;

pub const AMBIENT_COEFFICIENT: f32 = 0.02;
pub const DIFFUSE_COEFFICIENT: f32 = 0.25;
pub const SPECULAR_COEFFICIENT: f32 = 0.75;
pub const SHININESS: f32 = 100.0;

/// How the Blinn-Phong color is turned into a per-light multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingModel {
    /// The red channel of the combined ambient + diffuse + specular color is
    /// used as one scalar weight for all three channels.
    #[default]
    Collapsed,
    /// Each channel is weighted by its own Blinn-Phong term.
    PerChannel,
}

/// Whether a shadow from one light carries over to the lights after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcclusionPolicy {
    /// Occlusion is tested fresh for every light.
    #[default]
    PerLight,
    /// Once a point is shadowed from one light, every later light in scene
    /// order is treated as blocked too.
    Cumulative,
}

/// Ambient + diffuse + specular color for one light, saturating per channel.
pub fn blinn_phong(hit: &Intersection<'_>, light: &Light, viewer: Vec3) -> Color {
    let ambient = hit.color() * AMBIENT_COEFFICIENT;
    let diffuse = light.color() * DIFFUSE_COEFFICIENT * light.n_dot_l(hit);

    let to_light = light.direction_from(hit.position);
    let to_viewer = (viewer - hit.position).normalize_or_zero();
    let half_vector = (to_light + to_viewer).normalize_or_zero();
    let highlight = hit.normal.dot(half_vector).max(0.0).powf(SHININESS);
    let specular = light.color() * SPECULAR_COEFFICIENT * highlight;

    saturating_add(saturating_add(ambient, diffuse), specular)
}

/// Contribution of one unoccluded light, each channel clamped to [0, 1].
///
/// A light sitting exactly on the hit point contributes nothing.
pub fn shade(hit: &Intersection<'_>, light: &Light, viewer: Vec3, model: ShadingModel) -> Color {
    let intensity = light.intensity() * light.n_dot_l(hit);
    let falloff = intensity / light.distance_from(hit.position).powi(2);
    if !falloff.is_finite() {
        return BLACK;
    }

    let terms = blinn_phong(hit, light, viewer);
    let weight = match model {
        ShadingModel::Collapsed => Color::splat(terms.x),
        ShadingModel::PerChannel => terms,
    };

    clamp_01(hit.color() * falloff * weight * light.color())
}

/// Final color of a hit: the saturating sum of every light that reaches it.
///
/// Shadowed lights add nothing, not even ambient.
pub fn shade_all(
    hit: &Intersection<'_>,
    lights: &[Light],
    objects: &[Box<dyn SceneObject>],
    viewer: Vec3,
    model: ShadingModel,
    occlusion: OcclusionPolicy,
) -> Color {
    let mut pixel = BLACK;
    let mut in_shadow = false;

    for light in lights {
        let occluded = match occlusion {
            OcclusionPolicy::PerLight => is_occluded(hit.position, light, objects, Some(hit.id)),
            OcclusionPolicy::Cumulative => {
                in_shadow || is_occluded(hit.position, light, objects, Some(hit.id))
            }
        };
        in_shadow = occluded;

        if !occluded {
            pixel = saturating_add(pixel, shade(hit, light, viewer, model));
        }
    }

    pixel
}
