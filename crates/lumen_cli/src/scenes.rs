//! Preset scenes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use lumen_renderer::color::{from_rgb8, WHITE};
use lumen_renderer::{
    Camera, Color, Light, Mesh, Placement, Scene, SceneBuilder, Sphere, Triangle, Vec3,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// A bowling lane: floor, back wall, ball and pin, two overhead lights
    Lane,
    /// A sphere on a floor under a single light, casting a shadow
    Shadow,
    /// Three spheres under a red and a blue light
    Lights,
}

#[derive(Debug, Clone, Default)]
pub struct SceneOptions {
    /// Replaces the preset's resolution
    pub resolution: Option<(u32, u32)>,
    /// OBJ model and where to put it
    pub model: Option<(PathBuf, Vec3)>,
}

pub fn build(preset: Preset, options: &SceneOptions) -> Result<Scene> {
    let (builder, (width, height)) = match preset {
        Preset::Lane => (lane(), (640, 360)),
        Preset::Shadow => (shadow(), (400, 400)),
        Preset::Lights => (lights(), (400, 300)),
    };
    let (width, height) = options.resolution.unwrap_or((width, height));
    let (fov_h, fov_v) = match preset {
        Preset::Lane => (90.0, 60.0),
        Preset::Shadow | Preset::Lights => (60.0, 60.0),
    };

    let camera = Camera::new(Vec3::new(0.0, 0.0, -4.0), width, height, fov_h, fov_v, 0.6, 50.0)?;
    let mut builder = builder.camera(camera);

    if let Some((path, position)) = &options.model {
        let mesh = Mesh::load_obj(path, Placement::new(*position, Vec3::ONE), WHITE)
            .with_context(|| format!("failed to load model {}", path.display()))?;
        builder = builder.object(mesh);
    }

    Ok(builder.build()?)
}

/// Axis-aligned rectangle as two triangles, for floors and walls.
fn quad(builder: SceneBuilder, corners: [Vec3; 4], color: Color) -> SceneBuilder {
    builder
        .object(Triangle::new(corners[0], corners[1], corners[2], color))
        .object(Triangle::new(corners[0], corners[2], corners[3], color))
}

fn floor(builder: SceneBuilder, y: f32, color: Color) -> SceneBuilder {
    quad(
        builder,
        [
            Vec3::new(-10.0, y, -2.0),
            Vec3::new(-10.0, y, 20.0),
            Vec3::new(10.0, y, 20.0),
            Vec3::new(10.0, y, -2.0),
        ],
        color,
    )
}

fn lane() -> SceneBuilder {
    let mut builder = Scene::builder()
        .light(Light::point(Vec3::new(4.0, 3.0, 7.0), WHITE, 40.0))
        .light(Light::point(Vec3::new(-4.0, 3.0, 7.0), WHITE, 40.0));

    builder = floor(builder, -2.0, from_rgb8(180, 100, 45));
    builder = quad(
        builder,
        [
            Vec3::new(-10.0, -2.0, 12.5),
            Vec3::new(10.0, -2.0, 12.5),
            Vec3::new(10.0, 8.0, 12.5),
            Vec3::new(-10.0, 8.0, 12.5),
        ],
        from_rgb8(11, 1, 74),
    );

    builder
        .object(Sphere::new(Vec3::new(1.25, -1.0, 2.5), 1.0, WHITE))
        .object(Sphere::new(Vec3::new(0.0, -1.4, 10.0), 0.6, WHITE))
        .object(Sphere::new(Vec3::new(0.0, -0.4, 10.0), 0.4, WHITE))
}

fn shadow() -> SceneBuilder {
    let builder = Scene::builder()
        .light(Light::point(Vec3::new(0.0, 4.0, 3.5), WHITE, 30.0))
        .object(Sphere::new(Vec3::new(0.0, -1.0, 5.0), 1.0, from_rgb8(0, 0, 255)));
    floor(builder, -2.0, from_rgb8(255, 255, 0))
}

fn lights() -> SceneBuilder {
    let builder = Scene::builder()
        .light(Light::point(Vec3::new(-3.0, 3.0, 2.0), Color::new(1.0, 0.2, 0.2), 25.0))
        .light(Light::directional(
            Vec3::new(3.0, 3.0, 2.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Color::new(0.2, 0.3, 1.0),
            25.0,
        ))
        .object(Sphere::new(Vec3::new(-1.5, -1.0, 6.0), 1.0, WHITE))
        .object(Sphere::new(Vec3::new(1.5, -1.0, 6.0), 1.0, WHITE))
        .object(Sphere::new(Vec3::new(0.0, 0.5, 8.0), 1.0, from_rgb8(0, 255, 0)));
    floor(builder, -2.0, from_rgb8(200, 200, 200))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_build() {
        for preset in [Preset::Lane, Preset::Shadow, Preset::Lights] {
            let scene = build(preset, &SceneOptions::default()).unwrap();
            assert!(!scene.objects().is_empty());
            assert!(!scene.lights().is_empty());
        }
    }

    #[test]
    fn test_resolution_override() {
        let options = SceneOptions {
            resolution: Some((32, 18)),
            ..Default::default()
        };
        let scene = build(Preset::Lane, &options).unwrap();
        assert_eq!(scene.camera().resolution(), (32, 18));
    }

    #[test]
    fn test_missing_model_fails() {
        let options = SceneOptions {
            model: Some((PathBuf::from("no/such/model.obj"), Vec3::ZERO)),
            ..Default::default()
        };
        assert!(build(Preset::Shadow, &options).is_err());
    }
}
