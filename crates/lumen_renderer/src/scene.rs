//! Scene container: one camera, ordered objects, ordered lights.

use crate::{Camera, Light, RenderError, RenderResult, SceneObject};

/// A static scene, read-only for the duration of a render.
pub struct Scene {
    camera: Camera,
    objects: Vec<Box<dyn SceneObject>>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Objects in insertion order; an object's index is its
    /// [`ObjectId`](crate::ObjectId).
    pub fn objects(&self) -> &[Box<dyn SceneObject>] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}

/// Builder for [`Scene`]. A camera is required.
#[derive(Default)]
pub struct SceneBuilder {
    camera: Option<Camera>,
    objects: Vec<Box<dyn SceneObject>>,
    lights: Vec<Light>,
}

impl SceneBuilder {
    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn object(mut self, object: impl SceneObject + 'static) -> Self {
        self.objects.push(Box::new(object));
        self
    }

    pub fn light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn build(self) -> RenderResult<Scene> {
        let camera = self.camera.ok_or(RenderError::MissingCamera)?;
        log::debug!(
            "Scene built: {}x{} camera, {} objects, {} lights",
            camera.width(),
            camera.height(),
            self.objects.len(),
            self.lights.len()
        );
        Ok(Scene {
            camera,
            objects: self.objects,
            lights: self.lights,
        })
    }
}
