//! Lumen Renderer - CPU ray-tracing render kernel
//!
//! For a static scene (camera, objects, point/directional lights) computes
//! one color per pixel:
//! - nearest visible surface along the primary ray, depth-clipped
//! - hard shadows from a visibility ray per light
//! - ambient + diffuse + specular (Blinn-Phong) with inverse-square falloff
//!
//! Pixels are independent and rendered in parallel on a fixed-size pool.
//! There is no acceleration structure: every ray scans every object.

mod camera;
pub mod color;
mod error;
mod framebuffer;
mod light;
mod mesh;
mod object;
mod renderer;
mod scene;
pub mod shading;
pub mod shadow;
mod sphere;
mod triangle;
pub mod visibility;

pub use camera::Camera;
pub use color::Color;
pub use error::{RenderError, RenderResult};
pub use framebuffer::{Framebuffer, FramebufferWriter};
pub use light::{DirectionalLight, Light, PointLight};
pub use mesh::{Mesh, MeshError, MeshResult, Placement};
pub use object::{Intersection, ObjectId, SceneObject, SurfaceHit};
pub use renderer::{
    render, render_pixel, RenderConfig, RenderReport, DEFAULT_TIMEOUT, DEFAULT_WORKER_COUNT,
};
pub use scene::{Scene, SceneBuilder};
pub use shading::{OcclusionPolicy, ShadingModel};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
