//! Pinhole camera with a precomputed per-pixel ray-target grid.

use crate::{RenderError, RenderResult};
use lumen_math::{Interval, Ray, Vec3};

/// Camera looking down +Z from a fixed position.
///
/// The ray-target offsets for every pixel are computed once, on
/// construction, and reused by every render.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    width: u32,
    height: u32,
    clip: Interval,
    // Row-major, `width * height` entries
    offsets: Vec<Vec3>,
}

impl Camera {
    /// Create a camera.
    ///
    /// - `fov_h`, `fov_v`: horizontal and vertical field of view in degrees
    /// - `near`, `far`: depth clip planes, `0 <= near < far`
    pub fn new(
        position: Vec3,
        width: u32,
        height: u32,
        fov_h: f32,
        fov_v: f32,
        near: f32,
        far: f32,
    ) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidCamera(format!(
                "resolution must be positive, got {width}x{height}"
            )));
        }
        if width.checked_mul(height).is_none() {
            return Err(RenderError::InvalidCamera(format!(
                "resolution {width}x{height} has too many pixels"
            )));
        }
        if !position.is_finite() {
            return Err(RenderError::InvalidCamera(format!(
                "position must be finite, got {position}"
            )));
        }
        for (name, fov) in [("horizontal", fov_h), ("vertical", fov_v)] {
            if !(fov > 0.0 && fov < 180.0) {
                return Err(RenderError::InvalidCamera(format!(
                    "{name} field of view must be in (0, 180) degrees, got {fov}"
                )));
            }
        }
        let clip = Interval::new(near, far);
        if !clip.is_valid() || near < 0.0 || near >= far {
            return Err(RenderError::InvalidCamera(format!(
                "clip planes must satisfy 0 <= near < far, got near={near} far={far}"
            )));
        }

        let offsets = Self::compute_offsets(width, height, fov_h, fov_v);
        Ok(Self {
            position,
            width,
            height,
            clip,
            offsets,
        })
    }

    /// Targets on the unit-depth image plane through each pixel center.
    fn compute_offsets(width: u32, height: u32, fov_h: f32, fov_v: f32) -> Vec<Vec3> {
        let half_width = (fov_h.to_radians() / 2.0).tan();
        let half_height = (fov_v.to_radians() / 2.0).tan();
        let delta_x = 2.0 * half_width / width as f32;
        let delta_y = 2.0 * half_height / height as f32;

        let mut offsets = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                offsets.push(Vec3::new(
                    -half_width + (x as f32 + 0.5) * delta_x,
                    half_height - (y as f32 + 0.5) * delta_y,
                    1.0,
                ));
            }
        }
        offsets
    }

    /// Camera-relative ray target for pixel (x, y).
    pub fn offset(&self, x: u32, y: u32) -> Vec3 {
        self.offsets[y as usize * self.width as usize + x as usize]
    }

    /// Primary ray through pixel (x, y), unit direction.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        Ray::towards(self.position, self.position + self.offset(x, y))
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// (width, height) in pixels.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Depth range `[near, far]` for primary hits.
    pub fn clip_range(&self) -> Interval {
        self.clip
    }
}
