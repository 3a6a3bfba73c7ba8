//! Render orchestration.
//!
//! One unit of work per pixel, dispatched onto a fixed-size rayon pool:
//! - primary ray from the camera's precomputed grid
//! - nearest hit within the camera's clip range
//! - shadowed Blinn-Phong accumulated over every light
//! - serialized write into the framebuffer

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::color::BLACK;
use crate::shading::{shade_all, OcclusionPolicy, ShadingModel};
use crate::visibility::resolve;
use crate::{Color, Framebuffer, RenderError, RenderResult, Scene};

/// Default number of worker threads.
pub const DEFAULT_WORKER_COUNT: usize = 6;

/// Default wall-clock budget for a whole render.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Worker threads in the pool
    pub worker_count: usize,
    /// Pixels not started before this elapses are cancelled and left black
    pub timeout: Duration,
    /// How Blinn-Phong terms weight the surface color
    pub shading: ShadingModel,
    /// Whether shadows carry over between lights
    pub occlusion: OcclusionPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            timeout: DEFAULT_TIMEOUT,
            shading: ShadingModel::default(),
            occlusion: OcclusionPolicy::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_shading(mut self, shading: ShadingModel) -> Self {
        self.shading = shading;
        self
    }

    pub fn with_occlusion(mut self, occlusion: OcclusionPolicy) -> Self {
        self.occlusion = occlusion;
        self
    }
}

/// What happened during a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Pixel tasks dispatched (`width * height`)
    pub total: usize,
    /// Pixel tasks that wrote their color
    pub completed: usize,
    /// Pixel tasks skipped because the timeout elapsed
    pub cancelled: usize,
    /// Pixel tasks that panicked; their cells keep the initial black
    pub failed: usize,
    pub elapsed: Duration,
}

impl RenderReport {
    /// True when every pixel was rendered.
    pub fn is_complete(&self) -> bool {
        self.cancelled == 0 && self.failed == 0 && self.completed == self.total
    }
}

/// Compute the color of pixel (x, y).
///
/// Pure function of the scene: black when the primary ray hits nothing.
pub fn render_pixel(scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let camera = scene.camera();
    let ray = camera.primary_ray(x, y);

    match resolve(&ray, scene.objects(), None, Some(camera.clip_range())) {
        Some(hit) => shade_all(
            &hit,
            scene.lights(),
            scene.objects(),
            camera.position(),
            config.shading,
            config.occlusion,
        ),
        None => BLACK,
    }
}

/// Render `scene` into `framebuffer`.
///
/// Configuration problems are reported before any work starts. A render
/// that runs out of time, or whose pixel tasks panic, is not an error:
/// unfinished pixels stay black and the returned report counts them.
pub fn render(
    scene: &Scene,
    framebuffer: &mut Framebuffer,
    config: &RenderConfig,
) -> RenderResult<RenderReport> {
    let (width, height) = scene.camera().resolution();
    if (framebuffer.width(), framebuffer.height()) != (width, height) {
        return Err(RenderError::DimensionMismatch {
            buffer_width: framebuffer.width(),
            buffer_height: framebuffer.height(),
            camera_width: width,
            camera_height: height,
        });
    }
    if config.worker_count == 0 {
        return Err(RenderError::NoWorkers);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count)
        .thread_name(|index| format!("lumen-worker-{index}"))
        .build()?;

    let total = (width as usize) * (height as usize);
    log::info!(
        "Rendering {}x{} ({} objects, {} lights) on {} workers",
        width,
        height,
        scene.objects().len(),
        scene.lights().len(),
        config.worker_count
    );

    let start = Instant::now();
    let deadline = start.checked_add(config.timeout);
    let completed = AtomicUsize::new(0);
    let cancelled = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);
    let writer = framebuffer.writer();

    pool.install(|| {
        (0..total).into_par_iter().for_each(|index| {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                cancelled.fetch_add(1, Ordering::Relaxed);
                return;
            }

            let x = (index % width as usize) as u32;
            let y = (index / width as usize) as u32;
            match panic::catch_unwind(AssertUnwindSafe(|| render_pixel(scene, x, y, config))) {
                Ok(color) => {
                    writer.write(x, y, color);
                    completed.fetch_add(1, Ordering::Relaxed);
                }
                Err(_) => {
                    log::debug!("Pixel ({x}, {y}) panicked, left black");
                    failed.fetch_add(1, Ordering::Relaxed);
                }
            }
        });
    });

    let report = RenderReport {
        total,
        completed: completed.into_inner(),
        cancelled: cancelled.into_inner(),
        failed: failed.into_inner(),
        elapsed: start.elapsed(),
    };

    if report.is_complete() {
        log::info!("Rendered {} pixels in {:?}", report.total, report.elapsed);
    }
    if report.cancelled > 0 {
        log::warn!(
            "Render timed out after {:?}: {} of {} pixel tasks cancelled, left black",
            report.elapsed,
            report.cancelled,
            report.total
        );
    }
    if report.failed > 0 {
        log::warn!(
            "{} of {} pixel tasks failed, left black",
            report.failed,
            report.total
        );
    }

    Ok(report)
}
