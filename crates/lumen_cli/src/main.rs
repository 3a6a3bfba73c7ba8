//! Lumen - render a preset scene to a PNG file.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lumen_renderer::{
    render, Framebuffer, OcclusionPolicy, RenderConfig, ShadingModel, Vec3, DEFAULT_WORKER_COUNT,
};

mod scenes;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Ray trace a static scene with hard shadows and Blinn-Phong shading", long_about = None)]
struct Cli {
    /// Preset scene to render
    #[arg(short, long, value_enum, default_value_t = scenes::Preset::Lane)]
    scene: scenes::Preset,

    /// Extra OBJ model to place in the scene
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Where to put the model, as X,Y,Z
    #[arg(long, value_parser = parse_vec3, default_value = "0,-2,6")]
    model_position: Vec3,

    /// Output image (format from extension, e.g. .png)
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Override the preset's resolution, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_resolution)]
    resolution: Option<(u32, u32)>,

    /// Worker threads
    #[arg(short, long, default_value_t = DEFAULT_WORKER_COUNT)]
    workers: usize,

    /// Give up on unfinished pixels after this many seconds
    #[arg(long, default_value_t = 600)]
    timeout_secs: u64,

    #[arg(long, value_enum, default_value_t = Shading::Collapsed)]
    shading: Shading,

    #[arg(long, value_enum, default_value_t = Occlusion::PerLight)]
    occlusion: Occlusion,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Shading {
    /// One scalar weight from the red channel of the Blinn-Phong color
    Collapsed,
    /// Independent weight per channel
    PerChannel,
}

impl From<Shading> for ShadingModel {
    fn from(shading: Shading) -> Self {
        match shading {
            Shading::Collapsed => ShadingModel::Collapsed,
            Shading::PerChannel => ShadingModel::PerChannel,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Occlusion {
    /// Test every light independently
    PerLight,
    /// A shadow from one light blocks every later light
    Cumulative,
}

impl From<Occlusion> for OcclusionPolicy {
    fn from(occlusion: Occlusion) -> Self {
        match occlusion {
            Occlusion::PerLight => OcclusionPolicy::PerLight,
            Occlusion::Cumulative => OcclusionPolicy::Cumulative,
        }
    }
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected X,Y,Z, got '{s}'")),
    }
}

fn parse_resolution(s: &str) -> Result<(u32, u32), String> {
    let (width, height) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid dimension '{v}': {e}"))
    };
    Ok((parse(width)?, parse(height)?))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let options = scenes::SceneOptions {
        resolution: cli.resolution,
        model: cli.model.map(|path| (path, cli.model_position)),
    };
    let scene = scenes::build(cli.scene, &options).context("failed to build scene")?;

    let config = RenderConfig::default()
        .with_workers(cli.workers)
        .with_timeout(Duration::from_secs(cli.timeout_secs))
        .with_shading(cli.shading.into())
        .with_occlusion(cli.occlusion.into());

    let (width, height) = scene.camera().resolution();
    let mut framebuffer = Framebuffer::new(width, height);
    let report = render(&scene, &mut framebuffer, &config)?;

    if !report.is_complete() {
        log::warn!(
            "Saving an incomplete image: {} of {} pixels are black",
            report.total - report.completed,
            report.total
        );
    }

    framebuffer
        .to_image()
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    log::info!("Saved {} ({}x{}) in {:?}", cli.output.display(), width, height, report.elapsed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("0,-2,6").unwrap(), Vec3::new(0.0, -2.0, 6.0));
        assert_eq!(parse_vec3(" 1.5, 2 ,3").unwrap(), Vec3::new(1.5, 2.0, 3.0));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("a,b,c").is_err());
    }

    #[test]
    fn test_parse_resolution() {
        assert_eq!(parse_resolution("640x360").unwrap(), (640, 360));
        assert!(parse_resolution("640").is_err());
        assert!(parse_resolution("640x-1").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["lumen"]).unwrap();
        assert_eq!(cli.scene, scenes::Preset::Lane);
        assert_eq!(cli.workers, 6);
        assert_eq!(cli.timeout_secs, 600);
        assert_eq!(cli.shading, Shading::Collapsed);
        assert_eq!(cli.occlusion, Occlusion::PerLight);
    }

    #[test]
    fn test_scene_names() {
        let cli = Cli::try_parse_from(["lumen", "--scene", "lights"]).unwrap();
        assert_eq!(cli.scene, scenes::Preset::Lights);
        let cli = Cli::try_parse_from(["lumen", "--scene", "lane"]).unwrap();
        assert_eq!(cli.scene, scenes::Preset::Lane);
        assert!(Cli::try_parse_from(["lumen", "--scene", "spheres"]).is_err());
    }

    #[test]
    fn test_cli_policies() {
        let cli = Cli::try_parse_from([
            "lumen",
            "--scene",
            "shadow",
            "--shading",
            "per-channel",
            "--occlusion",
            "cumulative",
            "--resolution",
            "32x16",
        ])
        .unwrap();
        assert_eq!(cli.scene, scenes::Preset::Shadow);
        assert_eq!(ShadingModel::from(cli.shading), ShadingModel::PerChannel);
        assert_eq!(OcclusionPolicy::from(cli.occlusion), OcclusionPolicy::Cumulative);
        assert_eq!(cli.resolution, Some((32, 16)));
    }
}
