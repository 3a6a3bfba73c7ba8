//! Polygon meshes loaded from Wavefront OBJ files.
//!
//! A mesh is a single scene object: one color, one identity, many
//! triangles. The nearest triangle hit is the mesh's hit.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::{Color, SceneObject, SurfaceHit, Triangle};
use lumen_math::{Ray, Vec3};
use thiserror::Error;

/// Errors that can occur while loading a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("failed to load OBJ model {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("failed to parse OBJ data: {0}")]
    Parse(#[from] tobj::LoadError),

    #[error("OBJ model has no triangles")]
    Empty,
}

/// Result type for mesh loading.
pub type MeshResult<T> = Result<T, MeshError>;

/// Placement applied to every vertex of a loaded model: scale, then offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Placement {
    pub fn new(position: Vec3, scale: Vec3) -> Self {
        Self { position, scale }
    }

    fn apply(&self, vertex: Vec3) -> Vec3 {
        vertex * self.scale + self.position
    }
}

/// A triangle mesh treated as one object.
#[derive(Debug, Clone)]
pub struct Mesh {
    triangles: Vec<Triangle>,
    color: Color,
}

impl Mesh {
    /// Build a mesh from already-placed triangles.
    pub fn from_triangles(triangles: Vec<Triangle>, color: Color) -> Self {
        Self { triangles, color }
    }

    /// Load an OBJ file from disk.
    pub fn load_obj(path: impl AsRef<Path>, placement: Placement, color: Color) -> MeshResult<Self> {
        let path = path.as_ref();
        let (models, _materials) =
            tobj::load_obj(path, &load_options()).map_err(|source| MeshError::Load {
                path: path.to_path_buf(),
                source,
            })?;

        let mesh = Self::from_models(&models, placement, color)?;
        log::info!(
            "Loaded {} triangles from {}",
            mesh.triangle_count(),
            path.display()
        );
        Ok(mesh)
    }

    /// Parse OBJ data from a reader. Material libraries are ignored.
    pub fn parse_obj(reader: &mut impl BufRead, placement: Placement, color: Color) -> MeshResult<Self> {
        let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_: &Path| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Self::from_models(&models, placement, color)
    }

    fn from_models(models: &[tobj::Model], placement: Placement, color: Color) -> MeshResult<Self> {
        let mut triangles = Vec::new();

        for model in models {
            let mesh = &model.mesh;
            let vertex = |index: u32| {
                let i = index as usize * 3;
                placement.apply(Vec3::new(
                    mesh.positions[i],
                    mesh.positions[i + 1],
                    mesh.positions[i + 2],
                ))
            };

            for face in mesh.indices.chunks_exact(3) {
                triangles.push(Triangle::new(
                    vertex(face[0]),
                    vertex(face[1]),
                    vertex(face[2]),
                    color,
                ));
            }
            log::debug!("OBJ model '{}': {} faces", model.name, mesh.indices.len() / 3);
        }

        if triangles.is_empty() {
            return Err(MeshError::Empty);
        }
        Ok(Self::from_triangles(triangles, color))
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

impl SceneObject for Mesh {
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let mut closest: Option<(f32, &Triangle)> = None;

        for triangle in &self.triangles {
            if let Some(t) = triangle.hit_t(ray) {
                if closest.map_or(true, |(best, _)| t < best) {
                    closest = Some((t, triangle));
                }
            }
        }

        closest.map(|(t, triangle)| SurfaceHit::at(ray, t, triangle.facing_normal(ray)))
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const QUAD_OBJ: &str = "\
o Quad
v -1.0 -1.0 0.0
v 1.0 -1.0 0.0
v 1.0 1.0 0.0
v -1.0 1.0 0.0
f 1 2 3 4
";

    const TWO_PLANES_OBJ: &str = "\
v -1.0 -1.0 2.0
v 1.0 -1.0 2.0
v 0.0 1.0 2.0
v -1.0 -1.0 1.0
v 1.0 -1.0 1.0
v 0.0 1.0 1.0
f 1 2 3
f 4 5 6
";

    #[test]
    fn test_parse_triangulates_quads() {
        let mesh = Mesh::parse_obj(&mut Cursor::new(QUAD_OBJ), Placement::default(), Color::ONE)
            .expect("quad should parse");
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_placement_scales_then_offsets() {
        let placement = Placement::new(Vec3::new(0.0, -2.0, 6.0), Vec3::splat(2.0));
        let mesh = Mesh::parse_obj(&mut Cursor::new(QUAD_OBJ), placement, Color::ONE).unwrap();

        for triangle in mesh.triangles() {
            for v in triangle.vertices() {
                assert_eq!(v.z, 6.0);
                assert!(v.x.abs() == 2.0);
                assert!(v.y == -4.0 || v.y == 0.0);
            }
        }
    }

    #[test]
    fn test_nearest_triangle_wins() {
        let mesh =
            Mesh::parse_obj(&mut Cursor::new(TWO_PLANES_OBJ), Placement::default(), Color::ONE)
                .unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = mesh.intersect(&ray).expect("should hit");
        assert!((hit.distance - 1.0).abs() < 1e-6);
        assert!(hit.normal.dot(ray.direction()) < 0.0);
    }

    #[test]
    fn test_empty_obj_is_an_error() {
        let result = Mesh::parse_obj(&mut Cursor::new("# nothing\n"), Placement::default(), Color::ONE);
        assert!(matches!(result, Err(MeshError::Empty)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Mesh::load_obj("does/not/exist.obj", Placement::default(), Color::ONE)
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("does/not/exist.obj"));
    }
}
