//! Scene description: everything a frame is rendered from.
//!
//! Scenes are usually read from JSON files of the following shape (vectors are `[x, y, z]`):
//!
//! ```json
//! {
//!     "camera": {"origin": [0, 1, 0], "direction": [1, 0, 0], "distance": 46,
//!                "width": 23, "height": 23, "resolution": 4},
//!     "depth": 3,
//!     "objects": [
//!         {"type": "sphere", "center": [20, 0, 0], "radius": 3.3, "material": {"color": [0.7, 1, 0.7]}},
//!         {"type": "plane", "point": [0, 0, 0], "normal": [0, 1, 0],
//!          "material": {"color": [0.8, 0.8, 0.8], "pattern": {"kind": "squared", "scale": 0.2}}},
//!         {"type": "triangle", "vertices": [[0, 0, 0], [0, 3, 0], [0, 0, 5]], "material": {"color": [1, 1, 1]}},
//!         {"type": "mesh", "path": "model.txt", "center": [80, -64, 3], "scale": 30,
//!          "material": {"color": [0.3, 0.3, 1], "refractive": 0.9, "refractive_index": 1.3}}
//!     ],
//!     "lights": [
//!         {"type": "falloff", "origin": [0, 100, 100], "color": [1, 1, 1], "coefficient": 282842},
//!         {"type": "directional", "direction": [0, -1, 0], "color": [0.2, 0.2, 0.2]}
//!     ]
//! }
//! ```
//!
//! Mesh paths are relative to the scene file.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_derive::Deserialize;

use crate::camera::{Camera, Viewport};
use crate::error::SceneError;
use crate::frame::Frame;
use crate::geometry::{Mesh, Plane, Primitive, Sphere, Triangle};
use crate::light::Light;
use crate::material::Material;
use crate::ray::Ray;
use crate::tracer;
use crate::vec3::{Color, Vec3};

#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct CameraConfig {
    pub origin: Vec3<f64>,
    pub direction: Vec3<f64>,
    pub distance: f64,
    pub width: f64,
    pub height: f64,
    /// Pixels per scene unit of the image plane.
    pub resolution: f64,
}

impl CameraConfig {
    pub fn build(&self) -> Camera {
        let resolution = (
            (self.width * self.resolution).floor() as u32,
            (self.height * self.resolution).floor() as u32,
        );
        let viewport = Viewport {
            width: self.width,
            height: self.height,
        };

        Camera::new(self.origin, self.direction, self.distance, viewport, resolution)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectConfig {
    Sphere {
        center: Vec3<f64>,
        radius: f64,
        material: Material,
    },
    Plane {
        point: Vec3<f64>,
        normal: Vec3<f64>,
        material: Material,
    },
    Triangle {
        vertices: [Vec3<f64>; 3],
        material: Material,
    },
    Mesh {
        path: PathBuf,
        center: Vec3<f64>,
        scale: f64,
        material: Material,
    },
}

/// Scene as written in a scene file, before meshes are read and cameras are set up.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    #[serde(default = "SceneConfig::default_depth")]
    pub depth: u32,
    pub objects: Vec<ObjectConfig>,
    #[serde(default)]
    pub lights: Vec<Light>,
}

impl SceneConfig {
    pub const DEFAULT_DEPTH: u32 = 2;

    fn default_depth() -> u32 {
        Self::DEFAULT_DEPTH
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| SceneError::io(path, err))?;

        Ok(serde_json::from_str(&text)?)
    }

    /// Turns the description into a renderable scene. Relative mesh paths are resolved
    /// against `base`.
    pub fn build(&self, base: &Path) -> Result<Scene, SceneError> {
        let mut primitives = Vec::with_capacity(self.objects.len());

        for object in &self.objects {
            match object {
                ObjectConfig::Sphere { center, radius, material } => {
                    primitives.push(Sphere::new(*center, *radius, *material).into());
                }
                ObjectConfig::Plane { point, normal, material } => {
                    primitives.push(Plane::new(*point, *normal, *material).into());
                }
                ObjectConfig::Triangle { vertices, material } => {
                    primitives.push(Triangle::new(*vertices, *material).into());
                }
                ObjectConfig::Mesh {
                    path,
                    center,
                    scale,
                    material,
                } => {
                    let triangles = Mesh::load(base.join(path))?.triangles(*center, *scale, *material);
                    debug!("mesh {} expands to {} triangles", path.display(), triangles.len());
                    primitives.extend(triangles.into_iter().map(Primitive::from));
                }
            }
        }

        debug!("scene ready: {} primitives, {} lights", primitives.len(), self.lights.len());

        Ok(Scene::new(self.camera.build(), primitives, self.lights.clone(), self.depth))
    }
}

/// Camera, primitives and lights of a single frame, plus the depth budget to render it with.
#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub primitives: Vec<Primitive>,
    pub lights: Vec<Light>,
    pub depth: u32,
}

impl Scene {
    pub fn new(camera: Camera, primitives: Vec<Primitive>, lights: Vec<Light>, depth: u32) -> Self {
        Self {
            camera,
            primitives,
            lights,
            depth,
        }
    }

    /// Reads a scene file and everything it refers to.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let base = path.parent().unwrap_or_else(|| Path::new("."));

        SceneConfig::load(path)?.build(base)
    }

    pub fn trace(&self, ray: &Ray<f64>) -> Color {
        tracer::trace(ray, &self.primitives, &self.lights, self.depth)
    }

    pub fn render(&self) -> Frame {
        tracer::render(&self.camera, &self.primitives, &self.lights, self.depth)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SCENE: &str = r#"{
        "camera": {"origin": [0, 0, 0], "direction": [1, 0, 0], "distance": 10,
                   "width": 4, "height": 3, "resolution": 2.5},
        "objects": [
            {"type": "sphere", "center": [20, 0, 0], "radius": 3, "material": {"color": [1, 0, 0]}},
            {"type": "plane", "point": [0, -5, 0], "normal": [0, 1, 0],
             "material": {"color": [1, 1, 1], "reflective": 0.3}},
            {"type": "triangle", "vertices": [[30, 0, 0], [30, 3, 0], [30, 0, 5]], "material": {"color": [0, 1, 0]}}
        ],
        "lights": [{"type": "falloff", "origin": [0, 10, 0], "color": [1, 1, 1]}]
    }"#;

    #[test]
    fn parse_scene() {
        let config: SceneConfig = serde_json::from_str(SCENE).unwrap();

        assert_eq!(SceneConfig::DEFAULT_DEPTH, config.depth);
        assert_eq!(3, config.objects.len());
        assert_eq!(1, config.lights.len());
        assert_eq!(
            ObjectConfig::Sphere {
                center: Vec3::new(20.0, 0.0, 0.0),
                radius: 3.0,
                material: Material::new(Vec3::new(1.0, 0.0, 0.0)),
            },
            config.objects[0]
        );
    }

    #[test]
    fn build_scene() {
        let config: SceneConfig = serde_json::from_str(SCENE).unwrap();
        let scene = config.build(Path::new(".")).unwrap();

        // 4 · 2.5 by 3 · 2.5, rounded down.
        assert_eq!((10, 7), scene.camera.resolution());
        assert_eq!(3, scene.primitives.len());
        assert!(matches!(scene.primitives[0], Primitive::Sphere(_)));
        assert!(matches!(scene.primitives[1], Primitive::Plane(_)));
        assert!(matches!(scene.primitives[2], Primitive::Triangle(_)));
        assert_eq!(0.3, scene.primitives[1].material().reflective);
    }

    #[test]
    fn reject_unknown_object() {
        let text = SCENE.replace(r#""type": "triangle""#, r#""type": "torus""#);
        assert!(serde_json::from_str::<SceneConfig>(&text).is_err());
    }

    #[test]
    fn missing_mesh_is_io_error() {
        let mut config: SceneConfig = serde_json::from_str(SCENE).unwrap();
        config.objects.push(ObjectConfig::Mesh {
            path: PathBuf::from("no-such-mesh.txt"),
            center: Vec3::ZERO,
            scale: 1.0,
            material: Material::new(Vec3::ONE),
        });

        match config.build(Path::new("/nonexistent")) {
            Err(SceneError::Io { path, .. }) => assert_eq!(Path::new("/nonexistent/no-such-mesh.txt"), path),
            other => panic!("unexpected result: {:?}", other.map(|scene| scene.primitives.len())),
        }
    }
}
