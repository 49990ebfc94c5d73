//! Glint, a small recursive ray tracer.
//!
//! One primary ray is cast per pixel and resolved by [`trace`]: the nearest primitive is
//! lit by every light (with hard shadows), then mirror reflections and refractions are
//! followed recursively until the depth budget runs out. The result is a [`Frame`] of
//! unclamped linear colors.

pub mod camera;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod intersection;
pub mod light;
pub mod material;
pub mod ray;
pub mod scene;
pub mod tracer;
pub mod vec3;

pub use crate::camera::{Camera, Viewport};
pub use crate::error::SceneError;
pub use crate::frame::Frame;
pub use crate::geometry::{Geometry, Mesh, Plane, Primitive, Sphere, Triangle};
pub use crate::intersection::{closest_intersection, Intersection};
pub use crate::light::{DirectionalLight, FalloffLight, Light};
pub use crate::material::{Material, Pattern};
pub use crate::ray::Ray;
pub use crate::scene::{Scene, SceneConfig};
pub use crate::tracer::{render, trace};
pub use crate::vec3::{Color, Vec3};

/// Offset applied to secondary ray origins so they do not hit the surface they leave, and
/// the tolerance of point-in-triangle tests.
pub const EPS: f64 = 1e-4;

/// Below this cosine a ray is considered parallel to a plane.
pub const PARALLEL_EPS: f64 = 1e-6;

/// Minimum light a lit surface receives, and the level of the background.
pub const AMBIENT: f64 = 0.1;

pub const BACKGROUND: Color = Vec3::new(AMBIENT, AMBIENT, AMBIENT);
