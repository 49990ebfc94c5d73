use crate::intersection::Intersection;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

mod mesh;
mod plane;
mod sphere;
mod triangle;

pub use self::mesh::Mesh;
pub use self::plane::Plane;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

/// Raw ray/surface hit, before it is tied to the primitive that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub t: f64,
    pub point: Vec3<f64>,
    pub normal: Vec3<f64>,
}

impl Hit {
    pub fn new(t: f64, point: Vec3<f64>, normal: Vec3<f64>) -> Self {
        Self { t, point, normal }
    }
}

pub trait Geometry {
    /// Returns the hit with the smallest positive ray parameter, if any.
    fn intersection(&self, ray: &Ray<f64>) -> Option<Hit>;
}

/// Renderable shape together with its surface material.
#[derive(Clone, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => &sphere.material,
            Primitive::Plane(plane) => &plane.material,
            Primitive::Triangle(triangle) => triangle.material(),
        }
    }

    /// Intersects the ray with this primitive, returning the miss sentinel when there is no
    /// hit in front of the ray origin.
    pub fn intersect(&self, ray: &Ray<f64>) -> Intersection<'_> {
        let hit = match self {
            Primitive::Sphere(sphere) => sphere.intersection(ray),
            Primitive::Plane(plane) => plane.intersection(ray),
            Primitive::Triangle(triangle) => triangle.intersection(ray),
        };

        match hit {
            Some(hit) => Intersection::new(hit, self),
            None => Intersection::miss(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}
