use crate::geometry::{Geometry, Hit};
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;
use crate::PARALLEL_EPS;

/// A plane can be defined as a point representing how far the plane is from the
/// world origin and a normal (defining the orientation of the plane).
///
/// Planes are one-sided: only rays travelling against the normal can hit them.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub point: Vec3<f64>,
    pub normal: Vec3<f64>,
    pub material: Material,
}

impl Plane {
    pub fn new(point: Vec3<f64>, normal: Vec3<f64>, material: Material) -> Self {
        Self {
            point,
            normal: normal.unit(),
            material,
        }
    }

    /// Same plane, seen from the other side.
    pub fn flipped(&self) -> Self {
        Self {
            normal: self.normal.inverse(),
            ..*self
        }
    }

    /// Signed distance of `point` from the plane along its normal.
    #[inline]
    pub fn distance(&self, point: &Vec3<f64>) -> f64 {
        (*point - self.point).dot(&self.normal)
    }
}

impl Geometry for Plane {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Hit> {
        let denominator = self.normal.dot(ray.direction());

        if denominator.abs() < PARALLEL_EPS || denominator > 0.0 {
            return None;
        }

        let t = (self.point - ray.origin()).dot(&self.normal) / denominator;
        if t <= 0.0 {
            return None;
        }

        Some(Hit::new(t, ray.offset(t), self.normal))
    }
}
