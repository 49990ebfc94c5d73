use crate::geometry::{Geometry, Hit};
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub center: Vec3<f64>,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3<f64>, radius: f64, material: Material) -> Self {
        Self { center, radius, material }
    }

    #[inline]
    pub fn normal(&self, point: &Vec3<f64>) -> Vec3<f64> {
        (*point - self.center).unit()
    }
}

impl Geometry for Sphere {
    /// Solves `|o + t·d - c|² = r²` for a unit direction `d`.
    ///
    /// The smallest strictly positive root wins. A ray pointing away from the sphere, or
    /// grazing it, sees nothing; a ray starting inside sees the far wall.
    fn intersection(&self, ray: &Ray<f64>) -> Option<Hit> {
        let oc = ray.origin() - self.center;
        let b = -ray.direction().dot(&oc);

        let discriminant = self.radius.powi(2) - (oc.dot(&oc) - b * b);
        if discriminant < 0.0 {
            return None;
        }

        let sqrt = discriminant.sqrt();
        let t1 = b - sqrt;
        let t2 = b + sqrt;

        let t = if t1 > 0.0 && (t2 > t1 || t2 < 0.0) {
            t1
        } else if t2 > 0.0 && (t1 > t2 || t1 < 0.0) {
            t2
        } else {
            return None;
        };

        let point = ray.offset(t);

        Some(Hit::new(t, point, self.normal(&point)))
    }
}
