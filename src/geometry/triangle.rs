use crate::geometry::{Geometry, Hit, Plane};
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;
use crate::EPS;

/// Flat two-sided triangle.
///
/// Hits are found against the supporting plane, seen from whichever side the ray comes
/// from, and then kept only if the point lies inside the triangle.
#[derive(Copy, Clone, Debug)]
pub struct Triangle {
    vertices: [Vec3<f64>; 3],
    front: Plane,
    back: Plane,
    area: f64,
}

impl Triangle {
    pub fn new(vertices: [Vec3<f64>; 3], material: Material) -> Self {
        let [a, b, c] = vertices;
        let cross = (b - a).cross(&(c - a));
        let front = Plane::new(a, cross, material);

        Self {
            vertices,
            front,
            back: front.flipped(),
            area: cross.len() / 2.0,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3<f64>; 3] {
        &self.vertices
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.front.material
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Tests whether `point` lies on the triangle.
    ///
    /// The point must be on the supporting plane and the three sub-triangles it forms with
    /// the edges must add up to the whole area, both within [`EPS`].
    pub fn contains(&self, point: &Vec3<f64>) -> bool {
        if self.front.distance(point).abs() > EPS {
            return false;
        }

        let [a, b, c] = self.vertices;
        let (pa, pb, pc) = (a - *point, b - *point, c - *point);
        let area = (pa.cross(&pb).len() + pb.cross(&pc).len() + pc.cross(&pa).len()) / 2.0;

        (self.area - area).abs() <= EPS
    }
}

impl Geometry for Triangle {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Hit> {
        let hit = self
            .front
            .intersection(ray)
            .or_else(|| self.back.intersection(ray))?;

        if self.contains(&hit.point) {
            Some(hit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn triangle() -> Triangle {
        Triangle::new(
            [Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 0.0, 5.0)],
            Material::new(Vec3::ONE),
        )
    }

    #[test]
    fn area() {
        assert_abs_diff_eq!(7.5, triangle().area());
    }

    #[test]
    fn contains_inner_point() {
        assert!(triangle().contains(&Vec3::new(0.0, 1.0, 1.0)));
    }

    #[test]
    fn rejects_outer_point() {
        let triangle = triangle();
        assert!(!triangle.contains(&Vec3::new(0.0, 3.0, 3.0)));
        assert!(!triangle.contains(&Vec3::new(0.0, -1.0, 1.0)));
    }

    #[test]
    fn rejects_point_off_plane() {
        assert!(!triangle().contains(&Vec3::new(0.5, 1.0, 1.0)));
    }

    #[test]
    fn hit_from_both_sides() {
        let triangle = triangle();

        let ray = Ray::new(Vec3::new(-4.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 0.0));
        let hit = triangle.intersection(&ray).unwrap();
        assert_abs_diff_eq!(4.0, hit.t);
        assert_abs_diff_eq!(Vec3::new(0.0, 1.0, 1.0), hit.point);
        assert_abs_diff_eq!(Vec3::new(-1.0, 0.0, 0.0), hit.normal);

        let ray = Ray::new(Vec3::new(4.0, 1.0, 1.0), Vec3::new(-1.0, 0.0, 0.0));
        let hit = triangle.intersection(&ray).unwrap();
        assert_abs_diff_eq!(4.0, hit.t);
        assert_abs_diff_eq!(Vec3::new(1.0, 0.0, 0.0), hit.normal);
    }

    #[test]
    fn miss_outside_edges() {
        let ray = Ray::new(Vec3::new(-4.0, 4.0, 4.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(triangle().intersection(&ray).is_none());
    }
}
