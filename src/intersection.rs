use std::ptr;

use crate::geometry::{Hit, Primitive};
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Result of testing a ray against a primitive or a whole scene.
///
/// A miss is represented by `distance == -1` and no primitive. Any hit has a strictly
/// positive distance.
#[derive(Copy, Clone, Debug)]
pub struct Intersection<'a> {
    pub point: Vec3<f64>,
    pub distance: f64,
    pub normal: Vec3<f64>,
    pub primitive: Option<&'a Primitive>,
}

impl<'a> Intersection<'a> {
    pub const MISS_DISTANCE: f64 = -1.0;

    pub fn new(hit: Hit, primitive: &'a Primitive) -> Self {
        Self {
            point: hit.point,
            distance: hit.t,
            normal: hit.normal,
            primitive: Some(primitive),
        }
    }

    pub fn miss() -> Self {
        Self {
            point: Vec3::ZERO,
            distance: Self::MISS_DISTANCE,
            normal: Vec3::ZERO,
            primitive: None,
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.distance > 0.0
    }
}

/// Primitives compare by identity.
impl<'a> PartialEq for Intersection<'a> {
    fn eq(&self, other: &Self) -> bool {
        let same_primitive = match (self.primitive, other.primitive) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };

        same_primitive && self.point == other.point && self.distance == other.distance && self.normal == other.normal
    }
}

/// Finds the nearest hit of `ray` among `primitives`, skipping everything in `exclude`.
///
/// On equal distances the primitive listed first wins.
pub fn closest_intersection<'a>(
    ray: &Ray<f64>,
    primitives: &'a [Primitive],
    exclude: &[&Primitive],
) -> Intersection<'a> {
    let mut closest = Intersection::miss();

    for primitive in primitives {
        if exclude.iter().any(|&excluded| ptr::eq(excluded, primitive)) {
            continue;
        }

        let intersection = primitive.intersect(ray);
        if intersection.is_hit() && (!closest.is_hit() || intersection.distance < closest.distance) {
            closest = intersection;
        }
    }

    closest
}
