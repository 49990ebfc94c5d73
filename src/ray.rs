use crate::vec3::Vec3;
use crate::EPS;

/// Half-line starting at `origin`.
///
/// The direction is expected to be of unit length; intersection distances are
/// measured in its units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T> {
    origin: Vec3<T>,
    direction: Vec3<T>,
}

impl Ray<f64> {
    #[inline]
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Secondary ray leaving `point` along `direction`, nudged forward by [`EPS`] so that it
    /// does not hit the surface it starts on.
    #[inline]
    pub fn biased(point: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self::new(point + direction.scale(EPS), direction)
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }
}
