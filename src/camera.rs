use serde_derive::Deserialize;

use crate::ray::Ray;
use crate::vec3::Vec3;

/// Physical size of the image plane, in scene units.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Pinhole camera looking through a rectangular image plane.
///
/// The plane is centered at `origin + direction · distance` and spanned by two unit vectors:
/// `ort1` along the width and `ort2`, perpendicular to both `ort1` and the direction, along
/// the height. Pixel `(x, y)` is measured from the corner at `+ort1, +ort2`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec3<f64>,
    /// Viewing direction. Call [`Camera::update`] after changing it.
    pub direction: Vec3<f64>,
    distance: f64,
    viewport: Viewport,
    resolution: (u32, u32),
    ort1: Vec3<f64>,
    ort2: Vec3<f64>,
}

impl Camera {
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>, distance: f64, viewport: Viewport, resolution: (u32, u32)) -> Self {
        let mut camera = Self {
            origin,
            direction,
            distance,
            viewport,
            resolution,
            ort1: Vec3::ZERO,
            ort2: Vec3::ZERO,
        };
        camera.update();
        camera
    }

    /// Recomputes the image plane basis from the current direction.
    pub fn update(&mut self) {
        let d = self.direction.unit();

        self.direction = d;
        self.ort1 = Vec3::new(-d.y, d.x, d.z).unit();
        self.ort2 = self.ort1.cross(&d).unit();
    }

    #[inline]
    pub fn resolution(&self) -> (u32, u32) {
        self.resolution
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn basis(&self) -> (Vec3<f64>, Vec3<f64>) {
        (self.ort1, self.ort2)
    }

    fn corner(&self) -> Vec3<f64> {
        self.origin
            + self.direction.scale(self.distance)
            + self.ort1.scale(self.viewport.width / 2.0)
            + self.ort2.scale(self.viewport.height / 2.0)
    }

    /// Primary ray through pixel `(x, y)`.
    ///
    /// The direction is the image plane point itself, normalized, so it is only aimed
    /// through the pixel when the camera sits at the world origin.
    pub fn ray(&self, x: u32, y: u32) -> Ray<f64> {
        let (res_x, res_y) = self.resolution;
        let dx = x as f64 * self.viewport.width / res_x as f64;
        let dy = y as f64 * self.viewport.height / res_y as f64;

        let target = self.corner() - self.ort1.scale(dx) - self.ort2.scale(dy);

        Ray::new(self.origin, target.unit())
    }
}
