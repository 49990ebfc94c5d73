use serde_derive::Deserialize;

use crate::geometry::Primitive;
use crate::intersection::closest_intersection;
use crate::ray::Ray;
use crate::vec3::{Color, Vec3};
use crate::AMBIENT;

/// Point light whose intensity fades with (roughly) the square of the distance.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct FalloffLight {
    pub origin: Vec3<f64>,
    pub color: Color,
    #[serde(default = "FalloffLight::default_coefficient")]
    pub coefficient: f64,
}

impl FalloffLight {
    pub const DEFAULT_COEFFICIENT: f64 = 200_000.0;

    pub fn new(origin: Vec3<f64>, color: Color) -> Self {
        Self {
            origin,
            color,
            coefficient: Self::DEFAULT_COEFFICIENT,
        }
    }

    pub fn with_coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    fn default_coefficient() -> f64 {
        Self::DEFAULT_COEFFICIENT
    }

    fn effect(&self, point: &Vec3<f64>, normal: &Vec3<f64>, object: &Primitive, primitives: &[Primitive]) -> Color {
        let to_light = self.origin - *point;
        let distance = to_light.len();
        if distance == 0.0 {
            return self.color;
        }

        let direction = to_light.unit();
        let shadow = closest_intersection(&Ray::biased(*point, direction), primitives, &[object]);
        if let Some(occluder) = shadow.primitive {
            if shadow.distance < distance && !occluder.material().is_transparent() {
                return Vec3::ZERO;
            }
        }

        // Reflective surfaces fade a little slower and get a highlight on top.
        let reflective = object.material().reflective;
        let intensity = self.coefficient / (12.5 * distance.powf(2.0 - reflective / 5.0));
        let cos = normal.dot(&direction);

        let mut power = (cos * intensity).max(AMBIENT);
        if power != AMBIENT {
            power += reflective * cos.powf(100.0 * reflective);
        }

        self.color.scale(power)
    }
}

/// Light infinitely far away, shining along `direction`.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3<f64>,
    pub color: Color,
}

impl DirectionalLight {
    pub fn new(direction: Vec3<f64>, color: Color) -> Self {
        Self {
            direction: direction.unit(),
            color,
        }
    }

    fn effect(&self, point: &Vec3<f64>, normal: &Vec3<f64>, object: &Primitive, primitives: &[Primitive]) -> Color {
        let direction = self.direction.unit();
        let to_light = direction.inverse();

        let shadow = closest_intersection(&Ray::biased(*point, to_light), primitives, &[object]);
        if shadow.is_hit() {
            return Vec3::ZERO;
        }

        self.color.scale(to_light.dot(normal).max(0.0))
    }
}

#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    Falloff(FalloffLight),
    Directional(DirectionalLight),
}

impl Light {
    /// Light reaching `point` on `object`, whose surface faces `normal`.
    ///
    /// Casts a single shadow ray that ignores `object` itself.
    pub fn effect(&self, point: &Vec3<f64>, normal: &Vec3<f64>, object: &Primitive, primitives: &[Primitive]) -> Color {
        match self {
            Light::Falloff(light) => light.effect(point, normal, object, primitives),
            Light::Directional(light) => light.effect(point, normal, object, primitives),
        }
    }
}

impl From<FalloffLight> for Light {
    fn from(light: FalloffLight) -> Self {
        Light::Falloff(light)
    }
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Light::Directional(light)
    }
}
