use serde_derive::Deserialize;

use crate::vec3::{Color, Vec3};

/// Procedural color perturbation of a surface.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Pattern {
    #[default]
    Fill,
    /// Alternating bands of width `scale · π` along the y and z axes.
    Squared { scale: f64 },
}

impl Pattern {
    /// Applies the pattern to `color` at the given surface point.
    pub fn apply(&self, color: Color, point: &Vec3<f64>) -> Color {
        match *self {
            Pattern::Fill => color,
            Pattern::Squared { scale } => {
                let band = |v: f64| (v / scale).sin() >= 0.0;
                if band(point.y) == band(point.z) {
                    color * 1.1
                } else {
                    color * 0.9
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Material {
    pub color: Color,
    /// Share of the final color taken by the mirror reflection.
    #[serde(default)]
    pub reflective: f64,
    /// Share of the final color taken by the transmitted ray. Any non-zero value lets light
    /// through for shadow tests.
    #[serde(default)]
    pub refractive: f64,
    #[serde(default = "Material::default_refractive_index")]
    pub refractive_index: f64,
    #[serde(default)]
    pub pattern: Pattern,
    /// Ignores lights entirely, e.g. the visible bulb of a lamp.
    #[serde(default)]
    pub unlit: bool,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            reflective: 0.0,
            refractive: 0.0,
            refractive_index: Self::default_refractive_index(),
            pattern: Pattern::Fill,
            unlit: false,
        }
    }

    pub fn reflective(mut self, reflective: f64) -> Self {
        self.reflective = reflective;
        self
    }

    pub fn refractive(mut self, refractive: f64, refractive_index: f64) -> Self {
        self.refractive = refractive;
        self.refractive_index = refractive_index;
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn unlit(mut self) -> Self {
        self.unlit = true;
        self
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.refractive != 0.0
    }

    fn default_refractive_index() -> f64 {
        1.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fill_keeps_color() {
        let color = Vec3::new(0.5, 0.25, 1.0);
        assert_eq!(color, Pattern::Fill.apply(color, &Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn squared_alternates_bands() {
        let pattern = Pattern::Squared { scale: 1.0 };
        let color = Vec3::new(0.5, 0.5, 0.5);

        // sin(1) > 0 on both axes.
        assert_eq!(color * 1.1, pattern.apply(color, &Vec3::new(0.0, 1.0, 1.0)));
        // sin(-1) < 0 on the z axis only.
        assert_eq!(color * 0.9, pattern.apply(color, &Vec3::new(0.0, 1.0, -1.0)));
        // x is not part of the pattern.
        assert_eq!(
            pattern.apply(color, &Vec3::new(-7.0, 1.0, -1.0)),
            pattern.apply(color, &Vec3::new(42.0, 1.0, -1.0))
        );
    }

    #[test]
    fn deserialize_with_defaults() {
        let material: Material = serde_json::from_str(r#"{"color": [1, 0, 0]}"#).unwrap();
        assert_eq!(Material::new(Vec3::new(1.0, 0.0, 0.0)), material);

        let material: Material = serde_json::from_str(
            r#"{"color": [1, 1, 1], "reflective": 0.5, "pattern": {"kind": "squared", "scale": 0.2}}"#,
        )
        .unwrap();
        assert_eq!(0.5, material.reflective);
        assert_eq!(Pattern::Squared { scale: 0.2 }, material.pattern);
    }
}
