use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Deserializer};

/// Linear RGB triple, one channel per component.
pub type Color = Vec3<f64>;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Copy + Sub<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn cross(&self, other: &Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Vec3<f64> {
    pub const ZERO: Vec3<f64> = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3<f64> = Vec3::new(1.0, 1.0, 1.0);

    #[inline]
    pub fn len(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// The zero vector has no direction and maps onto itself.
    #[inline]
    pub fn unit(&self) -> Vec3<f64> {
        let len = self.len();
        if len == 0.0 {
            return Vec3::ZERO;
        }

        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    #[inline]
    pub fn inverse(&self) -> Vec3<f64> {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Raises every component to the given power.
    #[inline]
    pub fn powf(&self, exp: f64) -> Vec3<f64> {
        Vec3 {
            x: self.x.powf(exp),
            y: self.y.powf(exp),
            z: self.z.powf(exp),
        }
    }

    /// Projects `self` onto the direction of `other`, keeping the length of `other` as a factor.
    pub fn projection(&self, other: &Vec3<f64>) -> Vec3<f64> {
        self.unit().scale(self.dot(&other.unit()) * other.len())
    }

    /// Reflects the vector about the given unit normal.
    #[inline]
    pub fn reflect(&self, normal: &Vec3<f64>) -> Vec3<f64> {
        *self - normal.scale(2.0 * self.dot(normal))
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, other: Vec3<T>) {
        *self = *self + other;
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// Component-wise product, used to filter colors.
impl<T: Mul<Output = T>> Mul for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl Mul<f64> for Vec3<f64> {
    type Output = Vec3<f64>;

    #[inline]
    fn mul(self, factor: f64) -> Self::Output {
        self.scale(factor)
    }
}

impl<T: Div<Output = T>> Div for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn div(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
        }
    }
}

impl Div<f64> for Vec3<f64> {
    type Output = Vec3<f64>;

    #[inline]
    fn div(self, divisor: f64) -> Self::Output {
        Vec3 {
            x: self.x / divisor,
            y: self.y / divisor,
            z: self.z / divisor,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Copy> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from(v: [T; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.x, self.y, self.z)
    }
}

/// Scene files spell vectors as `[x, y, z]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vec3<T> {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, z) = Deserialize::deserialize(de)?;
        Ok(Vec3 { x, y, z })
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for Vec3<f64> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}
