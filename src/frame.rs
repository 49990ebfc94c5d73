use image::{ImageBuffer, Rgb, RgbImage};

use crate::vec3::Color;

/// Linear RGB output of a render, one color per camera pixel.
///
/// Pixel `(x, y)` follows the camera convention: `x` runs along the first image plane axis,
/// which is the vertical one on screen, and `y` along the second. Colors are not clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    res_x: u32,
    res_y: u32,
    pixels: Vec<Color>,
}

impl Frame {
    pub(crate) fn new(res_x: u32, res_y: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(res_x as usize * res_y as usize, pixels.len(), "pixel count must match resolution");

        Self { res_x, res_y, pixels }
    }

    #[inline]
    pub fn resolution(&self) -> (u32, u32) {
        (self.res_x, self.res_y)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[x as usize * self.res_y as usize + y as usize]
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Clamps and quantizes to 8 bits per channel.
    ///
    /// The picture is `res_y` pixels wide and `res_x` pixels high.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.res_y, self.res_x, |column, row| {
            let color = self.get(row, column);
            Rgb([quantize(color.x), quantize(color.y), quantize(color.z)])
        })
    }
}

#[inline]
fn quantize(c: f64) -> u8 {
    (c * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vec3::Vec3;

    #[test]
    fn quantize_clamps() {
        assert_eq!(0, quantize(-0.5));
        assert_eq!(0, quantize(0.0));
        assert_eq!(25, quantize(0.1));
        assert_eq!(127, quantize(0.5));
        assert_eq!(255, quantize(1.0));
        assert_eq!(255, quantize(7.0));
    }

    #[test]
    fn image_is_transposed() {
        // 2 rows along x, 3 columns along y.
        let mut pixels = Vec::new();
        for x in 0..2 {
            for y in 0..3 {
                pixels.push(Vec3::new(x as f64, y as f64 / 2.0, 0.0));
            }
        }
        let frame = Frame::new(2, 3, pixels);
        assert_eq!(Vec3::new(1.0, 0.5, 0.0), frame.get(1, 1));

        let image = frame.to_image();
        assert_eq!((3, 2), image.dimensions());
        assert_eq!(&Rgb([0, 127, 0]), image.get_pixel(1, 0));
        assert_eq!(&Rgb([255, 0, 0]), image.get_pixel(0, 1));
        assert_eq!(&Rgb([255, 255, 0]), image.get_pixel(2, 1));
    }
}
