//! Recursive Whitted-style shading.

use log::debug;

use crate::camera::Camera;
use crate::frame::Frame;
use crate::geometry::Primitive;
use crate::intersection::{closest_intersection, Intersection};
use crate::light::Light;
use crate::ray::Ray;
use crate::vec3::{Color, Vec3};
use crate::BACKGROUND;

/// Resolves the color seen along `ray`.
///
/// Every reflection or refraction bounce costs one unit of `depth`; once it runs out, or
/// when the ray escapes the scene, the background is returned.
pub fn trace(ray: &Ray<f64>, primitives: &[Primitive], lights: &[Light], depth: u32) -> Color {
    if depth == 0 {
        return BACKGROUND;
    }

    let intersection = closest_intersection(ray, primitives, &[]);
    let object = match intersection.primitive {
        Some(object) => object,
        None => return BACKGROUND,
    };

    let material = object.material();
    let color = material.pattern.apply(material.color, &intersection.point);

    let light_effect = if material.unlit {
        Vec3::ONE
    } else {
        lights.iter().fold(Vec3::ZERO, |effect, light| {
            effect + light.effect(&intersection.point, &intersection.normal, object, primitives)
        })
    };

    let reflected = if material.reflective > 0.0 {
        reflect(ray, &intersection, primitives, lights, depth).scale(material.reflective)
    } else {
        Vec3::ZERO
    };

    let refracted = if material.is_transparent() {
        refract(ray, &intersection, material.refractive_index, primitives, lights, depth)
    } else {
        Vec3::ZERO
    };

    // Mirrors and glass replace the local color rather than blend with it.
    let local = (1.0 - material.refractive) * (1.0 - material.reflective);

    (color * light_effect).scale(local) + reflected + refracted.scale(material.refractive)
}

fn reflect(ray: &Ray<f64>, intersection: &Intersection, primitives: &[Primitive], lights: &[Light], depth: u32) -> Color {
    let direction = ray.direction().reflect(&intersection.normal).unit();

    trace(&Ray::biased(intersection.point, direction), primitives, lights, depth - 1)
}

/// Bends the ray through the surface following Snell's law.
///
/// Total internal reflection yields black; the reflected part is not traced in its place.
fn refract(
    ray: &Ray<f64>,
    intersection: &Intersection,
    refractive_index: f64,
    primitives: &[Primitive],
    lights: &[Light],
    depth: u32,
) -> Color {
    let mut normal = intersection.normal;
    let mut cos = ray.direction().dot(&normal);
    let (mut from, mut to) = (1.0, refractive_index);

    if cos < 0.0 {
        cos = -cos;
    } else {
        // Leaving the object.
        normal = normal.inverse();
        std::mem::swap(&mut from, &mut to);
    }

    let ratio = from / to;
    let k = 1.0 - ratio * ratio * (1.0 - cos * cos);
    if k < 0.0 {
        return Vec3::ZERO;
    }

    let direction = (ray.direction().scale(ratio) + normal.scale(ratio * cos - k.sqrt())).unit();

    trace(&Ray::biased(intersection.point, direction), primitives, lights, depth - 1)
}

/// Renders one frame, tracing a single primary ray per camera pixel.
pub fn render(camera: &Camera, primitives: &[Primitive], lights: &[Light], depth: u32) -> Frame {
    let (res_x, res_y) = camera.resolution();
    let step = (res_x / 10).max(1);

    let mut pixels = Vec::with_capacity(res_x as usize * res_y as usize);
    for x in 0..res_x {
        if x % step == 0 {
            debug!("rendering: {:.0}%", 100.0 * x as f64 / res_x as f64);
        }

        for y in 0..res_y {
            pixels.push(trace(&camera.ray(x, y), primitives, lights, depth));
        }
    }

    Frame::new(res_x, res_y, pixels)
}
