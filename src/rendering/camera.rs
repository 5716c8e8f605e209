use glam::Vec3;

use crate::rendering::ray_tracer::Ray;

/// Fixed pinhole camera at the origin looking down -z.
///
/// Pixels map through normalized device coordinates: x is scaled by the
/// aspect ratio, y is flipped so row 0 is the top of the image.
pub struct Camera {
    width: u32,
    height: u32,
    aspect: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            aspect: width as f32 / height as f32,
        }
    }

    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let u = x as f32 / self.width as f32;
        let v = y as f32 / self.height as f32;
        let direction = Vec3::new((2.0 * u - 1.0) * self.aspect, -(2.0 * v - 1.0), -1.0);
        Ray::new(Vec3::ZERO, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rays_start_at_origin_normalized() {
        let camera = Camera::new(800, 600);
        let ray = camera.primary_ray(123, 456);
        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_center_pixel_looks_down_negative_z() {
        let camera = Camera::new(800, 600);
        let ray = camera.primary_ray(400, 300);
        assert!(ray.direction.z < -0.99);
        assert!(ray.direction.x.abs() < 1e-5);
        assert!(ray.direction.y.abs() < 1e-5);
    }

    #[test]
    fn test_row_zero_is_top_of_image() {
        let camera = Camera::new(800, 600);
        let top = camera.primary_ray(400, 0);
        let bottom = camera.primary_ray(400, 599);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }

    #[test]
    fn test_x_spans_aspect_scaled_range() {
        let camera = Camera::new(800, 600);
        let left = camera.primary_ray(0, 300);
        let right = camera.primary_ray(799, 300);
        assert!(left.direction.x < 0.0);
        assert!(right.direction.x > 0.0);
    }
}
