use glam::Vec3;

use crate::rendering::ray_tracer::Ray;

/// Surface properties of a sphere.
///
/// Channels of `color` may exceed 1.0 for emissive sources; tone mapping
/// compresses them at the end of the frame. `specular` is stored for scene
/// authoring but the shading model does not read it.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: Vec3,
    pub specular: f32,
    pub emission: f32,
}

impl Material {
    pub fn new(color: Vec3, specular: f32, emission: f32) -> Self {
        Self {
            color,
            specular,
            emission,
        }
    }
}

/// Sphere primitive. Center, radius, and material are mutated in place by
/// the animation controller between frames, never during rendering.
#[derive(Debug, Clone)]
pub struct SphereObject {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl SphereObject {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Nearest non-negative ray parameter of the ray/sphere intersection.
    ///
    /// Solves `a t^2 + b t + c = 0` in the general form (a is 1 for the
    /// normalized directions callers pass, but the formula does not rely on
    /// it). The smaller root is preferred; the larger root covers a ray
    /// origin inside the sphere. Tangent rays count as hits.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let near = (-b - sqrt_d) / (2.0 * a);
        if near >= 0.0 {
            return Some(near);
        }
        let far = (-b + sqrt_d) / (2.0 * a);
        if far >= 0.0 {
            return Some(far);
        }
        // Both roots negative: the sphere is entirely behind the origin.
        None
    }

    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
