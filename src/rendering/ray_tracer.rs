use glam::Vec3;
use rayon::prelude::*;

use crate::rendering::camera::Camera;
use crate::simulation::objects::SphereObject;
use crate::simulation::scene::Scene;

/// Minimum light level applied even to fully shadowed surfaces.
const AMBIENT: f32 = 0.1;
/// Offset along the normal for shadow-ray origins, avoids self-intersection.
const SHADOW_BIAS: f32 = 0.001;
/// Objects with emission above this shade as light sources.
const EMISSIVE_THRESHOLD: f32 = 0.5;
/// Color returned for rays that hit nothing and pass no sun.
const BACKGROUND: Vec3 = Vec3::new(0.0, 0.0, 0.1);
/// Componentwise ceiling on direct emissive hits, bounds HDR intensity
/// ahead of tone mapping.
const EMISSIVE_CLAMP: Vec3 = Vec3::new(2.0, 1.7, 0.5);
/// Componentwise ceiling on halo contributions.
const HALO_CLAMP: Vec3 = Vec3::new(1.0, 0.9, 0.5);
/// Halo reach, in sphere radii.
const HALO_RADII: f32 = 2.5;

/// Primary or shadow ray. The direction is normalized at construction and
/// must stay unit length: shading derives distances directly from t.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction.length_squared() > 0.0,
            "degenerate ray direction"
        );
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

/// Shade one ray against the scene. Returns unclamped HDR color.
pub fn trace(ray: &Ray, scene: &Scene) -> Vec3 {
    let mut closest = f32::INFINITY;
    let mut hit = None;
    for obj in &scene.objects {
        if let Some(t) = obj.intersect(ray) {
            if t < closest {
                closest = t;
                hit = Some(obj);
            }
        }
    }

    let Some(obj) = hit else {
        return miss_color(ray, scene);
    };

    let point = ray.origin + ray.direction * closest;
    let normal = obj.normal_at(point);
    let light_dir = (scene.light_pos - point).normalize();
    let diffuse = normal.dot(light_dir).max(0.0);

    // Light sources shade themselves; shadow logic never darkens them.
    if obj.material.emission > EMISSIVE_THRESHOLD {
        return emissive_color(obj, point, diffuse);
    }

    let shadow_ray = Ray::new(point + normal * SHADOW_BIAS, light_dir);
    // Any occluder counts, even one beyond the light.
    let in_shadow = scene
        .objects
        .iter()
        .any(|o| o.intersect(&shadow_ray).is_some());

    let color = obj.material.color;
    if in_shadow {
        color * AMBIENT
    } else {
        color * (AMBIENT + diffuse * 0.9)
    }
}

/// Glow shading for a direct hit on an emissive object: full emission at
/// the surface, a smoothstep falloff out to 1.5 radii, and a wider, dimmer
/// corona band beyond that.
fn emissive_color(obj: &SphereObject, point: Vec3, diffuse: f32) -> Vec3 {
    let material = &obj.material;
    let glow_radius = obj.radius * 1.5;
    let dist_to_center = (point - obj.center).length();

    let glow_falloff = smoothstep(obj.radius, glow_radius, dist_to_center);
    let mut sun_glow = material.emission * (1.0 - glow_falloff);
    if dist_to_center > obj.radius {
        let corona_falloff = smoothstep(glow_radius, glow_radius * 2.5, dist_to_center);
        sun_glow += material.emission * 0.7 * (1.0 - corona_falloff);
    }

    let color = material.color * (AMBIENT + diffuse * 0.7) + material.color * sun_glow;
    color.min(EMISSIVE_CLAMP)
}

/// Halo for rays that miss everything: the first emissive object the ray
/// passes near contributes a distance-faded glow. An emissive object the
/// ray is not near does not stop the scan.
fn miss_color(ray: &Ray, scene: &Scene) -> Vec3 {
    for obj in &scene.objects {
        let material = &obj.material;
        if material.emission <= EMISSIVE_THRESHOLD {
            continue;
        }
        // Reduced-form discriminant; valid because the direction is unit
        // length.
        let oc = ray.origin - obj.center;
        let b = ray.direction.dot(oc);
        let c = oc.dot(oc) - obj.radius * obj.radius;
        let discriminant = b * b - c;
        let min_dist = b.abs();
        let halo_radius = obj.radius * HALO_RADII;
        if discriminant < 0.0 && min_dist < halo_radius {
            let glow = material.emission * (1.0 - min_dist / halo_radius);
            let halo = material.color * glow * 0.5;
            return halo.min(HALO_CLAMP);
        }
    }
    BACKGROUND
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Renders complete frames by fanning contiguous row bands out across the
/// rayon pool.
///
/// Each worker owns a disjoint slice of the output buffer; the scene is
/// read-only during the fan-out, and all bands complete before
/// `render_into` returns. Output bytes are identical for any worker count.
pub struct FrameRenderer {
    width: u32,
    height: u32,
    threads: usize,
    camera: Camera,
}

impl FrameRenderer {
    pub fn new(width: u32, height: u32, worker_threads: Option<usize>) -> Self {
        let threads = worker_threads.unwrap_or_else(default_worker_count).max(1);
        Self {
            width,
            height,
            threads,
            camera: Camera::new(width, height),
        }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    pub fn render(&self, scene: &Scene) -> Vec<u8> {
        let mut pixels = vec![0; self.buffer_len()];
        self.render_into(scene, &mut pixels);
        pixels
    }

    /// Fill `pixels` (row-major RGB8, length `width * height * 3`) with one
    /// frame of the given scene.
    pub fn render_into(&self, scene: &Scene, pixels: &mut [u8]) {
        assert_eq!(pixels.len(), self.buffer_len(), "pixel buffer size mismatch");
        let stride = self.width as usize * 3;

        // Carve the buffer into per-band slices up front so workers can
        // never alias each other's rows.
        let mut bands = Vec::with_capacity(self.threads);
        let mut rest = pixels;
        for (y0, y1) in row_bands(self.height, self.threads) {
            let (band, tail) = rest.split_at_mut((y1 - y0) as usize * stride);
            bands.push((y0, band));
            rest = tail;
        }

        bands.into_par_iter().for_each(|(y0, band)| {
            for (i, row) in band.chunks_exact_mut(stride).enumerate() {
                self.render_row(scene, y0 + i as u32, row);
            }
        });
    }

    fn render_row(&self, scene: &Scene, y: u32, row: &mut [u8]) {
        for x in 0..self.width {
            let color = trace(&self.camera.primary_ray(x, y), scene);
            // Reinhard tone map compresses HDR emission into [0, 1).
            let mapped = color / (color + Vec3::ONE);
            let px = x as usize * 3;
            row[px] = quantize(mapped.x);
            row[px + 1] = quantize(mapped.y);
            row[px + 2] = quantize(mapped.z);
        }
    }
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(4)
}

/// Contiguous row ranges `[y0, y1)`, one per worker. `height / threads`
/// rows per band, the last band absorbing the remainder; never more bands
/// than rows.
fn row_bands(height: u32, threads: usize) -> Vec<(u32, u32)> {
    let count = (threads.max(1) as u32).min(height.max(1));
    let block = height / count;
    (0..count)
        .map(|band| {
            let y0 = band * block;
            let y1 = if band == count - 1 { height } else { y0 + block };
            (y0, y1)
        })
        .collect()
}
