use glam::Vec3;

use crate::simulation::objects::{Material, SphereObject};

/// Index of the black hole in the default object list.
pub const BLACK_HOLE: usize = 0;
/// Index of the sun in the default object list.
pub const SUN: usize = 1;

/// Ordered sphere collection plus the single fixed point light.
///
/// Object order is scan order for intersection tests, not priority: the
/// closest hit wins regardless of list position. The light is a plain
/// value, never occluded by geometry of its own.
pub struct Scene {
    pub objects: Vec<SphereObject>,
    pub light_pos: Vec3,
}

impl Default for Scene {
    fn default() -> Self {
        Self::sun_capture(Vec3::new(5.0, 5.0, 5.0))
    }
}

impl Scene {
    /// The sun-capture arrangement: a dark massive sphere, an emissive sun
    /// that will fall into it, and a static diffuse sphere off to the side.
    pub fn sun_capture(light_pos: Vec3) -> Self {
        let objects = vec![
            // Black hole
            SphereObject::new(
                Vec3::new(0.0, 0.0, -10.0),
                2.5,
                Material::new(Vec3::new(0.02, 0.02, 0.05), 0.0, 0.0),
            ),
            // Sun, bright enough to push channels past 1.0
            SphereObject::new(
                Vec3::new(0.0, 0.0, 10.0),
                1.5,
                Material::new(Vec3::new(1.2, 1.1, 0.3), 0.2, 2.5),
            ),
            SphereObject::new(
                Vec3::new(3.0, 0.0, -7.0),
                1.5,
                Material::new(Vec3::new(0.2, 1.0, 0.2), 0.5, 0.0),
            ),
        ];
        Self { objects, light_pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_capture_composition() {
        let scene = Scene::default();
        assert_eq!(scene.objects.len(), 3);
        assert!(scene.objects[SUN].material.emission > 0.5);
        assert!(scene.objects[BLACK_HOLE].material.emission < 0.5);
        // The sun starts behind the camera plane, the black hole in front.
        assert!(scene.objects[SUN].center.z > 0.0);
        assert!(scene.objects[BLACK_HOLE].center.z < 0.0);
    }

    #[test]
    fn test_default_light_position() {
        let scene = Scene::default();
        assert!((scene.light_pos - Vec3::new(5.0, 5.0, 5.0)).length() < 1e-6);
    }
}
