use glam::Vec3;

use crate::simulation::scene::Scene;

/// Fraction of the sun radius added to the black hole radius for the
/// capture test.
const CAPTURE_MARGIN: f32 = 0.7;
/// One-shot shrink/fade factor applied at the moment of capture.
const FADE_FACTOR: f32 = 0.95;
/// Below this radius the captured sun's color snaps to black.
const VANISH_RADIUS: f32 = 0.1;
/// Radius floor; fading must never produce degenerate geometry.
const MIN_RADIUS: f32 = 1e-3;

/// Sun-fall phase. Capture is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunState {
    Falling,
    Captured,
}

/// Per-frame driver of the sun-capture animation.
///
/// While falling, the sun advances a fixed distance along -z each frame.
/// Crossing the capture distance shrinks and fades it exactly once; from
/// then on the controller is inert and the scene keeps its last appearance.
pub struct AnimationController {
    state: SunState,
    black_hole: usize,
    sun: usize,
    fall_speed: f32,
}

impl AnimationController {
    pub fn new(black_hole: usize, sun: usize, fall_speed: f32) -> Self {
        Self {
            state: SunState::Falling,
            black_hole,
            sun,
            fall_speed,
        }
    }

    pub fn state(&self) -> SunState {
        self.state
    }

    /// Advance the animation by one frame. Must complete before render
    /// workers start reading the scene.
    pub fn advance(&mut self, scene: &mut Scene) {
        if self.state == SunState::Captured {
            return;
        }

        let (bh_center, bh_radius) = {
            let bh = &scene.objects[self.black_hole];
            (bh.center, bh.radius)
        };
        let sun = &mut scene.objects[self.sun];
        sun.center.z -= self.fall_speed;

        let dist = (sun.center - bh_center).length();
        if dist < bh_radius + sun.radius * CAPTURE_MARGIN {
            self.state = SunState::Captured;
            sun.radius = (sun.radius * FADE_FACTOR).max(MIN_RADIUS);
            sun.material.color *= FADE_FACTOR;
            sun.material.emission *= FADE_FACTOR;
            if sun.radius < VANISH_RADIUS {
                // Color snaps to black; radius and emission keep their
                // faded values and the sun stays a tiny occluder.
                sun.material.color = Vec3::ZERO;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::objects::{Material, SphereObject};

    fn two_body_scene(sun_z: f32, sun_radius: f32) -> Scene {
        Scene {
            objects: vec![
                SphereObject::new(
                    Vec3::ZERO,
                    2.5,
                    Material::new(Vec3::new(0.02, 0.02, 0.05), 0.0, 0.0),
                ),
                SphereObject::new(
                    Vec3::new(0.0, 0.0, sun_z),
                    sun_radius,
                    Material::new(Vec3::new(1.2, 1.1, 0.3), 0.2, 2.5),
                ),
            ],
            light_pos: Vec3::new(5.0, 5.0, 5.0),
        }
    }

    #[test]
    fn test_falling_moves_sun_each_frame() {
        let mut scene = two_body_scene(50.0, 1.5);
        let mut controller = AnimationController::new(0, 1, 0.08);
        controller.advance(&mut scene);
        controller.advance(&mut scene);
        assert_eq!(controller.state(), SunState::Falling);
        assert!((scene.objects[1].center.z - 49.84).abs() < 1e-4);
    }

    #[test]
    fn test_capture_shrinks_and_fades_exactly_once() {
        // Threshold is 2.5 + 0.7 * 1.5 = 3.55; one step of 1.0 crosses it.
        let mut scene = two_body_scene(4.0, 1.5);
        let mut controller = AnimationController::new(0, 1, 1.0);
        controller.advance(&mut scene);
        assert_eq!(controller.state(), SunState::Captured);

        let sun = &scene.objects[1];
        assert!((sun.radius - 1.5 * 0.95).abs() < 1e-5);
        assert!((sun.material.emission - 2.5 * 0.95).abs() < 1e-5);
        assert!((sun.material.color - Vec3::new(1.2, 1.1, 0.3) * 0.95).length() < 1e-5);

        // Captured is terminal: no further movement, no further fading.
        let frozen_z = scene.objects[1].center.z;
        let frozen_radius = scene.objects[1].radius;
        for _ in 0..10 {
            controller.advance(&mut scene);
        }
        assert_eq!(scene.objects[1].center.z, frozen_z);
        assert_eq!(scene.objects[1].radius, frozen_radius);
        assert!((scene.objects[1].material.emission - 2.5 * 0.95).abs() < 1e-5);
    }

    #[test]
    fn test_tiny_sun_goes_dark_but_stays() {
        // 0.09 * 0.95 is below the vanish radius: color snaps to black
        // while radius and emission keep their faded values.
        let mut scene = two_body_scene(2.0, 0.09);
        let mut controller = AnimationController::new(0, 1, 0.5);
        controller.advance(&mut scene);
        assert_eq!(controller.state(), SunState::Captured);

        let sun = &scene.objects[1];
        assert_eq!(sun.material.color, Vec3::ZERO);
        assert!(sun.radius > 0.0);
        assert!(sun.material.emission > 0.0);
    }

    #[test]
    fn test_radius_never_collapses_to_zero() {
        let mut scene = two_body_scene(1.0, 1e-4);
        let mut controller = AnimationController::new(0, 1, 0.5);
        controller.advance(&mut scene);
        assert_eq!(controller.state(), SunState::Captured);
        assert!(scene.objects[1].radius >= 1e-3);
    }
}
