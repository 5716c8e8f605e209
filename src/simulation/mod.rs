//! Scene state and per-frame animation.
//!
//! This module owns the sphere scene, the material and object definitions,
//! and the controller that advances the sun-capture animation each frame
//! before rendering fans out.

pub mod animation;
pub mod objects;
pub mod scene;

// Re-export the types the main loop wires together
pub use animation::AnimationController;
pub use scene::Scene;

/// Frame counting for once-per-second FPS reporting.
#[derive(Debug, Clone)]
pub struct TimeState {
    pub frame_count: u64,
    pub last_fps_instant: std::time::Instant,
}

impl Default for TimeState {
    fn default() -> Self {
        Self {
            frame_count: 0,
            last_fps_instant: std::time::Instant::now(),
        }
    }
}

impl TimeState {
    pub fn update(&mut self) {
        self.frame_count += 1;
    }

    pub fn fps_sample(&mut self) -> Option<f32> {
        let now = std::time::Instant::now();
        let elapsed = now.duration_since(self.last_fps_instant).as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.last_fps_instant = now;
            Some(fps)
        } else {
            None
        }
    }
}
