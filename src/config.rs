use glam::Vec3;

/// Window title shown by the display.
pub const WINDOW_TITLE: &str = "Sun Capture";

/// Startup configuration, fixed for the lifetime of the run.
///
/// Passed explicitly into scene setup, the frame renderer, and the display;
/// nothing here is runtime-reconfigurable and nothing lives in process-wide
/// statics.
#[derive(Debug, Clone)]
pub struct Config {
    /// Framebuffer width in pixels.
    pub width: u32,
    /// Framebuffer height in pixels.
    pub height: u32,
    /// Distance the sun falls along -z each frame.
    pub sun_fall_speed: f32,
    /// Render worker count; `None` uses available hardware parallelism.
    pub worker_threads: Option<usize>,
    /// Position of the single fixed point light.
    pub light_pos: Vec3,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            sun_fall_speed: 0.08,
            worker_threads: None,
            light_pos: Vec3::new(5.0, 5.0, 5.0),
        }
    }
}
