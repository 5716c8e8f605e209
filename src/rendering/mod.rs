//! Frame production and presentation.
//!
//! The ray tracer produces a finished RGB8 buffer on the CPU each frame;
//! the display side uploads it to a texture and blits it to the window
//! surface. Only the display side touches the GPU.

pub mod camera;
pub mod display;
pub mod ray_tracer;
pub mod shaders;

// Re-export commonly used items
pub use camera::Camera;
pub use display::Display;
pub use ray_tracer::{trace, FrameRenderer, Ray};

/// Presentation error types
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter")]
    NoAdapter,
    #[error("device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

pub type RenderResult<T> = Result<T, RenderError>;
