use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod config;
mod rendering;
mod simulation;

use config::Config;
use rendering::{Display, FrameRenderer};
use simulation::animation::SunState;
use simulation::scene::{BLACK_HOLE, SUN};
use simulation::{AnimationController, Scene, TimeState};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(config::WINDOW_TITLE)
        .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height))
        .build(&event_loop)?;
    let window = std::sync::Arc::new(window);

    let mut scene = Scene::sun_capture(config.light_pos);
    let mut controller = AnimationController::new(BLACK_HOLE, SUN, config.sun_fall_speed);
    let frame_renderer = FrameRenderer::new(config.width, config.height, config.worker_threads);
    let mut pixels = frame_renderer.render(&scene);
    let mut display = pollster::block_on(Display::new(&window, &config))?;
    let mut time = TimeState::default();

    log::info!(
        "rendering {}x{} across {} workers",
        config.width,
        config.height,
        frame_renderer.threads()
    );

    let win_id = window.id();
    let win_clone = window.clone();
    event_loop.run(move |event, target| match event {
        Event::WindowEvent { event, window_id } if window_id == win_id => match event {
            WindowEvent::CloseRequested => target.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => target.exit(),
            WindowEvent::Resized(size) => display.resize(size),
            WindowEvent::RedrawRequested => {
                // Mutate-then-render: the controller finishes before any
                // worker reads the scene.
                let was_falling = controller.state() == SunState::Falling;
                controller.advance(&mut scene);
                if was_falling && controller.state() == SunState::Captured {
                    log::info!("sun captured by the black hole");
                }
                frame_renderer.render_into(&scene, &mut pixels);
                if let Err(e) = display.present(&pixels) {
                    eprintln!("Render error: {e}");
                }
                time.update();
                if let Some(fps) = time.fps_sample() {
                    log::info!("FPS: {:.1}", fps);
                }
            }
            _ => {}
        },
        Event::AboutToWait => win_clone.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
