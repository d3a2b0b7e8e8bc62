//! Airywave - animated linear wave field viewer
//!
//! Renders the free surface and subsurface velocity field of a single
//! monochromatic Airy wave train, advancing simulation time by a fixed step
//! per frame.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::bail;
use clap::Parser;
use tracing::{error, info};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use airywave::cli::Args;
use airywave::params::{LoopConfig, RenderConfig};
use airywave::renderer::WaveRenderer;
use airywave::rendering::RenderSystem;
use airywave::scene::FrameGeometry;
use airywave::wave::WaveField;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    field: WaveField,
    renderer: WaveRenderer,
    frame: FrameGeometry,

    // Configuration
    render_config: RenderConfig,
    loop_config: LoopConfig,

    // Time tracking
    sim_time_s: f64,
    frame_interval: Duration,
    next_frame: Instant,

    // Backend initialization failure, surfaced after the loop exits
    fatal: Option<String>,
}

impl App {
    fn new(field: WaveField, render_config: RenderConfig, loop_config: LoopConfig) -> Self {
        let renderer = WaveRenderer::new(field.params(), &render_config);
        let frame_interval = Duration::from_secs_f64(1.0 / loop_config.fps as f64);

        Self {
            window: None,
            render_system: None,
            field,
            renderer,
            frame: FrameGeometry::default(),
            render_config,
            loop_config,
            sim_time_s: 0.0,
            frame_interval,
            next_frame: Instant::now(),
            fatal: None,
        }
    }

    /// Compose and present one frame, then advance simulation time and pace
    /// to the target frame rate.
    fn render_frame(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let Some(ref mut render_system) = self.render_system else {
            return;
        };

        // A positive duration bounds the run; 0 means unbounded.
        if self.loop_config.duration_s > 0.0 && self.sim_time_s > self.loop_config.duration_s {
            info!(
                duration_s = self.loop_config.duration_s,
                "configured duration reached"
            );
            event_loop.exit();
            return;
        }

        self.field.set_time(self.sim_time_s);
        self.renderer.compose(&self.field, &mut self.frame);

        if let Err(e) = render_system.render(&self.frame.vertices) {
            error!("render error: {:?}", e);
        }

        self.sim_time_s += self.loop_config.dt_s;

        // Frame pacing: fixed-duration wait, drift-corrected.
        let now = Instant::now();
        if let Some(remaining) = self.next_frame.checked_duration_since(now) {
            std::thread::sleep(remaining);
        }
        self.next_frame = self.next_frame.max(now) + self.frame_interval;
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Airy Waves Simulation")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fatal = Some(format!("failed to create window: {}", e));
                event_loop.exit();
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            WaveRenderer::background(),
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                self.fatal = Some(e);
                event_loop.exit();
                return;
            }
        };

        self.next_frame = Instant::now();
        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("window close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();
    let params = args.wave_parameters()?;

    info!(
        amplitude_m = params.amplitude_m,
        wavelength_m = params.wavelength_m,
        water_depth_m = params.water_depth_m,
        wavenumber = params.wavenumber,
        omega = params.omega,
        "starting Airy wave simulation"
    );

    let mut app = App::new(
        WaveField::new(params),
        args.render_config(),
        args.loop_config(),
    );

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    if let Some(reason) = app.fatal {
        bail!(reason);
    }

    info!(sim_time_s = app.sim_time_s, "simulation finished");
    Ok(())
}
