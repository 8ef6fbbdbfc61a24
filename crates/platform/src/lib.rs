//! Platform layer: windowing & event loop.
//!
//! Imports the model before any window exists, so a bad file fails fast.
//! Left-button drag orbits the camera; the model spins, so frames are
//! requested continuously.

pub mod config;

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use asset::{MeshBuffers, ObjLoader};
use corelib::orbit::OrbitController;
use renderer::GpuState;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

pub use config::ViewerConfig;

/// Import the configured model, open a window and run until it is closed.
pub fn run_viewer(config: ViewerConfig) -> Result<()> {
    let mesh = ObjLoader::new()
        .with_face_policy(config.face_policy)
        .load_path(&config.model_path)
        .with_context(|| format!("Failed to import model {}", config.model_path.display()))?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(config, mesh);
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("Event loop error: {e:?}"))?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct ViewerApp {
    config: ViewerConfig,
    mesh: MeshBuffers,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    orbit: OrbitController,
    cursor: (f64, f64),
    /// Set when something inside the event loop fails; returned by `run_viewer`.
    fatal: Option<anyhow::Error>,
}

impl ViewerApp {
    fn new(config: ViewerConfig, mesh: MeshBuffers) -> Self {
        Self {
            config,
            mesh,
            window: None,
            gpu: None,
            orbit: OrbitController::default(),
            cursor: (0.0, 0.0),
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );
        log::info!(
            "Window created: {}x{}",
            window.inner_size().width,
            window.inner_size().height
        );

        let gpu = pollster::block_on(GpuState::new(
            window.clone(),
            &self.mesh,
            &self.config.render,
        ))?;

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let camera = self.orbit.camera(gpu.aspect());
        match gpu.render(&camera) {
            Ok(()) => {}
            Err(e) if GpuState::is_surface_lost(&e) => {
                log::warn!("Surface lost/outdated, reconfiguring");
                gpu.recreate_surface();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow!("GPU out of memory"));
            }
            Err(e) => log::warn!("Frame skipped: {e:?}"),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested. Exiting event loop.");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                log::info!("Resized: {}x{}", new_size.width, new_size.height);
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.orbit.begin_drag(self.cursor.0, self.cursor.1),
                ElementState::Released => self.orbit.end_drag(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);
                if self.orbit.drag_to(position.x, position.y) {
                    log::trace!(
                        "Orbit: pitch={:.1} yaw={:.1}",
                        self.orbit.pitch_deg,
                        self.orbit.yaw_deg
                    );
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_viewer() {
        let config = ViewerConfig::default();
        assert_eq!(config.model_path, std::path::PathBuf::from("model.obj"));
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.face_policy, asset::FacePolicy::Skip);
    }

    #[test]
    fn missing_model_fails_before_any_window() {
        let config = ViewerConfig {
            model_path: "does/not/exist.obj".into(),
            ..ViewerConfig::default()
        };
        let err = run_viewer(config).unwrap_err();
        let io = err
            .downcast_ref::<asset::ObjError>()
            .expect("import error is preserved");
        assert!(io.is_io());
    }
}
