use self::scene::Scene;
use car_physics::{CameraPose, InputState, ParamsError};
use std::time::Instant;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    error::EventLoopError,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

mod keymap;
mod scene;

const WINDOW_TITLE: &str = "Toy Car";

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    EventLoop(#[from] EventLoopError),
    #[error("invalid motion parameters: {0}")]
    Params(#[from] ParamsError),
}

fn main() -> Result<(), DemoError> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(Scene::new()?);

    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    window: Option<Window>,
    scene: Scene,
    input: InputState,
    last_frame: Option<Instant>,
}

impl App {
    fn new(scene: Scene) -> Self {
        log::info!(
            "Scene ready: car at {}, {} obstacles",
            scene.car().position,
            scene.obstacles().len()
        );
        for obstacle in scene.obstacles().as_slice() {
            log::debug!("Obstacle at {}", obstacle.center());
        }
        Self {
            window: None,
            scene,
            input: InputState::default(),
            last_frame: None,
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let delta = self
            .last_frame
            .replace(now)
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());

        let pose = self.scene.advance(&self.input, delta);
        if let Some(window) = self.window.as_ref() {
            window.set_title(&self.status_line(&pose));
        }
    }

    fn status_line(&self, pose: &CameraPose) -> String {
        let car = self.scene.car();
        let camera = pose.position;
        format!(
            "{WINDOW_TITLE} | car ({:.1}, {:.1}) heading {:.2} speed {:.1} | camera ({:.1}, {:.1})",
            car.position.x,
            car.position.z,
            car.heading,
            car.velocity.length(),
            camera.x,
            camera.z,
        )
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(Window::default_attributes().with_title(WINDOW_TITLE)) {
            Ok(window) => self.window = Some(window),
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Focused(false) => {
                // Key releases are not delivered while unfocused.
                self.input.clear();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let is_pressed = event.state == ElementState::Pressed;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if code == KeyCode::Escape {
                    event_loop.exit();
                    return;
                }
                match keymap::command_for_key(code) {
                    Some(command) if is_pressed => self.input.press(command),
                    Some(command) => self.input.release(command),
                    None => log::trace!("Ignoring key {:?}", code),
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}
