use car_physics::Command;
use winit::keyboard::KeyCode;

/// Arrow keys and WASD drive the same commands; every other key is ignored.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Command::Forward),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Command::Backward),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Command::TurnLeft),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Command::TurnRight),
        _ => None,
    }
}
