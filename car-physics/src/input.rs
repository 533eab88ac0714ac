/// The four directional commands a driver can hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Forward,
        Command::Backward,
        Command::TurnLeft,
        Command::TurnRight,
    ];
}

/// Which commands are currently held.
///
/// Updated by press/release events as they arrive and read once per frame
/// through [`InputState::snapshot`].
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl InputState {
    pub fn press(&mut self, command: Command) {
        *self.flag_mut(command) = true;
    }

    pub fn release(&mut self, command: Command) {
        *self.flag_mut(command) = false;
    }

    pub fn is_held(&self, command: Command) -> bool {
        match command {
            Command::Forward => self.forward,
            Command::Backward => self.backward,
            Command::TurnLeft => self.turn_left,
            Command::TurnRight => self.turn_right,
        }
    }

    /// Copy of the current flags, detached from later presses and releases.
    #[inline]
    pub fn snapshot(&self) -> InputState {
        *self
    }

    /// Releases every command.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn flag_mut(&mut self, command: Command) -> &mut bool {
        match command {
            Command::Forward => &mut self.forward,
            Command::Backward => &mut self.backward,
            Command::TurnLeft => &mut self.turn_left,
            Command::TurnRight => &mut self.turn_right,
        }
    }
}
