//! Commands sent into the game client.

/// Chat commands used by the built-in behaviors.
pub mod constants {
    pub const ATTACK_TARGET: &str = "/attack <t>";
    pub const ATTACK_OFF: &str = "/attack off";
    pub const REST_ON: &str = "/heal on";
    pub const REST_OFF: &str = "/heal off";
}

/// Movement keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete, fire-and-forget game command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Raw chat/command line, e.g. `/attack <t>`.
    Send(String),
    /// Press and release a key.
    KeyPress(Key),
    /// Hold a key until the matching [`Command::KeyUp`].
    KeyDown(Key),
    KeyUp(Key),
    /// Make the game client target a unit by id.
    SetTarget(u32),
}

impl Command {
    pub fn send(text: impl Into<String>) -> Self {
        Self::Send(text.into())
    }
}

/// Accepts commands for the game client. No acknowledgement is returned.
pub trait CommandSink: Send {
    fn send(&mut self, command: Command);
}
