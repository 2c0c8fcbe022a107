// Host action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Number of item slots bound to the digit row
pub const THROW_SLOTS: u8 = 5;

/// Everything the host window reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Walking (drives the first pet's animation and position)
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    /// Throw the item in the given slot (0-based)
    Throw(u8),
    /// Held: the second pet throws instead of the first
    SwapThrower,
    /// Hand the current thrower a power-up
    PowerUp,

    CycleColor,
    Pause,
    Quit,
}

/// An input source; only the keyboard for now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default bindings: arrows walk, digits throw, shift swaps the thrower
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        (InputSource::key(KeyCode::Digit1), Action::Throw(0)),
        (InputSource::key(KeyCode::Digit2), Action::Throw(1)),
        (InputSource::key(KeyCode::Digit3), Action::Throw(2)),
        (InputSource::key(KeyCode::Digit4), Action::Throw(3)),
        (InputSource::key(KeyCode::Digit5), Action::Throw(4)),
        (InputSource::key(KeyCode::ShiftLeft), Action::SwapThrower),
        (InputSource::key(KeyCode::ShiftRight), Action::SwapThrower),
        (InputSource::key(KeyCode::KeyT), Action::PowerUp),
        (InputSource::key(KeyCode::KeyC), Action::CycleColor),
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}
