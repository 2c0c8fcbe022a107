// Keyboard input for the host window
//
// - `action`: host actions and default key bindings
// - `config`: key to action mapping with remapping support
// - `manager`: turns winit key events into pressed / just-pressed state

pub mod action;
pub mod config;
pub mod manager;

pub use action::Action;
pub use manager::InputManager;
