// Input manager: key events in, action state out

use super::action::{Action, InputSource};
use super::config::InputConfig;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Tracks which host actions are held and which changed this frame
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,

    /// Actions currently held
    pressed: HashSet<Action>,

    /// Actions pressed since the last `update`
    just_pressed: HashSet<Action>,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                ElementState::Pressed if !event.repeat => self.press_source(InputSource::key(key_code)),
                ElementState::Pressed => {}
                ElementState::Released => self.release_source(InputSource::key(key_code)),
            }
        }
    }

    fn press_source(&mut self, source: InputSource) {
        if let Some(action) = self.config.get_action(source) {
            self.press(action);
        }
    }

    fn release_source(&mut self, source: InputSource) {
        if let Some(action) = self.config.get_action(source) {
            self.release(action);
        }
    }

    /// Register an action press, as if its key went down
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Clear per-frame state. Call once per frame after handling input.
    pub fn update(&mut self) {
        self.just_pressed.clear();
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Actions pressed since the last update
    pub fn pressed_this_frame(&self) -> impl Iterator<Item = Action> + '_ {
        self.just_pressed.iter().copied()
    }

    /// Horizontal and vertical walking input, each in -1..=1 (y grows downwards)
    pub fn direction(&self) -> (i32, i32) {
        let axis = |neg, pos| i32::from(self.is_pressed(pos)) - i32::from(self.is_pressed(neg));
        (
            axis(Action::MoveLeft, Action::MoveRight),
            axis(Action::MoveUp, Action::MoveDown),
        )
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_update() {
        let mut manager = InputManager::default();
        manager.press(Action::Throw(1));

        assert!(manager.is_pressed(Action::Throw(1)));
        assert!(manager.just_pressed(Action::Throw(1)));

        manager.update();
        assert!(manager.is_pressed(Action::Throw(1)));
        assert!(!manager.just_pressed(Action::Throw(1)));
    }

    #[test]
    fn test_repeated_press_not_just_pressed() {
        let mut manager = InputManager::default();
        manager.press(Action::MoveLeft);
        manager.update();
        manager.press(Action::MoveLeft);

        assert!(!manager.just_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_release() {
        let mut manager = InputManager::default();
        manager.press(Action::SwapThrower);
        manager.update();
        manager.release(Action::SwapThrower);

        assert!(!manager.is_pressed(Action::SwapThrower));

        // Pressing again counts as a fresh press
        manager.press(Action::SwapThrower);
        assert!(manager.just_pressed(Action::SwapThrower));
    }

    #[test]
    fn test_direction() {
        let mut manager = InputManager::default();
        assert_eq!(manager.direction(), (0, 0));

        manager.press(Action::MoveRight);
        manager.press(Action::MoveUp);
        assert_eq!(manager.direction(), (1, -1));

        manager.press(Action::MoveLeft);
        assert_eq!(manager.direction(), (0, -1));
    }

    #[test]
    fn test_pressed_this_frame() {
        let mut manager = InputManager::default();
        manager.press(Action::Throw(0));
        manager.press(Action::CycleColor);

        let mut actions: Vec<Action> = manager.pressed_this_frame().collect();
        actions.sort_by_key(|a| format!("{:?}", a));
        assert_eq!(actions, vec![Action::CycleColor, Action::Throw(0)]);
    }
}
