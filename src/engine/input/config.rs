// Input configuration and remapping

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys) to host actions
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a list of bindings. Later bindings for
    /// the same source win.
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// The stock key layout
    pub fn with_defaults() -> Self {
        Self::from_bindings(super::action::default_bindings())
    }

    /// Bind an input source to an action, replacing its previous binding
    pub fn bind(&mut self, source: InputSource, action: Action) {
        if let Some(previous) = self.bindings.insert(source, action) {
            log::debug!("Rebound {:?} from {:?} to {:?}", source, previous, action);
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_defaults() {
        let config = InputConfig::with_defaults();
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::Digit3)),
            Some(Action::Throw(2))
        );
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::ShiftRight)),
            Some(Action::SwapThrower)
        );
        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyZ)), None);
    }

    #[test]
    fn test_rebind_replaces() {
        let mut config = InputConfig::with_defaults();
        let key = InputSource::key(KeyCode::Digit1);
        config.bind(key, Action::Pause);

        assert_eq!(config.get_action(key), Some(Action::Pause));
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::KeyP)),
            Some(Action::Pause)
        );
    }

    #[test]
    fn test_later_binding_wins() {
        let key = InputSource::key(KeyCode::Space);
        let config = InputConfig::from_bindings(vec![(key, Action::Quit), (key, Action::Throw(4))]);
        assert_eq!(config.get_action(key), Some(Action::Throw(4)));
    }
}
