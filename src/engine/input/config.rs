// Input configuration and remapping system

use super::action::{default_player_bindings, global_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to game actions
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bindings(bindings: impl IntoIterator<Item = (InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Player and global default bindings
    pub fn with_defaults() -> Self {
        Self::from_bindings(default_player_bindings().into_iter().chain(global_bindings()))
    }

    /// Bind an input source to an action, replacing whatever it was bound to
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.unbind_source(source);
        self.bindings.insert(source, action);
        self.action_to_sources.entry(action).or_default().push(source);
    }

    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(sources) = self.action_to_sources.remove(&action) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::with_defaults();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyJ);
        config.bind(source, Action::Attack);

        assert_eq!(config.get_action(source), Some(Action::Attack));
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);

        config.bind(source, Action::MoveLeft);
        config.bind(source, Action::MoveRight);

        assert_eq!(config.get_action(source), Some(Action::MoveRight));
        assert!(!config.has_binding(Action::MoveLeft));
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::with_defaults();
        config.unbind_action(Action::MoveLeft);

        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyA)), None);
        assert_eq!(config.get_action(InputSource::key(KeyCode::ArrowLeft)), None);
        assert!(config.has_binding(Action::MoveRight));
    }

    #[test]
    fn test_defaults() {
        let config = InputConfig::with_defaults();
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::Space)),
            Some(Action::Jump)
        );
        assert_eq!(
            config.get_action(InputSource::mouse(MouseButton::Left)),
            Some(Action::Attack)
        );
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::Escape)),
            Some(Action::Menu)
        );
        assert_eq!(config.get_sources(Action::MoveLeft).len(), 2);
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new();
        config.bind(InputSource::key(KeyCode::KeyZ), Action::Attack);
        config.reset_to_defaults();

        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyZ)), None);
        assert!(config.has_binding(Action::Attack));
    }
}
