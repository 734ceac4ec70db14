// Input manager - turns winit events into player actions

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Routes window input events through the bindings into the player's state
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit.
    /// Returns the action if this event newly pressed one.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> Option<Action> {
        // Only physical keys are bound
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return None;
        };
        self.handle(InputSource::key(key_code), event.state, event.repeat)
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<Action> {
        self.handle(InputSource::mouse(button), state, false)
    }

    fn handle(&mut self, source: InputSource, state: ElementState, repeat: bool) -> Option<Action> {
        let action = self.config.get_action(source)?;
        match state {
            ElementState::Pressed if !repeat => {
                let newly = !self.player.is_pressed(action);
                self.player.press(action);
                newly.then_some(action)
            }
            ElementState::Pressed => None,
            ElementState::Released => {
                self.player.release(action);
                None
            }
        }
    }

    /// Start a new input frame.
    /// Call after a simulation tick has consumed the current edges.
    pub fn end_frame(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Forget held keys, e.g. when focus is lost and releases won't arrive
    pub fn reset(&mut self) {
        self.player.reset();
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
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
    use crate::game::player::InputSampler;
    use winit::keyboard::KeyCode;

    fn key(manager: &mut InputManager, code: KeyCode, state: ElementState) -> Option<Action> {
        manager.handle(InputSource::key(code), state, false)
    }

    #[test]
    fn test_bound_key_drives_player() {
        let mut manager = InputManager::default();
        assert_eq!(
            key(&mut manager, KeyCode::KeyD, ElementState::Pressed),
            Some(Action::MoveRight)
        );
        assert_eq!(manager.player().horizontal_axis(), 1.0);

        key(&mut manager, KeyCode::KeyD, ElementState::Released);
        assert_eq!(manager.player().horizontal_axis(), 0.0);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut manager = InputManager::default();
        assert_eq!(key(&mut manager, KeyCode::KeyQ, ElementState::Pressed), None);
        assert_eq!(manager.player().horizontal_axis(), 0.0);
    }

    #[test]
    fn test_key_repeat_is_not_an_edge() {
        let mut manager = InputManager::default();
        key(&mut manager, KeyCode::Space, ElementState::Pressed);
        manager.end_frame();

        let repeated = manager.handle(InputSource::key(KeyCode::Space), ElementState::Pressed, true);
        assert_eq!(repeated, None);
        assert!(!manager.player().jump_pressed());
        assert!(manager.player().is_pressed(Action::Jump));
    }

    #[test]
    fn test_mouse_attack() {
        let mut manager = InputManager::default();
        let action = manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(action, Some(Action::Attack));
        assert!(manager.player().attack_pressed());

        manager.end_frame();
        assert!(!manager.player().attack_pressed());
    }

    #[test]
    fn test_meta_actions_reported() {
        let mut manager = InputManager::default();
        assert_eq!(
            key(&mut manager, KeyCode::KeyP, ElementState::Pressed),
            Some(Action::Pause)
        );
        // Still held: pressing again reports nothing
        assert_eq!(key(&mut manager, KeyCode::KeyP, ElementState::Pressed), None);
    }

    #[test]
    fn test_rebinding() {
        let mut manager = InputManager::default();
        manager
            .config_mut()
            .bind(InputSource::key(KeyCode::KeyJ), Action::Attack);

        key(&mut manager, KeyCode::KeyJ, ElementState::Pressed);
        assert!(manager.player().attack_pressed());
    }

    #[test]
    fn test_reset() {
        let mut manager = InputManager::default();
        key(&mut manager, KeyCode::KeyA, ElementState::Pressed);
        manager.reset();
        assert_eq!(manager.player().horizontal_axis(), 0.0);
    }
}
