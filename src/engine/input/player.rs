// Per-player input state management

use super::action::Action;
use crate::game::player::InputSampler;
use std::collections::HashSet;

/// Input state for the local player
///
/// Presses are latched between frames: an action pressed and released before
/// the next `update` still reports `just_pressed` for that frame.
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Actions that went down this frame
    just_pressed: HashSet<Action>,

    /// Actions that went up this frame
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action went down this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press; repeats while held are ignored
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Start a new frame
    /// Call this once per frame after the frame's input has been consumed
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Drop all held and pending input (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Raw horizontal axis: -1, 0 or 1. Holding both directions cancels out.
    pub fn horizontal(&self) -> f32 {
        let mut horizontal = 0.0;
        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }
        horizontal
    }
}

impl InputSampler for PlayerInput {
    fn horizontal_axis(&self) -> f32 {
        self.horizontal()
    }

    fn jump_pressed(&self) -> bool {
        self.just_pressed(Action::Jump)
    }

    fn attack_pressed(&self) -> bool {
        self.just_pressed(Action::Attack)
    }
}
