// Player motion state

use crate::core::math::sign;

/// Direction the player is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing for a horizontal input, or `None` when the input is neutral
    pub fn from_axis(horizontal: f32) -> Option<Self> {
        match sign(horizontal) {
            s if s > 0.0 => Some(Self::Right),
            s if s < 0.0 => Some(Self::Left),
            _ => None,
        }
    }

    /// +1.0 for right, -1.0 for left
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Sprites are authored facing right
    pub fn is_flipped(&self) -> bool {
        matches!(self, Self::Left)
    }
}

/// What the player is doing besides moving
///
/// An attack carries its own one-shot timer. The timer is advanced by the
/// controller each tick, so an open window can always be closed early.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Attacking {
        /// Seconds since the attack began
        elapsed: f32,
        /// Window length, fixed when the attack began
        duration: f32,
    },
}

impl ActionState {
    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Attacking { .. })
    }

    /// Seconds left in the current attack window (0 when idle)
    pub fn remaining(&self) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Attacking { elapsed, duration } => (duration - elapsed).max(0.0),
        }
    }

    /// Open an attack window. Returns false if one is already open.
    pub fn begin_attack(&mut self, duration: f32) -> bool {
        if self.is_attacking() {
            return false;
        }
        *self = Self::Attacking {
            elapsed: 0.0,
            duration,
        };
        true
    }

    /// Advance the attack timer. Returns true on the tick the window closes.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Self::Attacking { elapsed, duration } = self else {
            return false;
        };

        *elapsed += dt;
        if *elapsed >= *duration {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }

    /// Close an open attack window early. Returns true if one was open.
    pub fn cancel(&mut self) -> bool {
        let was_attacking = self.is_attacking();
        *self = Self::Idle;
        was_attacking
    }
}

/// Per-entity state owned by the controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    pub facing: Facing,
    pub is_jumping: bool,
    /// Last `isRunning` value sent to the animator
    pub is_running: bool,
    pub action: ActionState,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attacking(&self) -> bool {
        self.action.is_attacking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state() {
        let state = MotionState::new();
        assert_eq!(state.facing, Facing::Right);
        assert!(!state.is_jumping);
        assert!(!state.is_running);
        assert_eq!(state.action, ActionState::Idle);
    }

    #[test]
    fn test_facing_from_axis() {
        assert_eq!(Facing::from_axis(0.3), Some(Facing::Right));
        assert_eq!(Facing::from_axis(-1.0), Some(Facing::Left));
        assert_eq!(Facing::from_axis(0.0), None);
    }

    #[test]
    fn test_facing_sign_and_flip() {
        assert_eq!(Facing::Right.sign(), 1.0);
        assert_eq!(Facing::Left.sign(), -1.0);
        assert!(Facing::Left.is_flipped());
        assert!(!Facing::Right.is_flipped());
    }

    #[test]
    fn test_begin_attack() {
        let mut action = ActionState::Idle;
        assert!(action.begin_attack(0.5));
        assert!(action.is_attacking());
        assert_relative_eq!(action.remaining(), 0.5);
    }

    #[test]
    fn test_attack_cannot_restart() {
        let mut action = ActionState::Idle;
        action.begin_attack(0.5);
        action.advance(0.25);

        assert!(!action.begin_attack(0.5));
        assert_relative_eq!(action.remaining(), 0.25);
    }

    #[test]
    fn test_attack_closes_exactly_once() {
        let mut action = ActionState::Idle;
        action.begin_attack(0.5);

        assert!(!action.advance(0.25));
        assert!(action.advance(0.25));
        assert_eq!(action, ActionState::Idle);
        assert!(!action.advance(0.25));
    }

    #[test]
    fn test_advance_while_idle() {
        let mut action = ActionState::Idle;
        assert!(!action.advance(1.0));
        assert_eq!(action.remaining(), 0.0);
    }

    #[test]
    fn test_cancel() {
        let mut action = ActionState::Idle;
        assert!(!action.cancel());

        action.begin_attack(0.5);
        assert!(action.cancel());
        assert!(!action.is_attacking());
    }
}
