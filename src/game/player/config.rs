// Player controller tuning
//
// Two attack behaviours exist in the field: one locks movement for the whole
// swing, the other lets the player creep forward and takes the swing length
// from the attack clip. Both are plain configuration here.

use crate::engine::physics::CollisionGroups;

use super::collaborators::LayerMask;
use super::error::ControllerError;

/// Name of the animator state whose clip times a clip-driven attack
pub const ATTACK_CLIP: &str = "attack";

/// Fixed swing length in seconds
pub const DEFAULT_ATTACK_DURATION: f32 = 0.5;

/// Horizontal speed while attacking with `AttackMovement::Creep`
pub const DEFAULT_CREEP_SPEED: f32 = 1.0;

/// How long an attack window stays open
#[derive(Debug, Clone, PartialEq)]
pub enum AttackDuration {
    /// Always this many seconds
    Fixed(f32),
    /// Length of the named animator clip, read when the attack begins
    FromClip { state: String, fallback: f32 },
}

/// What happens to horizontal movement during an attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackMovement {
    /// Input is ignored and horizontal velocity is left to physics
    Locked,
    /// Move at a fixed speed in the facing direction
    Creep { speed: f32 },
}

/// Immutable tuning for one controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Horizontal speed at full axis (units/second)
    pub move_speed: f32,
    /// Vertical velocity applied on jump
    pub jump_force: f32,
    /// Layers that count as ground
    pub ground_mask: LayerMask,
    pub attack_duration: AttackDuration,
    pub attack_movement: AttackMovement,
    /// Suppress `isRunning` while airborne from a jump
    pub running_excludes_jump: bool,
}

/// Ground layer used by both presets
pub const GROUND_MASK: LayerMask = LayerMask::new(CollisionGroups::Ground as u32);

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::locked_attack()
    }
}

impl ControllerConfig {
    /// Attacks freeze movement for a fixed half second
    pub fn locked_attack() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 10.0,
            ground_mask: GROUND_MASK,
            attack_duration: AttackDuration::Fixed(DEFAULT_ATTACK_DURATION),
            attack_movement: AttackMovement::Locked,
            running_excludes_jump: false,
        }
    }

    /// Attacks creep forward and last as long as the attack clip
    pub fn creep_attack() -> Self {
        Self {
            attack_duration: AttackDuration::FromClip {
                state: ATTACK_CLIP.to_string(),
                fallback: DEFAULT_ATTACK_DURATION,
            },
            attack_movement: AttackMovement::Creep {
                speed: DEFAULT_CREEP_SPEED,
            },
            running_excludes_jump: true,
            ..Self::locked_attack()
        }
    }

    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    pub fn with_jump_force(mut self, jump_force: f32) -> Self {
        self.jump_force = jump_force;
        self
    }

    pub fn with_ground_mask(mut self, mask: LayerMask) -> Self {
        self.ground_mask = mask;
        self
    }

    pub fn with_attack_duration(mut self, duration: AttackDuration) -> Self {
        self.attack_duration = duration;
        self
    }

    pub fn with_attack_movement(mut self, movement: AttackMovement) -> Self {
        self.attack_movement = movement;
        self
    }

    pub fn with_running_excludes_jump(mut self, excludes: bool) -> Self {
        self.running_excludes_jump = excludes;
        self
    }

    /// Reject values the controller can't act on
    pub fn validate(&self) -> Result<(), ControllerError> {
        non_negative("move_speed", self.move_speed)?;
        non_negative("jump_force", self.jump_force)?;

        if self.ground_mask.is_empty() {
            return Err(invalid("ground_mask must name at least one layer"));
        }

        match &self.attack_duration {
            AttackDuration::Fixed(secs) => positive("attack_duration", *secs)?,
            AttackDuration::FromClip { state, fallback } => {
                if state.is_empty() {
                    return Err(invalid("attack clip state name is empty"));
                }
                positive("attack_duration fallback", *fallback)?;
            }
        }

        if let AttackMovement::Creep { speed } = self.attack_movement {
            non_negative("creep speed", speed)?;
        }

        Ok(())
    }
}

fn invalid(message: &str) -> ControllerError {
    ControllerError::InvalidConfig(message.to_string())
}

fn non_negative(name: &str, value: f32) -> Result<(), ControllerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ControllerError::InvalidConfig(format!(
            "{name} must be finite and >= 0, got {value}"
        )))
    }
}

fn positive(name: &str, value: f32) -> Result<(), ControllerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ControllerError::InvalidConfig(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_locked_attack() {
        let config = ControllerConfig::default();
        assert_eq!(config, ControllerConfig::locked_attack());
        assert_eq!(config.attack_movement, AttackMovement::Locked);
        assert_eq!(
            config.attack_duration,
            AttackDuration::Fixed(DEFAULT_ATTACK_DURATION)
        );
        assert!(!config.running_excludes_jump);
    }

    #[test]
    fn test_creep_attack_preset() {
        let config = ControllerConfig::creep_attack();
        assert_eq!(
            config.attack_movement,
            AttackMovement::Creep {
                speed: DEFAULT_CREEP_SPEED
            }
        );
        assert!(matches!(
            config.attack_duration,
            AttackDuration::FromClip { ref state, .. } if state == ATTACK_CLIP
        ));
        assert!(config.running_excludes_jump);
        // Shares movement tuning with the locked preset
        assert_eq!(config.move_speed, ControllerConfig::locked_attack().move_speed);
    }

    #[test]
    fn test_presets_validate() {
        assert!(ControllerConfig::locked_attack().validate().is_ok());
        assert!(ControllerConfig::creep_attack().validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = ControllerConfig::default()
            .with_move_speed(8.0)
            .with_jump_force(12.0)
            .with_running_excludes_jump(true);

        assert_eq!(config.move_speed, 8.0);
        assert_eq!(config.jump_force, 12.0);
        assert!(config.running_excludes_jump);
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = ControllerConfig::default().with_move_speed(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ControllerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_nan_jump_force() {
        let config = ControllerConfig::default().with_jump_force(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_attack_duration() {
        let config = ControllerConfig::default().with_attack_duration(AttackDuration::Fixed(0.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_clip_name() {
        let config = ControllerConfig::default().with_attack_duration(AttackDuration::FromClip {
            state: String::new(),
            fallback: 0.5,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_ground_mask() {
        let config = ControllerConfig::default().with_ground_mask(LayerMask::NONE);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_creep() {
        let config = ControllerConfig::creep_attack()
            .with_attack_movement(AttackMovement::Creep { speed: -0.5 });
        assert!(config.validate().is_err());
    }
}
