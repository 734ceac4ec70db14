// Capabilities the controller consumes from its host
//
// The controller never reaches into an engine directly. Input, physics and
// animation are handed to it as implementations of these traits.

use glam::Vec2;

use super::state::Facing;

/// Bit set of collision layers used for ground queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayerMask(u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if any layer of `other` is in this mask
    pub const fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: LayerMask) -> Self {
        Self(self.0 | other.0)
    }
}

/// Animator boolean parameters written by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimFlag {
    Running,
    Jumping,
    Attacking,
}

impl AnimFlag {
    pub const ALL: [AnimFlag; 3] = [AnimFlag::Running, AnimFlag::Jumping, AnimFlag::Attacking];

    /// Parameter name as an animator graph would spell it
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::Running => "isRunning",
            Self::Jumping => "isJumping",
            Self::Attacking => "isAttacking",
        }
    }
}

/// Input for one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// Raw horizontal axis (-1 to 1)
    pub horizontal: f32,
    /// Jump went down this tick
    pub jump_pressed: bool,
    /// Attack went down this tick
    pub attack_pressed: bool,
}

impl TickInput {
    pub fn new(horizontal: f32, jump_pressed: bool, attack_pressed: bool) -> Self {
        Self {
            horizontal,
            jump_pressed,
            attack_pressed,
        }
    }

    /// Horizontal input only
    pub fn moving(horizontal: f32) -> Self {
        Self::new(horizontal, false, false)
    }

    pub fn jump() -> Self {
        Self::new(0.0, true, false)
    }

    pub fn attack() -> Self {
        Self::new(0.0, false, true)
    }

    /// Read the current tick's input from a sampler
    pub fn sample<S: InputSampler + ?Sized>(sampler: &S) -> Self {
        Self::new(
            sampler.horizontal_axis(),
            sampler.jump_pressed(),
            sampler.attack_pressed(),
        )
    }
}

/// Source of per-tick player input
pub trait InputSampler {
    /// Raw horizontal axis in [-1, 1]
    fn horizontal_axis(&self) -> f32;

    /// Rising edge of the jump action
    fn jump_pressed(&self) -> bool;

    /// Rising edge of the attack action
    fn attack_pressed(&self) -> bool;
}

/// The body the controller drives
pub trait PhysicsProxy {
    fn velocity(&self) -> Vec2;

    fn set_velocity_x(&mut self, x: f32);

    fn set_velocity_y(&mut self, y: f32);

    /// Check if the body currently touches any collider on the given layers
    fn is_touching_layers(&self, mask: LayerMask) -> bool;
}

/// The animation state machine the controller feeds
pub trait AnimatorProxy {
    fn set_flag(&mut self, flag: AnimFlag, value: bool);

    /// Length in seconds of the named clip, if the animator knows it
    fn clip_length(&self, _state: &str) -> Option<f32> {
        None
    }

    /// Flip the visual to match the facing direction
    fn set_facing(&mut self, _facing: Facing) {}
}
