// Player controller
//
// Everything needed to drive a platformer player from per-tick input:
// - `collaborators`: the input/physics/animator capabilities the controller needs
// - `config`: movement and attack tuning
// - `state`: facing, jump flag and the attack state machine
// - `controller`: the per-tick rules
// - `animation`: a flag-driven sprite animator usable as the animator collaborator

pub mod animation;
pub mod collaborators;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationFlags, FlagAnimator};
pub use collaborators::{AnimFlag, AnimatorProxy, InputSampler, LayerMask, PhysicsProxy, TickInput};
pub use config::{AttackDuration, AttackMovement, ControllerConfig};
pub use controller::{ControllerBuilder, PlayerMotionController};
pub use error::ControllerError;
pub use state::{ActionState, Facing, MotionState};
