// Input handling system
//
// Turns keyboard and mouse events into actions for the local player and
// exposes them to the player controller as an `InputSampler`.
//
// - `action`: game actions and default bindings
// - `config`: rebindable source -> action mapping
// - `player`: held keys and per-frame press edges
// - `manager`: winit event routing
//
// ## Usage Example
//
// ```rust,ignore
// let mut input = InputManager::default();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Each fixed tick
// controller.update(input.player(), dt);
// input.end_frame();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::PlayerInput;
