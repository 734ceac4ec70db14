// 2D platformer player controller
//
// - `core`: numeric helpers
// - `engine`: tick scheduling, input, and the rapier2d host physics
// - `game`: the player motion controller itself

pub mod core;
pub mod engine;
pub mod game;
