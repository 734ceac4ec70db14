// Gameplay modules

pub mod player;
