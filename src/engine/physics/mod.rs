// Physics system using rapier2d
//
// The player controller treats physics as a host service; this module is
// that host for the demo binary and for integration tests.

pub mod body;
mod collision;
mod proxy;
mod world;

pub use body::{BodyBuilder, ColliderBuilder2D, ColliderHandle, RigidBodyHandle};
pub use collision::{mask_to_group, CollisionGroups};
pub use proxy::BodyProxy;
pub use world::PhysicsWorld;
