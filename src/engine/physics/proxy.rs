// Player controller adapter for a rapier2d body

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use rapier2d::prelude::{nalgebra, vector};

use super::body::{ColliderHandle, RigidBodyHandle};
use super::world::PhysicsWorld;
use crate::game::player::{LayerMask, PhysicsProxy};

/// One body in a shared physics world, exposed as a `PhysicsProxy`
///
/// The host keeps stepping the world; the proxy only borrows it for the
/// duration of each call. A body that has been removed from the world reads
/// as motionless and touching nothing, and writes to it are dropped.
#[derive(Clone)]
pub struct BodyProxy {
    world: Rc<RefCell<PhysicsWorld>>,
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

impl BodyProxy {
    pub fn new(
        world: Rc<RefCell<PhysicsWorld>>,
        body: RigidBodyHandle,
        collider: ColliderHandle,
    ) -> Self {
        Self {
            world,
            body,
            collider,
        }
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn collider(&self) -> ColliderHandle {
        self.collider
    }

    /// Current world position of the body
    pub fn position(&self) -> Option<Vec2> {
        let world = self.world.borrow();
        world.get_rigid_body(self.body).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    fn update_velocity(&mut self, f: impl FnOnce(&mut Vec2)) {
        let mut world = self.world.borrow_mut();
        if let Some(body) = world.get_rigid_body_mut(self.body) {
            let linvel = body.linvel();
            let mut velocity = Vec2::new(linvel.x, linvel.y);
            f(&mut velocity);
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }
}

impl std::fmt::Debug for BodyProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyProxy")
            .field("body", &self.body)
            .field("collider", &self.collider)
            .finish_non_exhaustive()
    }
}

impl PhysicsProxy for BodyProxy {
    fn velocity(&self) -> Vec2 {
        let world = self.world.borrow();
        world
            .get_rigid_body(self.body)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity_x(&mut self, x: f32) {
        self.update_velocity(|velocity| velocity.x = x);
    }

    fn set_velocity_y(&mut self, y: f32) {
        self.update_velocity(|velocity| velocity.y = y);
    }

    fn is_touching_layers(&self, mask: LayerMask) -> bool {
        self.world.borrow().is_touching_layers(self.collider, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;
    use crate::engine::physics::CollisionGroups;
    use crate::game::player::{
        ControllerConfig, FlagAnimator, PlayerMotionController, TickInput,
    };
    use approx::assert_relative_eq;

    fn world_with_player(y: f32) -> (Rc<RefCell<PhysicsWorld>>, BodyProxy) {
        let world = Rc::new(RefCell::new(PhysicsWorld::new()));
        let proxy = {
            let mut w = world.borrow_mut();
            let floor = w.add_rigid_body(presets::static_body(0.0, -0.5));
            w.add_collider(presets::ground_collider(40.0, 1.0), floor);

            let body = w.add_rigid_body(presets::player_body(0.0, y));
            let collider = w.add_collider(presets::player_collider(1.0, 2.0), body);
            BodyProxy::new(Rc::clone(&world), body, collider)
        };
        (world, proxy)
    }

    #[test]
    fn test_velocity_round_trip() {
        let (_world, mut proxy) = world_with_player(10.0);
        proxy.set_velocity_x(3.0);
        proxy.set_velocity_y(-2.0);

        assert_eq!(proxy.velocity(), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_axis_writes_are_independent() {
        let (_world, mut proxy) = world_with_player(10.0);
        proxy.set_velocity_y(7.0);
        proxy.set_velocity_x(1.0);
        assert_eq!(proxy.velocity().y, 7.0);
    }

    #[test]
    fn test_removed_body_is_inert() {
        let (world, mut proxy) = world_with_player(10.0);
        world.borrow_mut().remove_rigid_body(proxy.body());

        proxy.set_velocity_x(5.0);
        assert_eq!(proxy.velocity(), Vec2::ZERO);
        assert!(proxy.position().is_none());
        assert!(!proxy.is_touching_layers(CollisionGroups::Ground.into()));
    }

    #[test]
    fn test_ground_contact_after_settling() {
        let (world, proxy) = world_with_player(1.5);
        assert!(!proxy.is_touching_layers(CollisionGroups::Ground.into()));

        for _ in 0..120 {
            world.borrow_mut().step();
        }
        assert!(proxy.is_touching_layers(CollisionGroups::Ground.into()));
    }

    #[test]
    fn test_controller_drives_rapier_body() {
        let (world, proxy) = world_with_player(1.5);
        for _ in 0..120 {
            world.borrow_mut().step();
        }

        let mut controller = PlayerMotionController::builder(ControllerConfig::default())
            .physics(proxy)
            .animator(FlagAnimator::with_standard_clips())
            .build()
            .unwrap();

        let grounded = controller
            .physics()
            .is_touching_layers(controller.config().ground_mask);
        assert!(grounded);

        controller.step(TickInput::new(1.0, true, false), grounded, 1.0 / 60.0);
        let velocity = controller.physics().velocity();
        assert_relative_eq!(velocity.x, controller.config().move_speed);
        assert_relative_eq!(velocity.y, controller.config().jump_force);
        assert!(controller.is_jumping());

        // Leaves the ground after a few physics steps
        let start_y = controller.physics().position().unwrap().y;
        for _ in 0..10 {
            world.borrow_mut().step();
        }
        assert!(controller.physics().position().unwrap().y > start_y);
    }
}
