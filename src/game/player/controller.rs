// Player motion controller
//
// Drives one player body from per-tick input: horizontal movement, jumping
// off the ground, and a melee attack whose window is timed by the controller
// itself. The animator is kept in sync through boolean flags.

use log::{debug, info, trace, warn};

use crate::core::math::{near_zero, sanitize_axis, sanitize_dt, REST_THRESHOLD};

use super::collaborators::{AnimFlag, AnimatorProxy, InputSampler, PhysicsProxy, TickInput};
use super::config::{AttackDuration, AttackMovement, ControllerConfig};
use super::error::ControllerError;
use super::state::{ActionState, Facing, MotionState};

/// Builds a controller from explicitly supplied collaborators
#[derive(Debug)]
pub struct ControllerBuilder<P, A> {
    config: ControllerConfig,
    physics: Option<P>,
    animator: Option<A>,
}

impl<P: PhysicsProxy, A: AnimatorProxy> ControllerBuilder<P, A> {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            physics: None,
            animator: None,
        }
    }

    pub fn physics(mut self, physics: P) -> Self {
        self.physics = Some(physics);
        self
    }

    pub fn animator(mut self, animator: A) -> Self {
        self.animator = Some(animator);
        self
    }

    /// Validate the config and spawn the controller.
    ///
    /// All animator flags start cleared.
    pub fn build(self) -> Result<PlayerMotionController<P, A>, ControllerError> {
        self.config.validate()?;
        let physics = self.physics.ok_or(ControllerError::MissingPhysics)?;
        let animator = self.animator.ok_or(ControllerError::MissingAnimator)?;

        let mut controller = PlayerMotionController {
            config: self.config,
            state: MotionState::new(),
            physics,
            animator,
        };
        controller.emit_all_cleared();
        controller.animator.set_facing(controller.state.facing);

        info!(
            "Player controller ready (move_speed={}, jump_force={}, attack={:?})",
            controller.config.move_speed,
            controller.config.jump_force,
            controller.config.attack_movement
        );

        Ok(controller)
    }
}

/// Per-entity platformer controller
#[derive(Debug)]
pub struct PlayerMotionController<P, A> {
    config: ControllerConfig,
    state: MotionState,
    physics: P,
    animator: A,
}

impl<P: PhysicsProxy, A: AnimatorProxy> PlayerMotionController<P, A> {
    pub fn builder(config: ControllerConfig) -> ControllerBuilder<P, A> {
        ControllerBuilder::new(config)
    }

    /// Sample input, query the ground, and step
    pub fn update<S: InputSampler + ?Sized>(&mut self, sampler: &S, dt: f32) {
        let input = TickInput::sample(sampler);
        let grounded = self.physics.is_touching_layers(self.config.ground_mask);
        self.step(input, grounded, dt);
    }

    /// Advance the controller by one tick
    pub fn step(&mut self, input: TickInput, ground_contact: bool, dt: f32) {
        let dt = sanitize_dt(dt);
        let horizontal = sanitize_axis(input.horizontal);

        self.advance_attack(dt);
        self.apply_movement(horizontal);

        if input.jump_pressed {
            self.try_jump(ground_contact);
        }

        if input.attack_pressed {
            self.try_attack();
        }

        self.sync_animation(ground_contact);

        trace!(
            "step dt={dt:.4} h={horizontal} grounded={ground_contact} state={:?}",
            self.state
        );
    }

    fn advance_attack(&mut self, dt: f32) {
        if self.state.action.advance(dt) {
            debug!("Attack finished");
            self.animator.set_flag(AnimFlag::Attacking, false);
        }
    }

    fn apply_movement(&mut self, horizontal: f32) {
        if self.state.is_attacking() {
            if let AttackMovement::Creep { speed } = self.config.attack_movement {
                self.physics
                    .set_velocity_x(self.state.facing.sign() * speed);
            }
            return;
        }

        self.physics
            .set_velocity_x(horizontal * self.config.move_speed);

        if let Some(facing) = Facing::from_axis(horizontal) {
            if facing != self.state.facing {
                debug!("Facing {:?}", facing);
                self.state.facing = facing;
                self.animator.set_facing(facing);
            }
        }
    }

    fn try_jump(&mut self, grounded: bool) {
        if !grounded || self.state.is_jumping {
            return;
        }

        self.physics.set_velocity_y(self.config.jump_force);
        self.state.is_jumping = true;
        self.animator.set_flag(AnimFlag::Jumping, true);
        debug!("Jump (vy={})", self.config.jump_force);
    }

    fn try_attack(&mut self) {
        if self.state.is_attacking() {
            return;
        }

        let duration = self.resolve_attack_duration();
        self.state.action.begin_attack(duration);
        self.animator.set_flag(AnimFlag::Attacking, true);
        debug!("Attack started ({duration:.3}s)");
    }

    /// Length of the attack that is about to start
    fn resolve_attack_duration(&self) -> f32 {
        match &self.config.attack_duration {
            AttackDuration::Fixed(secs) => *secs,
            AttackDuration::FromClip { state, fallback } => {
                match self.animator.clip_length(state) {
                    Some(length) if length.is_finite() && length > 0.0 => length,
                    other => {
                        warn!(
                            "No usable length for clip '{state}' ({other:?}), using {fallback}s"
                        );
                        *fallback
                    }
                }
            }
        }
    }

    fn sync_animation(&mut self, grounded: bool) {
        let velocity = self.physics.velocity();

        let airborne_block = self.config.running_excludes_jump && self.state.is_jumping;
        let running =
            velocity.x.abs() > REST_THRESHOLD && !self.state.is_attacking() && !airborne_block;
        self.state.is_running = running;
        self.animator.set_flag(AnimFlag::Running, running);

        // Landing is inferred; nothing else clears the jump
        if grounded && near_zero(velocity.y, REST_THRESHOLD) {
            if self.state.is_jumping {
                debug!("Landed");
            }
            self.state.is_jumping = false;
            self.animator.set_flag(AnimFlag::Jumping, false);
        }
    }

    fn emit_all_cleared(&mut self) {
        for flag in AnimFlag::ALL {
            self.animator.set_flag(flag, false);
        }
    }

    /// Close an open attack window now. Returns true if one was open.
    pub fn cancel_attack(&mut self) -> bool {
        if self.state.action.cancel() {
            debug!("Attack cancelled");
            self.animator.set_flag(AnimFlag::Attacking, false);
            true
        } else {
            false
        }
    }

    /// Return to spawn state, keeping the facing direction
    pub fn reset(&mut self) {
        self.state = MotionState {
            facing: self.state.facing,
            ..MotionState::new()
        };
        self.emit_all_cleared();
        debug!("Player controller reset");
    }

    /// Tear down the controller and hand back its collaborators
    pub fn into_parts(mut self) -> (P, A) {
        self.cancel_attack();
        (self.physics, self.animator)
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn action(&self) -> ActionState {
        self.state.action
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn is_jumping(&self) -> bool {
        self.state.is_jumping
    }

    pub fn is_attacking(&self) -> bool {
        self.state.is_attacking()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Seconds left in the current attack (0 when not attacking)
    pub fn attack_remaining(&self) -> f32 {
        self.state.action.remaining()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// For host-side playback updates; flags should only be set by the controller
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}
