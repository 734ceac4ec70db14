use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use platformer_controller::engine::game_loop::FixedTimestep;
use platformer_controller::engine::input::{Action, InputManager};
use platformer_controller::engine::physics::{body::presets, BodyProxy, PhysicsWorld};
use platformer_controller::game::player::{
    ControllerConfig, FlagAnimator, MotionState, PlayerMotionController,
};

/// Player capsule size in world units
const PLAYER_WIDTH: f32 = 1.0;
const PLAYER_HEIGHT: f32 = 2.0;

/// Floor, two side walls and the player standing above the floor
fn build_level(world: &Rc<RefCell<PhysicsWorld>>) -> BodyProxy {
    let mut w = world.borrow_mut();

    let floor = w.add_rigid_body(presets::static_body(0.0, -0.5));
    w.add_collider(presets::ground_collider(40.0, 1.0), floor);

    for x in [-20.5, 20.5] {
        let wall = w.add_rigid_body(presets::static_body(x, 10.0));
        w.add_collider(presets::wall_collider(1.0, 20.0), wall);
    }

    let body = w.add_rigid_body(presets::player_body(0.0, PLAYER_HEIGHT));
    let collider = w.add_collider(presets::player_collider(PLAYER_WIDTH, PLAYER_HEIGHT), body);
    BodyProxy::new(Rc::clone(world), body, collider)
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting platformer controller demo...");

    let world = Rc::new(RefCell::new(PhysicsWorld::new()));
    let body = build_level(&world);

    // Set PLAYER_CREEP_ATTACK to use the clip-timed creeping attack
    let config = if std::env::var_os("PLAYER_CREEP_ATTACK").is_some() {
        ControllerConfig::creep_attack()
    } else {
        ControllerConfig::locked_attack()
    };

    let mut controller = PlayerMotionController::builder(config)
        .physics(body)
        .animator(FlagAnimator::with_standard_clips())
        .build()?;

    let mut input = InputManager::default();
    let mut timestep = FixedTimestep::default();
    let mut last_frame = Instant::now();
    let mut last_state = *controller.state();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Platformer Controller")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created; A/D to move, Space to jump, left click to attack, P to pause");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => match input.process_keyboard_event(&event) {
                Some(Action::Menu) => {
                    info!("Menu pressed, shutting down...");
                    elwt.exit();
                }
                Some(Action::Pause) => timestep.toggle_pause(),
                _ => {}
            },
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                input.process_mouse_button(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::AboutToWait => {
                let now = Instant::now();
                let frame_time = now.duration_since(last_frame);
                last_frame = now;

                let dt = timestep.dt();
                for _ in 0..timestep.advance(frame_time) {
                    controller.update(input.player(), dt);
                    world.borrow_mut().step();
                    controller.animator_mut().update(dt);
                    // Edges are consumed by the first tick of the frame
                    input.end_frame();
                }

                log_state_change(&last_state, controller.state());
                last_state = *controller.state();

                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Log when anything the player can see changes (not the attack timer)
fn log_state_change(before: &MotionState, after: &MotionState) {
    let visible = |s: &MotionState| (s.facing, s.is_running, s.is_jumping, s.is_attacking());
    if visible(before) != visible(after) {
        info!(
            "facing={:?} running={} jumping={} attacking={}",
            after.facing,
            after.is_running,
            after.is_jumping,
            after.is_attacking()
        );
    }
}
