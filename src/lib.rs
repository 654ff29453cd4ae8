pub mod arena;
pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run the spin-Pong simulation for one frame
///
/// Order per micro-step: inputs, bot decisions, paddle control law, ball
/// physics and wall bounces, paddle collisions, speed escalation, scoring.
/// Write access to each entity's physical state stays inside its own system.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        events.clear();

        // 1. Ingest direction inputs into paddle intents
        ingest_inputs(world, input_queue);

        // 2. Bot paddles decide their own intents
        update_bots(world, &step_time, arena, rng);

        // 3. Paddle control law and integration
        move_paddles(world, &step_time);

        // 4. Ball forces, friction, integration, wall bounces
        move_ball(world, &step_time, config, events);

        // 5. Ball vs paddle bounce and spin transfer
        check_collisions(world, config, events);

        // 6. Progressive speed escalation on any reported hit
        if events.ball_hit_wall || events.ball_hit_paddle {
            for (_entity, (body, ball)) in world.query_mut::<(&mut Body, &mut Ball)>() {
                ball.increase_speed(body, config.speed_boost);
            }
        }

        // 7. Scoring and re-serve
        check_scoring(world, arena, config, score, events, rng);
    }

    time.now += clamped_dt;
}

/// Spawn the top and bottom wall colliders
pub fn create_walls(world: &mut World, arena: &Arena) -> [hecs::Entity; 2] {
    let [top, bottom] = arena.walls();
    [
        world.spawn((
            Body::new(top.min, top.max - top.min, Params::WALL_MASS),
            Wall::new(1.0),
        )),
        world.spawn((
            Body::new(bottom.min, bottom.max - bottom.min, Params::WALL_MASS),
            Wall::new(-1.0),
        )),
    ]
}

/// Spawn a human-controlled paddle on the given side
pub fn create_paddle(
    world: &mut World,
    side: Side,
    config: &Config,
    arena: &Arena,
) -> hecs::Entity {
    let pos = Vec2::new(
        config.paddle_x(side),
        (arena.height - config.paddle_height) / 2.0,
    );
    world.spawn((
        Body::new(
            pos,
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_mass,
        ),
        Paddle::new(side, config, arena),
        PaddleIntent::new(),
        SpinSurface::new(config.paddle_friction),
    ))
}

/// Spawn a bot-controlled paddle on the given side
pub fn create_bot(
    world: &mut World,
    side: Side,
    difficulty: Difficulty,
    config: &Config,
    arena: &Arena,
) -> hecs::Entity {
    let pos = Vec2::new(
        config.paddle_x(side),
        (arena.height - config.paddle_height) / 2.0,
    );
    let mut brain = BotBrain::new(difficulty);
    brain.target_y = pos.y + config.paddle_height / 2.0;

    world.spawn((
        Body::new(
            pos,
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_mass,
        ),
        Paddle::new(side, config, arena),
        PaddleIntent::new(),
        SpinSurface::new(config.paddle_friction),
        brain,
    ))
}

/// Spawn the ball at the serve point with a random serve direction
pub fn create_ball(
    world: &mut World,
    config: &Config,
    arena: &Arena,
    rng: &mut GameRng,
) -> hecs::Entity {
    let mut body = Body::new(
        Vec2::ZERO,
        Vec2::splat(config.ball_size),
        config.ball_mass,
    );
    let mut ball = Ball::new(config);
    ball.reset(&mut body, arena.center(), rng);

    world.spawn((body, ball))
}
