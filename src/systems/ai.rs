use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{Arena, Ball, Body, BotBrain, GameRng, Paddle, PaddleIntent, Params, Side, Time};

/// Drive bot paddles: predict the ball's arrival and write movement intents
///
/// The bot reacts only after its reaction timer elapses, predicts the
/// intercept by linear extrapolation with difficulty-scaled error, and folds
/// the prediction back across the wall boundaries analytically instead of
/// simulating the bounces.
pub fn update_bots(
    world: &mut World,
    time: &Time,
    arena: &Arena,
    rng: &mut GameRng,
) {
    // Read-only snapshot of the ball; bots never mutate it
    let ball_data = {
        let mut query = world.query::<(&Body, &Ball)>();
        query.iter().next().map(|(_e, (body, _ball))| (body.pos, body.vel))
    };
    let (ball_pos, ball_vel) = match ball_data {
        Some(data) => data,
        None => return,
    };

    let (min_y, max_y) = arena.play_bounds_y();
    let screen_center_y = arena.height / 2.0;

    for (_entity, (body, paddle, brain, intent)) in
        world.query_mut::<(&Body, &Paddle, &mut BotBrain, &mut PaddleIntent)>()
    {
        // Reaction lag: hold the previous intent until the timer elapses
        brain.reaction_timer += time.dt;
        if brain.reaction_timer < brain.profile.reaction_time {
            continue;
        }

        let approaching = match paddle.side {
            Side::Left => ball_vel.x < 0.0,
            Side::Right => ball_vel.x > 0.0,
        };

        if approaching {
            let paddle_center_x = body.center().x;
            let time_to_arrival = if ball_vel.x != 0.0 {
                (ball_pos.x - paddle_center_x).abs() / ball_vel.x.abs()
            } else {
                0.0
            };

            let mut predicted_y = ball_pos.y + ball_vel.y * time_to_arrival;

            // Difficulty-scaled prediction error; perfect accuracy draws nothing
            if brain.profile.prediction_accuracy < 1.0 {
                let error_range =
                    (1.0 - brain.profile.prediction_accuracy) * Params::AI_ERROR_RANGE;
                predicted_y += rng.0.gen_range(-error_range..=error_range);
            }

            // Fold across the wall boundaries until in bounds; this accounts
            // for any number of wall bounces analytically
            while predicted_y < min_y || predicted_y > max_y {
                if predicted_y < min_y {
                    predicted_y = min_y + (min_y - predicted_y);
                } else {
                    predicted_y = max_y - (predicted_y - max_y);
                }
            }

            brain.target_y = predicted_y;
        } else {
            // Ball receding: drift back toward the screen center
            let current_center_y = body.center().y;
            brain.target_y =
                current_center_y + (screen_center_y - current_center_y) * brain.profile.center_bias;
        }

        // Turn the target into a direction with a deadzone against jitter,
        // ramping intensity with distance
        let y_diff = brain.target_y - body.center().y;
        let mut dir = Vec2::ZERO;
        if y_diff.abs() > Params::AI_DEADZONE {
            let intensity = (y_diff.abs() / Params::AI_INTENSITY_WINDOW).min(1.0);
            dir.y = y_diff.signum() * intensity;
        }

        intent.dir = dir;
        intent.speed_scale = if dir == Vec2::ZERO {
            1.0
        } else {
            brain.profile.speed_fraction
        };

        // Periodic resample of reaction behavior
        if brain.reaction_timer > brain.profile.reaction_time * 2.0 {
            brain.reaction_timer = 0.0;
        }
    }
}
