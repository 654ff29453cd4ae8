use glam::Vec2;
use hecs::World;

use crate::{Ball, Body, Config, Events, Paddle, SpinSurface};

/// Resolve ball-paddle collisions: bounce angle, spin transfer, unstick
///
/// The bounce angle depends on where the ball struck the paddle, bounded by
/// `max_bounce_angle`; the horizontal direction always reverses. Paddles
/// carrying a `SpinSurface` additionally transfer spin to the ball.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Snapshot paddles first so the ball can be mutated freely below
    let paddles: Vec<(Body, Paddle, Option<SpinSurface>)> = {
        let mut query = world.query::<(&Body, &Paddle)>();
        query
            .iter()
            .map(|(entity, (body, paddle))| {
                let surface = world.get::<&SpinSurface>(entity).ok().map(|s| *s);
                (*body, *paddle, surface)
            })
            .collect()
    };

    for (_entity, (body, ball)) in world.query_mut::<(&mut Body, &mut Ball)>() {
        for (paddle_body, paddle, surface) in &paddles {
            if !body.aabb().overlaps(&paddle_body.aabb()) {
                continue;
            }

            // Contact offset from paddle center, in [-1, 1]
            let half_height = paddle_body.size.y / 2.0;
            let relative_intersect =
                ((body.center().y - paddle_body.center().y) / half_height).clamp(-1.0, 1.0);
            let bounce_angle = relative_intersect * config.max_bounce_angle;

            // The paddle always sends the ball back the way it came
            let direction: f32 = if body.vel.x < 0.0 { 1.0 } else { -1.0 };
            body.vel = Vec2::new(
                direction * ball.speed * bounce_angle.cos(),
                ball.speed * bounce_angle.sin(),
            );

            if let Some(surface) = surface {
                let spin = surface.impact_spin(
                    paddle_body,
                    paddle,
                    body.center().y,
                    config.max_ball_spin,
                );
                body.angular_vel = (body.angular_vel + spin * config.spin_transfer_efficiency)
                    .clamp(-config.max_ball_spin, config.max_ball_spin);
            }

            // Unstick: reposition just outside the paddle so the next frame
            // cannot re-detect the same overlap
            if direction > 0.0 {
                body.pos.x = paddle_body.pos.x + paddle_body.size.x + 1.0;
            } else {
                body.pos.x = paddle_body.pos.x - body.size.x - 1.0;
            }

            events.ball_hit_paddle = true;
            break;
        }
    }
}
