use glam::Vec2;
use hecs::World;

use crate::{Ball, Body, Config, Events, Paddle, PaddleIntent, Params, Time, Wall};

/// Apply the paddle acceleration/deceleration control law and integrate
///
/// A nonzero intent accelerates along its direction; no intent applies a
/// braking force that snaps to zero below a stop threshold. Speed is clamped
/// to `max_speed * speed_scale` before integration, and the paddle is kept
/// inside its vertical bounds with `vel.y` zeroed on contact.
pub fn move_paddles(world: &mut World, time: &Time) {
    for (_entity, (body, paddle, intent)) in
        world.query_mut::<(&mut Body, &mut Paddle, &PaddleIntent)>()
    {
        if intent.dir.length_squared() > 0.0 {
            let force = intent.dir.normalize() * paddle.acceleration * body.mass;
            body.apply_force(force, time.dt);
            paddle.is_moving = true;
        } else {
            let speed = body.vel.length();
            if speed > 0.0 {
                let braking = paddle.deceleration * time.dt;
                if speed <= braking || speed < Params::PADDLE_STOP_THRESHOLD {
                    body.vel = Vec2::ZERO;
                } else {
                    body.vel -= body.vel / speed * braking;
                }
            }
            paddle.is_moving = false;
        }

        let speed_cap = paddle.max_speed * intent.speed_scale;
        let speed = body.vel.length();
        if speed > speed_cap {
            body.vel = body.vel / speed * speed_cap;
        }

        body.integrate(time.dt);

        let clamped = body.pos.y.clamp(paddle.min_y, paddle.max_y - body.size.y);
        if clamped != body.pos.y {
            body.pos.y = clamped;
            body.vel.y = 0.0;
        }
    }
}

/// Advance the ball: Magnus force, friction decay, integration, wall bounce
pub fn move_ball(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    // Static wall colliders, snapshot up front
    let walls: Vec<(Body, Wall)> = world
        .query::<(&Body, &Wall)>()
        .iter()
        .map(|(_e, (body, wall))| (*body, *wall))
        .collect();

    for (_entity, (body, ball)) in world.query_mut::<(&mut Body, &mut Ball)>() {
        let dt = time.dt;

        // Magnus force: perpendicular to velocity, proportional to spin.
        // Skipped below the spin threshold to avoid numerical noise.
        let speed = body.vel.length();
        if body.angular_vel.abs() > config.magnus_min_spin && speed > 0.0 {
            let perp = Vec2::new(-body.vel.y, body.vel.x) / speed;
            let force = perp * body.angular_vel * speed * config.magnus_strength;
            body.apply_force(force, dt);
        }

        // Exponential air and angular friction
        body.vel *= config.air_friction.powf(dt);
        body.angular_vel *= config.angular_friction.powf(dt);

        // Visual rotation accumulates with spin, wrapped into (-2π, 2π)
        ball.rotation = (ball.rotation + body.angular_vel * dt) % std::f32::consts::TAU;

        body.integrate(dt);

        // Bounce off any penetrated wall: invert vertical velocity, flip and
        // damp spin, and clamp the ball back to the wall's inner face. The
        // half-open collider catches the ball at any penetration depth.
        for (wall_body, wall) in &walls {
            if wall.collides(wall_body, &body.aabb()) {
                body.vel.y = -body.vel.y;
                body.angular_vel = -body.angular_vel * config.wall_spin_reduction;

                let face = wall.inner_face_y(wall_body);
                if wall.push_y > 0.0 {
                    body.pos.y = face;
                } else {
                    body.pos.y = face - body.size.y;
                }

                events.ball_hit_wall = true;
                break;
            }
        }
    }
}
