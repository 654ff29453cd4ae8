use glam::Vec2;
use hecs::World;

use crate::{Arena, Ball, Body, Config, Events, GameRng, Score, Side};

/// Award a point when the ball fully leaves the arena, then re-serve
///
/// The match-winning point does not re-serve: the ball is held in place with
/// its velocity cleared, and a finished match stops scoring entirely.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if score.has_winner(config.win_score).is_some() {
        return;
    }

    let serve_point = arena.center();

    for (_entity, (body, ball)) in world.query_mut::<(&mut Body, &mut Ball)>() {
        if let Some(exited) = ball.off_screen_side(body, arena.width) {
            let scorer = exited.opposite();
            score.increment(scorer);
            match scorer {
                Side::Left => events.left_scored = true,
                Side::Right => events.right_scored = true,
            }

            if score.has_winner(config.win_score).is_some() {
                body.vel = Vec2::ZERO;
            } else {
                ball.reset(body, serve_point, rng);
            }
        }
    }
}
