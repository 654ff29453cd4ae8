use hecs::World;

use crate::{InputQueue, Paddle, PaddleIntent};

/// Drain queued direction vectors into the matching paddle intents
///
/// Intents persist until overwritten, so a held direction keeps accelerating
/// the paddle across micro-steps. Human inputs always run uncapped.
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue) {
    for &(side, dir) in &input_queue.inputs {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == side {
                intent.dir = dir;
                intent.speed_scale = 1.0;
            }
        }
    }

    input_queue.clear();
}
