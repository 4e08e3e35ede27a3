//! Speech bubble system. Purely cosmetic.
//!
//! Timers are explicit tick stamps compared against the frame clock, so
//! the chatter schedule replays deterministically from the seed.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{Chatter, Target};
use skystrike_core::constants::{
    CHATTER_DISPLAY_SECS, CHATTER_MAX_GAP_SECS, CHATTER_MIN_GAP_SECS, DT, TAUNT_LINES,
};

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, current_tick: u64) {
    let display_ticks = (CHATTER_DISPLAY_SECS / DT) as u64;

    for (_entity, (_target, chatter)) in world.query_mut::<(&Target, &mut Chatter)>() {
        if chatter.line.is_some() {
            if current_tick >= chatter.until_tick {
                chatter.line = None;
            }
        } else if current_tick >= chatter.next_line_tick {
            let line = TAUNT_LINES[rng.gen_range(0..TAUNT_LINES.len())];
            chatter.line = Some(line.to_string());
            chatter.until_tick = current_tick + display_ticks;
            let gap_secs = rng.gen_range(CHATTER_MIN_GAP_SECS..CHATTER_MAX_GAP_SECS);
            chatter.next_line_tick = chatter.until_tick + (gap_secs / DT) as u64;
        }
    }
}
