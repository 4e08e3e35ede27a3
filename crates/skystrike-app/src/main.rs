//! Windowed frontend for SKYSTRIKE.
//!
//! Thin glue only: maps keyboard state to player commands, drives the
//! headless engine one tick per display frame, and draws the snapshot.
//! All gameplay lives in skystrike-sim.

use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};
use macroquad::prelude::*;

use skystrike_core::commands::PlayerCommand;
use skystrike_core::constants::{ARENA_DEFAULT_HEIGHT, ARENA_DEFAULT_WIDTH};
use skystrike_core::events::AudioEvent;
use skystrike_sim::engine::{SimConfig, SimulationEngine};

mod draw;
mod input;

fn window_conf() -> Conf {
    Conf {
        window_title: "SKYSTRIKE".to_owned(),
        window_width: ARENA_DEFAULT_WIDTH as i32,
        window_height: ARENA_DEFAULT_HEIGHT as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: macroquad::miniquad::date::now() as u64,
        arena_width: screen_width() as f64,
        arena_height: screen_height() as f64,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::Start);

    // Optional kill cue; the game runs fine without the asset.
    let explosion_sound: Option<Sound> = load_sound("assets/explosion.ogg").await.ok();

    let mut tracker = input::InputTracker::new(screen_width(), screen_height());

    loop {
        engine.queue_commands(tracker.poll(engine.phase()));

        let snapshot = engine.tick();

        for event in &snapshot.audio_events {
            if let AudioEvent::Explosion { .. } = event {
                play_explosion(&explosion_sound);
            }
        }

        draw::draw_scene(&snapshot);
        next_frame().await;
    }
}

/// Restart the cue from time zero if it is already playing.
fn play_explosion(sound: &Option<Sound>) {
    if let Some(sound) = sound {
        stop_sound(sound);
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: 0.8,
            },
        );
    }
}
