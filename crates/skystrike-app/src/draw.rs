//! Scene rendering. Pure function of the snapshot: no state is kept
//! between frames, so the renderer can never drift from the sim.

use macroquad::prelude::*;

use skystrike_core::constants::{DRONE_SIZE, PROJECTILE_RADIUS, TARGET_RADIUS};
use skystrike_core::enums::GamePhase;
use skystrike_core::state::{DroneView, ExplosionView, GameSnapshot, TargetView};

const SKY: Color = Color::new(0.53, 0.81, 0.92, 1.0);
const FRAME: Color = Color::new(0.17, 0.17, 0.17, 1.0);
const ROTOR: Color = Color::new(0.33, 0.33, 0.33, 1.0);
const TARGET_BODY: Color = Color::new(0.80, 0.12, 0.12, 1.0);
const TARGET_FACE: Color = WHITE;
const BUBBLE_BG: Color = WHITE;
const BUBBLE_TEXT: Color = BLACK;
const BLAST: Color = Color::new(1.0, 0.55, 0.10, 1.0);

pub fn draw_scene(snapshot: &GameSnapshot) {
    clear_background(SKY);

    for target in &snapshot.targets {
        draw_target(target);
    }
    for projectile in &snapshot.projectiles {
        draw_circle(
            projectile.position.x as f32,
            projectile.position.y as f32,
            PROJECTILE_RADIUS as f32,
            BLACK,
        );
    }
    for explosion in &snapshot.explosions {
        draw_explosion(explosion);
    }
    if snapshot.phase != GamePhase::Ready {
        draw_drone(&snapshot.drone);
    }

    draw_text(&format!("Score: {}", snapshot.score), 16.0, 32.0, 32.0, BLACK);
    match snapshot.phase {
        GamePhase::Ready => draw_banner("SKYSTRIKE - press Enter"),
        GamePhase::Paused => draw_banner("PAUSED"),
        GamePhase::GameOver => draw_banner("DRONE DOWN - Enter to restart"),
        GamePhase::Active => {}
    }
}

/// Quadcopter seen from above: an X frame with a rotor disc on each arm.
fn draw_drone(drone: &DroneView) {
    let cx = drone.position.x as f32;
    let cy = drone.position.y as f32;
    let arm = DRONE_SIZE as f32 * 0.5 * drone.scale as f32;
    let rotor_r = arm * 0.35;

    for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
        let (tip_x, tip_y) = (cx + sx * arm, cy + sy * arm);
        draw_line(cx, cy, tip_x, tip_y, 3.0, FRAME);
        draw_circle(tip_x, tip_y, rotor_r, ROTOR);
    }
    draw_circle(cx, cy, arm * 0.25, FRAME);
}

fn draw_target(target: &TargetView) {
    let cx = target.position.x as f32;
    let cy = target.position.y as f32;
    let r = TARGET_RADIUS as f32;

    draw_circle(cx, cy, r, TARGET_BODY);
    draw_circle(cx, cy, r * 0.55, TARGET_FACE);

    let glyph = "Z";
    let size = measure_text(glyph, None, 20, 1.0);
    draw_text(
        glyph,
        cx - size.width * 0.5,
        cy + size.height * 0.5,
        20.0,
        BLACK,
    );

    if let Some(line) = &target.speech {
        draw_speech_bubble(cx, cy - r, line);
    }
}

fn draw_speech_bubble(anchor_x: f32, anchor_y: f32, line: &str) {
    let font_size = 16.0;
    let size = measure_text(line, None, font_size as u16, 1.0);
    let pad = 6.0;
    let w = size.width + pad * 2.0;
    let h = size.height + pad * 2.0;
    let x = anchor_x - w * 0.5;
    let y = anchor_y - h - 8.0;

    draw_rectangle(x, y, w, h, BUBBLE_BG);
    draw_rectangle_lines(x, y, w, h, 1.0, BLACK);
    draw_text(line, x + pad, y + pad + size.offset_y, font_size, BUBBLE_TEXT);
}

/// Blast grows and fades out over its lifetime.
fn draw_explosion(explosion: &ExplosionView) {
    let age = explosion.age_frac as f32;
    let radius = TARGET_RADIUS as f32 * (0.6 + age * 1.2);
    let mut color = BLAST;
    color.a = 1.0 - age;
    draw_circle(
        explosion.position.x as f32,
        explosion.position.y as f32,
        radius,
        color,
    );
}

fn draw_banner(text: &str) {
    let size = measure_text(text, None, 48, 1.0);
    draw_text(
        text,
        (screen_width() - size.width) * 0.5,
        screen_height() * 0.5,
        48.0,
        FRAME,
    );
}
