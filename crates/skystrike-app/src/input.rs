//! Keyboard and window-size polling.
//!
//! Each frame the raw key state is folded into the logical held-key set
//! (WASD and arrows both map to the four directions) and only changes
//! are emitted as commands. Unmapped keys are simply never looked at.

use macroquad::prelude::*;

use skystrike_core::commands::PlayerCommand;
use skystrike_core::enums::{GamePhase, MoveDirection};

const DIRECTIONS: [(MoveDirection, KeyCode, KeyCode); 4] = [
    (MoveDirection::Up, KeyCode::W, KeyCode::Up),
    (MoveDirection::Down, KeyCode::S, KeyCode::Down),
    (MoveDirection::Left, KeyCode::A, KeyCode::Left),
    (MoveDirection::Right, KeyCode::D, KeyCode::Right),
];

pub struct InputTracker {
    held: [bool; 4],
    descend_held: bool,
    last_width: f32,
    last_height: f32,
}

impl InputTracker {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            held: [false; 4],
            descend_held: false,
            last_width: width,
            last_height: height,
        }
    }

    /// Poll the keyboard and window, returning the commands for this frame.
    pub fn poll(&mut self, phase: GamePhase) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();

        for (i, (direction, key_a, key_b)) in DIRECTIONS.iter().enumerate() {
            let down = is_key_down(*key_a) || is_key_down(*key_b);
            if down != self.held[i] {
                self.held[i] = down;
                commands.push(if down {
                    PlayerCommand::MoveKeyDown {
                        direction: *direction,
                    }
                } else {
                    PlayerCommand::MoveKeyUp {
                        direction: *direction,
                    }
                });
            }
        }

        let descend = is_key_down(KeyCode::Space);
        if descend != self.descend_held {
            self.descend_held = descend;
            commands.push(if descend {
                PlayerCommand::DescendPressed
            } else {
                PlayerCommand::DescendReleased
            });
        }

        if is_key_pressed(KeyCode::Enter) {
            commands.push(match phase {
                GamePhase::Ready => PlayerCommand::Start,
                GamePhase::GameOver => PlayerCommand::Restart,
                GamePhase::Active | GamePhase::Paused => PlayerCommand::Restart,
            });
        }
        if is_key_pressed(KeyCode::P) {
            commands.push(match phase {
                GamePhase::Paused => PlayerCommand::Resume,
                _ => PlayerCommand::Pause,
            });
        }

        let (width, height) = (screen_width(), screen_height());
        if width != self.last_width || height != self.last_height {
            self.last_width = width;
            self.last_height = height;
            commands.push(PlayerCommand::Resize {
                width: width as f64,
                height: height as f64,
            });
        }

        commands
    }
}
