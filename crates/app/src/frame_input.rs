//! Keyboard input collection for one rendered frame.

use glide_app::app_loop::FrameInput;
use macroquad::prelude::{KeyCode, is_key_pressed};

pub fn capture_frame_input() -> FrameInput {
    FrameInput {
        tap: is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Up),
        toggle_pause: is_key_pressed(KeyCode::P),
        restart: is_key_pressed(KeyCode::R),
        quit: is_key_pressed(KeyCode::Escape),
    }
}
