//! Immediate-mode drawing of the course, the contestants, and the HUD.

use glide_app::app_loop::AppMode;
use glide_app::{format_seed, format_snapshot_hash};
use glide_core::{Game, OBSTACLE_WIDTH};
use macroquad::prelude::*;

const HUD_HEIGHT: f32 = 28.0;
const AGENT_COLORS: [Color; 4] = [GOLD, SKYBLUE, LIME, PINK];

pub fn draw_frame(game: &Game, mode: AppMode) {
    clear_background(BLACK);

    let bounds = game.bounds();
    let cell_w = screen_width() / bounds.width as f32;
    let cell_h = (screen_height() - HUD_HEIGHT) / bounds.height as f32;
    let origin_x = game.current_x();

    for obstacle in game.obstacles() {
        let left = (obstacle.position() - origin_x) as f32 * cell_w;
        let width = OBSTACLE_WIDTH as f32 * cell_w;
        let gap_top = HUD_HEIGHT + obstacle.gap_top() as f32 * cell_h;
        let gap_bottom = gap_top + obstacle.gap_height() as f32 * cell_h;

        draw_rectangle(left, HUD_HEIGHT, width, gap_top - HUD_HEIGHT, DARKGREEN);
        draw_rectangle(left, gap_bottom, width, screen_height() - gap_bottom, DARKGREEN);
    }

    for contestant in game.contestants() {
        let agent = contestant.agent();
        let color = AGENT_COLORS[contestant.id().0 % AGENT_COLORS.len()];
        let color = if agent.is_alive() { color } else { GRAY };
        let cy = HUD_HEIGHT + (agent.y() as f32 + 0.5) * cell_h;
        draw_circle(cell_w * 0.5, cy, cell_h * 0.45, color);
    }

    draw_text(&format!("score {}", game.score()), 8.0, 20.0, 24.0, WHITE);
    draw_text(&format!("seed {}", format_seed(game.seed())), 160.0, 20.0, 24.0, GRAY);

    match mode {
        AppMode::Paused => {
            draw_text("PAUSED (P to resume)", 8.0, HUD_HEIGHT + 24.0, 24.0, YELLOW);
        }
        AppMode::Finished => {
            let hash = format_snapshot_hash(game.snapshot_hash());
            draw_text("RUN OVER (R to restart)", 8.0, HUD_HEIGHT + 24.0, 24.0, RED);
            draw_text(&hash, 8.0, HUD_HEIGHT + 48.0, 20.0, GRAY);
        }
        AppMode::Running => {}
    }
}
