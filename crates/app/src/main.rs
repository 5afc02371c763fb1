mod frame_input;
mod render;

use std::path::PathBuf;

use glide_app::app_loop::{AppMode, AppState};
use glide_app::seed::{generate_runtime_seed, resolve_seed_from_args};
use glide_app::{format_seed, journal_file};
use glide_core::{CourseBounds, Game, InputJournal, RetainedPilot, TapHandle, TapPilot};
use macroquad::prelude::{get_time, next_frame};

const BOUNDS: CourseBounds = CourseBounds { height: 30, width: 90 };

struct Session {
    game: Game,
    tap_handle: TapHandle,
    journal: InputJournal,
    app: AppState,
    journal_saved: bool,
}

impl Session {
    fn start(seed: u64, now: f64) -> Self {
        let mut game = Game::new(seed, BOUNDS);
        let (tap_pilot, tap_handle) = TapPilot::with_handle();
        game.add_contestant(Box::new(tap_pilot));
        game.add_contestant(Box::new(RetainedPilot::new()));
        Self {
            game,
            tap_handle,
            journal: InputJournal::new(seed, BOUNDS),
            app: AppState::new(now),
            journal_saved: false,
        }
    }

    fn journal_path(&self) -> PathBuf {
        PathBuf::from(format!("glide-{}.journal.json", format_seed(self.game.seed())))
    }
}

#[macroquad::main("Glide")]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("glide: {message}");
            std::process::exit(2);
        }
    };

    let mut session = Session::start(seed_choice.value(), get_time());

    loop {
        let input = frame_input::capture_frame_input();
        if input.quit {
            break;
        }
        if input.restart && session.app.mode == AppMode::Finished {
            session = Session::start(generate_runtime_seed(), get_time());
        }

        session.app.tick(
            &mut session.game,
            &session.tap_handle,
            &mut session.journal,
            input,
            get_time(),
        );

        if session.app.mode == AppMode::Finished && !session.journal_saved {
            let path = session.journal_path();
            if let Err(error) = journal_file::write_atomic(&session.journal, &path) {
                eprintln!("glide: could not save journal to {}: {error}", path.display());
            }
            session.journal_saved = true;
        }

        render::draw_frame(&session.game, session.app.mode);
        next_frame().await;
    }
}
