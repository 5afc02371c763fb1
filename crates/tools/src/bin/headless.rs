//! Batch AI runs with per-frame invariant checks. Useful for soaking the
//! engine across many seeds without a window.

use anyhow::{Result, bail};
use clap::Parser;
use glide_core::{CourseBounds, Game, OneShotPilot, RetainedPilot};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First seed of the batch
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of consecutive seeds to run
    #[arg(short, long, default_value_t = 10)]
    runs: u64,
    /// Frame cap per run
    #[arg(short, long, default_value_t = 100_000)]
    frames: u64,
    /// Lookahead depth for both engines
    #[arg(long, default_value_t = 12)]
    horizon: u32,
}

fn check_invariants(game: &Game) -> Result<()> {
    let bounds = game.bounds();
    let mut previous = None;
    for obstacle in game.obstacles() {
        if obstacle.gap_top() + obstacle.gap_height() + obstacle.gap_bottom() != bounds.height {
            bail!("gap geometry does not partition the course at x {}", obstacle.position());
        }
        if let Some(position) = previous
            && obstacle.position() <= position
        {
            bail!("obstacle queue out of order at position {}", obstacle.position());
        }
        previous = Some(obstacle.position());
    }
    for contestant in game.contestants() {
        let y = contestant.agent().y();
        if y < 0 || y >= bounds.height {
            bail!("contestant {:?} out of bounds at row {y}", contestant.id());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let bounds = CourseBounds { height: 30, width: 90 };

    println!("Running {} headless runs from seed {}...", args.runs, args.seed);
    for seed in args.seed..args.seed + args.runs {
        let mut game = Game::new(seed, bounds);
        let retained = game.add_contestant(Box::new(RetainedPilot::with_horizon(args.horizon)));
        let oneshot = game.add_contestant(Box::new(OneShotPilot::with_horizon(args.horizon)));

        let mut frames = 0;
        while !game.is_finished() && frames < args.frames {
            game.advance_frame();
            check_invariants(&game)?;
            frames += 1;
        }

        let describe = |id: glide_core::ContestantId| {
            let agent = game.contestants()[id.0].agent();
            if agent.is_alive() {
                "alive at frame cap".to_string()
            } else {
                format!("died at score {}", agent.final_score())
            }
        };
        println!(
            "seed {seed}: score {} over {frames} frames | retained {} | oneshot {}",
            game.score(),
            describe(retained),
            describe(oneshot),
        );
    }

    Ok(())
}
