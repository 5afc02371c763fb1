use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use glide_core::{InputJournal, ReplayResult, replay_to_end};

/// Re-run a recorded journal and print the terminal state.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult = replay_to_end(&journal)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {e}"))?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Final Score: {}", result.final_score);
    println!("Final Column: {}", result.final_x);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
