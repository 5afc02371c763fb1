//! Run-seed selection: an explicit `--seed` wins, otherwise a mixed
//! entropy seed is generated per launch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    Cli(u64),
    Generated(u64),
}

impl SeedSource {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static LAUNCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Nanosecond clock, process id and a launch counter, stirred through a
/// splitmix finalizer. Not cryptographic, just distinct per launch.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = LAUNCH_COUNTER.fetch_add(1, Ordering::Relaxed);

    mix_seed((now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17) ^ counter)
}

/// Pick the run seed from the raw argument list. Accepts `--seed N` and
/// `--seed=N`, at most once; unrelated arguments are ignored.
pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedSource, String> {
    let mut selected = None;
    let mut arguments = args.iter().skip(1);

    while let Some(argument) = arguments.next() {
        let raw = if argument == "--seed" {
            match arguments.next() {
                Some(value) => value.as_str(),
                None => return Err("missing value for --seed".to_string()),
            }
        } else if let Some(value) = argument.strip_prefix("--seed=") {
            value
        } else {
            continue;
        };

        if selected.is_some() {
            return Err("seed provided more than once".to_string());
        }
        let seed =
            raw.parse::<u64>().map_err(|_| format!("seed value '{raw}' must be a number"))?;
        selected = Some(seed);
    }

    Ok(match selected {
        Some(seed) => SeedSource::Cli(seed),
        None => SeedSource::Generated(generated_seed),
    })
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
