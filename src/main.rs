//! Cone Melt entry point
//!
//! Headless driver: runs an autopilot session until the cone melts (or a tick
//! limit is hit) and prints the final frame as JSON.
//!
//! Usage: `cone-melt [tuning.json] [--ticks N] [--seed S]`

use std::path::PathBuf;

use clap::Parser;

use cone_melt::Tuning;
use cone_melt::consts::REFERENCE_DT;
use cone_melt::sim::{GameEvent, GameState, InputState, autopilot, tick};

/// Default tick limit (five minutes at 60 Hz)
const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 5;

/// Run an autopilot session and print the final frame as JSON
#[derive(Debug, Parser)]
#[command(name = "cone-melt", version, about)]
struct Args {
    /// Tuning file (JSON); missing keys use defaults
    tuning: Option<PathBuf>,
    /// Stop after this many ticks
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    ticks: u64,
    /// RNG seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Cone Melt (headless) starting...");

    let args = Args::parse();
    let tuning = args
        .tuning
        .as_deref()
        .map(Tuning::load)
        .unwrap_or_default();
    let seed = args.seed.unwrap_or_else(time_seed);

    let mut state = GameState::new(tuning, seed);
    let mut input = InputState::default();
    let mut eaten = 0u32;
    let mut impacts = 0u32;

    for _ in 0..args.ticks {
        input.set_stick(autopilot::steer(&state));
        let frame = input.snapshot(REFERENCE_DT);

        for event in tick(&mut state, &frame) {
            match event {
                GameEvent::SprinkleEaten { .. } => eaten += 1,
                GameEvent::SunImpact { .. } => impacts += 1,
                GameEvent::GameOver { score, ticks } => {
                    log::info!("Game over at tick {} with score {}", ticks, score);
                }
            }
        }

        if state.is_over() {
            break;
        }
    }

    log::info!(
        "Run finished: seed {}, {} ticks, {} sprinkles, {} sun hits, score {}",
        seed,
        state.time_ticks,
        eaten,
        impacts,
        state.score
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final frame: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["cone-melt"]).unwrap();
        assert_eq!(args.tuning, None);
        assert_eq!(args.ticks, DEFAULT_MAX_TICKS);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_args_all_options() {
        let args =
            Args::try_parse_from(["cone-melt", "fast.json", "--ticks", "500", "--seed", "7"])
                .unwrap();
        assert_eq!(args.tuning, Some(PathBuf::from("fast.json")));
        assert_eq!(args.ticks, 500);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_args_reject_bad_values() {
        assert!(Args::try_parse_from(["cone-melt", "--ticks"]).is_err());
        assert!(Args::try_parse_from(["cone-melt", "--ticks", "many"]).is_err());
        assert!(Args::try_parse_from(["cone-melt", "--seed", "-1"]).is_err());
        assert!(Args::try_parse_from(["cone-melt", "--speed", "3"]).is_err());
    }
}
