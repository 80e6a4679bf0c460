//! sortie-headless: run the combat simulation without a frontend.
//!
//! Usage:
//!   sortie-headless --ticks 5400 --seed 7
//!   sortie-headless --config wave.json --difficulty 1.5

use std::process;

use glam::Vec2;
use serde::Serialize;

use sortie_core::commands::CombatCommand;
use sortie_core::config::SimConfig;
use sortie_core::state::{CombatSnapshot, CombatStats};
use sortie_sim::SimulationEngine;

const DT: f32 = 1.0 / 30.0;
const DEFAULT_TICKS: u64 = 30 * 120;
/// Progress is logged every this many ticks.
const REPORT_EVERY: u64 = 30 * 10;

#[derive(Debug, Default)]
struct Options {
    config: Option<String>,
    ticks: Option<u64>,
    seed: Option<u64>,
    difficulty: Option<f32>,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    ticks: u64,
    elapsed_secs: f64,
    player_alive: bool,
    player_hp: f32,
    weapon_level: u8,
    stats: CombatStats,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }
    let options = match parse_args(&args) {
        Ok(o) => o,
        Err(msg) => {
            log::error!("{msg}");
            print_usage();
            process::exit(1);
        }
    };

    let mut config = match &options.config {
        Some(path) => match SimConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("failed to load config {path}: {e}");
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    if let Some(difficulty) = options.difficulty {
        config.difficulty = difficulty;
    }
    if let Err(e) = config.validate() {
        log::error!("{e}");
        process::exit(1);
    }

    let ticks = options.ticks.unwrap_or(DEFAULT_TICKS);
    let seed = config.seed;
    log::info!(
        "running {ticks} ticks (seed {seed}, difficulty {:.2})",
        config.difficulty
    );

    let mut engine = SimulationEngine::new(config);
    let mut ran = 0;
    for tick in 1..=ticks {
        let snapshot = engine.snapshot();
        engine.queue_command(autopilot(&snapshot));
        engine.advance(DT);
        engine.drain_events();
        ran = tick;

        if tick % REPORT_EVERY == 0 {
            let stats = engine.stats();
            log::info!(
                "t={:.0}s hp={:.0} score={} defeated={} escaped={} projectiles={}",
                engine.time().elapsed_secs,
                engine.player().hp,
                stats.score,
                stats.adversaries_defeated,
                stats.adversaries_escaped,
                engine.projectile_count()
            );
        }
        if !engine.player().body.is_live() {
            log::info!("player down after {tick} ticks");
            break;
        }
    }

    let report = Report {
        seed,
        ticks: ran,
        elapsed_secs: engine.time().elapsed_secs,
        player_alive: engine.player().body.is_live(),
        player_hp: engine.player().hp,
        weapon_level: engine.player().weapon_level,
        stats: *engine.stats(),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("failed to encode report: {e}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "sortie-headless: run the SORTIE combat simulation without a frontend\n\
         \n\
           --config <path>      JSON simulation config (optional)\n\
           --ticks <N>          Ticks to run at 30 Hz (default: {DEFAULT_TICKS})\n\
           --seed <N>           Override the config seed\n\
           --difficulty <X>     Override the difficulty multiplier\n\
         \n\
         Set RUST_LOG=debug for per-entity logging.\n"
    );
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--config" => options.config = Some(value.clone()),
            "--ticks" => options.ticks = Some(parse_value(flag, value)?),
            "--seed" => options.seed = Some(parse_value(flag, value)?),
            "--difficulty" => options.difficulty = Some(parse_value(flag, value)?),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

/// Line up under the lowest adversary, or the boss when none are left, and fire.
fn autopilot(snapshot: &CombatSnapshot) -> CombatCommand {
    let player = &snapshot.player;
    let target_x = snapshot
        .adversaries
        .iter()
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .map(|a| a.x)
        .or_else(|| snapshot.boss.as_ref().map(|b| b.x));

    let mut movement = Vec2::ZERO;
    if let Some(x) = target_x {
        let dx = x - player.x;
        if dx.abs() > 8.0 {
            movement.x = dx.signum();
        }
    }
    CombatCommand::SetInput {
        movement,
        fire: player.live,
    }
}
