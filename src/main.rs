//! Headless driver: plays the game with a simple exit-seeking policy and
//! logs what a real host would render or play.

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use grid_crawler::{GameConfig, GameEngine, Presentation, SoundClip, TurnPhase, TurnResult};

#[derive(Debug, Parser)]
#[command(name = "grid-crawler", about = "Run the grid crawler core without a window")]
struct Args {
    /// JSON file with game settings; defaults are used for missing fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for level generation
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop after this many accepted controlled moves
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = 16)]
    tick_ms: u32,
}

/// Presentation that writes every request to the log.
struct LogPresentation;

impl Presentation for LogPresentation {
    fn play_random_one_of(&mut self, a: SoundClip, b: SoundClip) {
        info!("sound: {a:?} | {b:?}");
    }

    fn play_single(&mut self, clip: SoundClip) {
        info!("sound: {clip:?}");
    }

    fn show_overlay(&mut self, text: &str) {
        info!("overlay: {text}");
    }

    fn hide_overlay(&mut self) {
        info!("overlay hidden");
    }

    fn resource_depleted(&mut self, level: u32) {
        info!("out of food on day {level}");
    }
}

const STEPS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let dt = args.tick_ms.max(1) as f32 / 1000.0;
    let mut engine = GameEngine::new(config, args.seed, LogPresentation)?;
    let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(1));

    let mut turns = 0;
    // Enough ticks for every turn's pacing plus level transitions.
    let tick_limit = u64::from(args.max_turns).saturating_mul(1000).max(1000);
    let mut ticks = 0u64;

    while turns < args.max_turns && ticks < tick_limit {
        match engine.phase() {
            TurnPhase::GameOver => break,
            TurnPhase::ControlledTurn => {
                if play_turn(&mut engine, &mut rng)? {
                    turns += 1;
                }
            }
            TurnPhase::Setup | TurnPhase::AutonomousTurn => {}
        }
        engine.tick(dt)?;
        ticks += 1;
    }

    if ticks >= tick_limit {
        warn!("tick limit reached");
    }
    info!(
        "finished on day {} after {turns} moves with {} food ({:?})",
        engine.level(),
        engine.food(),
        engine.phase()
    );
    Ok(())
}

/// Head for the exit in the top-right corner, falling back to any open
/// direction. Returns whether a move was accepted.
fn play_turn<P: Presentation>(
    engine: &mut GameEngine<P>,
    rng: &mut StdRng,
) -> grid_crawler::Result<bool> {
    let Some(pos) = engine.player_position() else {
        return Ok(false);
    };
    let grid = engine.grid();
    let preferred = if pos.x < grid.columns - 1 { (1, 0) } else { (0, 1) };

    let mut fallback = STEPS;
    fallback.shuffle(rng);

    for (dx, dy) in std::iter::once(preferred).chain(fallback) {
        match engine.attempt_player_move(dx, dy)? {
            TurnResult::Accepted(_) => return Ok(true),
            TurnResult::Blocked(_) => continue,
            TurnResult::NotReady => return Ok(false),
        }
    }
    Ok(false)
}
