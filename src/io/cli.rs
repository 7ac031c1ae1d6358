//! Command-line demo driver: random-walking players exploring a generated arena

use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{
    DEFAULT_INTEREST_RADIUS, DEFAULT_PIXEL_SCALE, DEFAULT_PLAYERS, DEFAULT_SEED,
    DEFAULT_SEED_RADIUS, DEFAULT_TICKS, GeneratorConfig, PLAYER_STEP, PLAYER_TURN_INTERVAL,
};
use crate::io::error::Result;
use crate::io::image::export_level_as_png;
use crate::io::progress::TickProgress;
use crate::io::ruleset::{RulePreset, load_rules};
use crate::io::visualization::render_tiles;
use crate::level::generator::LevelGenerator;
use crate::level::snapshot::LevelDiff;
use crate::spatial::tiles::Direction;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "arenagen")]
#[command(
    author,
    version,
    about = "Grow an arena level around simulated players with incremental wave function collapse"
)]
/// Command-line arguments for the arena generation demo
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of server ticks to simulate
    #[arg(short, long, default_value_t = DEFAULT_TICKS)]
    pub ticks: usize,

    /// Number of simulated players
    #[arg(short, long, default_value_t = DEFAULT_PLAYERS)]
    pub players: usize,

    /// Interest radius around each player, in tiles
    #[arg(short, long, default_value_t = DEFAULT_INTEREST_RADIUS)]
    pub radius: i32,

    /// Radius of the seed region collapsed at startup, in tiles
    #[arg(long, default_value_t = DEFAULT_SEED_RADIUS)]
    pub seed_radius: i32,

    /// Built-in rule table
    #[arg(long, value_enum, default_value_t = RulePreset::Network)]
    pub preset: RulePreset,

    /// Rule file overriding the preset
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Write the final level as a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Pixels per block in the exported image
    #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
    pub scale: u32,

    /// Print the final tile grid
    #[arg(short, long)]
    pub ascii: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator configuration from the arguments
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.seed,
            interest_radius: self.radius,
            seed_radius: self.seed_radius,
        }
    }
}

/// A simulated player walking the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// World position in blocks
    pub position: [f64; 2],
    /// Current walking direction
    pub heading: Direction,
}

/// Totals gathered over a simulation run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    /// Ticks simulated
    pub ticks: usize,
    /// Tiles in the final level
    pub tiles: usize,
    /// Diff entries handed out over all ticks
    pub diff_entries: usize,
    /// Largest single-tick diff
    pub largest_diff: usize,
    /// Cells that fell back to the void tile
    pub contradictions: usize,
}

/// Server tick loop stand-in: moves players and extends the level around them
pub struct Simulation {
    generator: LevelGenerator,
    players: Vec<Player>,
    movement: RandomSelector,
    summary: SimulationSummary,
}

impl Simulation {
    /// Place `players` players at the origin of a freshly built level
    pub fn new(generator: LevelGenerator, players: usize, seed: u64) -> Self {
        let mut movement = RandomSelector::new(seed.wrapping_add(1));
        let players = (0..players)
            .map(|_| Player {
                position: [0.0, 0.0],
                heading: random_heading(&mut movement),
            })
            .collect();

        Self {
            generator,
            players,
            movement,
            summary: SimulationSummary::default(),
        }
    }

    /// Advance one tick and return the diff the clients would receive
    pub fn step(&mut self) -> LevelDiff {
        let level = self.generator.get_level();
        let turn = (self.summary.ticks + 1) % PLAYER_TURN_INTERVAL == 0;

        for player in &mut self.players {
            if turn {
                player.heading = random_heading(&mut self.movement);
            }
            let offset = player.heading.offset();
            let next = [
                (offset[0] as f64).mul_add(PLAYER_STEP, player.position[0]),
                (offset[1] as f64).mul_add(PLAYER_STEP, player.position[1]),
            ];
            if level.is_solid(next) {
                player.heading = random_heading(&mut self.movement);
            } else {
                player.position = next;
            }
        }

        let positions: Vec<[f64; 2]> = self.players.iter().map(|p| p.position).collect();
        let diff = self.generator.extend_level(&positions);

        self.summary.ticks += 1;
        self.summary.diff_entries += diff.len();
        self.summary.largest_diff = self.summary.largest_diff.max(diff.len());
        diff
    }

    /// Simulated players
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Generator driven by the simulation
    pub const fn generator(&self) -> &LevelGenerator {
        &self.generator
    }

    /// Totals so far
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            tiles: self.generator.get_level().len(),
            contradictions: self.generator.stats().contradictions,
            ..self.summary.clone()
        }
    }
}

fn random_heading(selector: &mut RandomSelector) -> Direction {
    selector
        .index(Direction::ALL.len())
        .and_then(|index| Direction::ALL.get(index).copied())
        .unwrap_or(Direction::Right)
}

/// Run the demo described by the command line
///
/// # Errors
///
/// Returns an error if the rule file cannot be loaded, the rules or
/// configuration are invalid, or the image export fails.
pub fn run(cli: &Cli) -> Result<SimulationSummary> {
    let start = Instant::now();
    let rules = match &cli.rules {
        Some(path) => load_rules(path)?,
        None => cli.preset.rules(),
    };

    let generator = LevelGenerator::new(&rules, cli.generator_config())?;
    let mut simulation = Simulation::new(generator, cli.players, cli.seed);
    let progress = TickProgress::new(cli.ticks, cli.should_show_progress());

    for _ in 0..cli.ticks {
        let diff = simulation.step();
        progress.tick(simulation.generator().get_level().len(), diff.len());
    }
    progress.finish();

    let summary = simulation.summary();
    log::info!(
        "Simulated {} ticks in {:.2?}: {} tiles, {} diff entries (largest {}), {} fallback tiles",
        summary.ticks,
        start.elapsed(),
        summary.tiles,
        summary.diff_entries,
        summary.largest_diff,
        summary.contradictions
    );

    if let Some(path) = &cli.output {
        export_level_as_png(&simulation.generator().get_level(), path, cli.scale)?;
    }

    if cli.ascii {
        print_tiles(&simulation);
    }

    Ok(summary)
}

// The tile dump is the requested output
#[allow(clippy::print_stdout)]
fn print_tiles(simulation: &Simulation) {
    print!("{}", render_tiles(simulation.generator().grid()));
}
