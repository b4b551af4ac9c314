//! Headless driver for the toroidal CA simulations
//!
//! External collaborator in the sense of the core's contract: it constructs
//! a simulation, steps it in batches, and only ever reads grid snapshots and
//! the step counter between batches.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use torus_ca_core::{
    FireCell, FireModel, ForestFire, Grid, Model, PatternCell, PatternModel, Simulation,
    SimulationError, TuringPattern,
};

/// Toroidal cellular automata demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "torus-ca-demo")]
#[command(about = "Fire spread and Turing pattern simulations on a torus", long_about = None)]
struct Args {
    /// Model to run: fire or pattern
    #[arg(short, long, default_value = "fire")]
    model: String,

    /// Lattice side length (default: 100 for fire, 50 for pattern)
    #[arg(short, long)]
    size: Option<usize>,

    /// Initial tree/active-cell density (0-1)
    #[arg(short, long, default_value_t = 0.5)]
    density: f64,

    /// Contagion radius (fire model)
    #[arg(short, long, default_value_t = 1)]
    radius: usize,

    /// Activation window radius (pattern model)
    #[arg(long, default_value_t = 1)]
    short_radius: usize,

    /// Inhibition window radius (pattern model)
    #[arg(long, default_value_t = 5)]
    long_radius: usize,

    /// Activation weight (pattern model)
    #[arg(long, default_value_t = 1.0)]
    short_weight: f64,

    /// Inhibition weight (pattern model)
    #[arg(long, default_value_t = 0.1)]
    long_weight: f64,

    /// Total number of steps to run
    #[arg(long, default_value_t = 100)]
    steps: u64,

    /// Steps per report line
    #[arg(long, default_value_t = 10)]
    report_interval: u64,

    /// RNG seed for a reproducible run (defaults to entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Dump the final grid as ASCII
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match args.model.to_lowercase().as_str() {
        "fire" => run_fire(&args),
        "pattern" | "turing" => run_pattern(&args),
        other => Err(format!("Unknown model '{other}', expected 'fire' or 'pattern'").into()),
    }
}

/// Seed from the given seed if present, from entropy otherwise
fn initialize<M: Model>(
    sim: &mut Simulation<M>,
    seed: Option<u64>,
) -> Result<(), SimulationError> {
    match seed {
        Some(seed) => sim.initialize_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => sim.initialize(),
    }
}

fn run_fire(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let size = args.size.unwrap_or(100);
    let mut sim = ForestFire::new(FireModel::new(size, args.density, args.radius)?);
    initialize(&mut sim, args.seed)?;

    println!("=== Fire Spread Demo ===");
    println!(
        "{size}x{size} torus, density {:.2}, radius {}",
        args.density, args.radius
    );
    report_fire(&sim);

    let interval = args.report_interval.max(1);
    while sim.step_count() < args.steps {
        let batch = interval.min(args.steps - sim.step_count());
        sim.run(batch)?;
        report_fire(&sim);
    }

    if args.ascii {
        print_grid(sim.grid(), |cell| match cell {
            FireCell::Empty => '.',
            FireCell::Tree => 'T',
            FireCell::Burning => '*',
            FireCell::Burnt => 'x',
        });
    }
    Ok(())
}

fn run_pattern(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let size = args.size.unwrap_or(50);
    let model = PatternModel::new(
        size,
        args.density,
        args.short_radius,
        args.long_radius,
        args.short_weight,
        args.long_weight,
    )?;
    let mut sim = TuringPattern::new(model);
    initialize(&mut sim, args.seed)?;

    println!("=== Turing Pattern Demo ===");
    println!(
        "{size}x{size} torus, density {:.2}, Ra={} wa={:.2}, Ri={} wi={:.2}",
        args.density, args.short_radius, args.short_weight, args.long_radius, args.long_weight
    );
    report_pattern(&sim);

    let interval = args.report_interval.max(1);
    while sim.step_count() < args.steps {
        let batch = interval.min(args.steps - sim.step_count());
        sim.run(batch)?;
        report_pattern(&sim);
    }

    if args.ascii {
        print_grid(sim.grid(), |cell| match cell {
            PatternCell::Inactive => '.',
            PatternCell::Active => '#',
        });
    }
    Ok(())
}

fn report_fire(sim: &ForestFire) {
    let census = sim.census();
    println!(
        "step {:>5}: {:>6} trees, {:>6} burning, {:>6} burnt, {:>6} empty",
        sim.step_count(),
        census.tree,
        census.burning,
        census.burnt,
        census.empty
    );
}

fn report_pattern(sim: &TuringPattern) {
    let total = sim.grid().size() * sim.grid().size();
    println!(
        "step {:>5}: {:>6} active / {total} cells",
        sim.step_count(),
        sim.active_count()
    );
}

fn print_grid<C: Copy>(grid: &Grid<C>, glyph: impl Fn(C) -> char) {
    for row in grid.rows() {
        let line: String = row.iter().map(|&cell| glyph(cell)).collect();
        println!("{line}");
    }
}
