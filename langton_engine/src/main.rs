use clap::Parser;
use langton_engine::{Direction, Position, Result, Simulation, SimulationConfig, SimulationState};
use log::error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "langton")]
#[command(about = "Run Langton's Ant on a wrapping grid")]
#[command(version)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Snapshot file to start from instead of an empty grid
    #[arg(long)]
    map: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Starting column of the ant; the centre of the grid by default
    #[arg(short, long, requires = "y")]
    x: Option<usize>,

    /// Starting row of the ant
    #[arg(short, long, requires = "x")]
    y: Option<usize>,

    /// Starting heading: north, east, south or west
    #[arg(short, long)]
    direction: Option<Direction>,

    /// Pick the start position and heading from the seed
    #[arg(long, conflicts_with_all = ["x", "y", "direction"])]
    random_start: bool,

    /// Number of steps to run
    #[arg(short, long)]
    steps: Option<usize>,

    /// Seed for random placement and noise
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of each cell starting black
    #[arg(long)]
    noise: Option<f64>,

    /// Write a JSON replay of the run to this file
    #[arg(long)]
    replay: Option<String>,

    /// Draw every step to the terminal
    #[arg(long)]
    draw: bool,

    /// Delay between drawn steps, in milliseconds
    #[arg(long, default_value_t = 50)]
    delay: u64,
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json(&fs::read_to_string(path)?)?,
            None => SimulationConfig::default(),
        };

        if let Some(path) = &self.map {
            config.map = Some(fs::read_to_string(path)?);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let (Some(x), Some(y)) = (self.x, self.y) {
            config.start = Some(Position::new(x, y));
        }
        if let Some(direction) = self.direction {
            config.direction = Some(direction);
        }
        if self.random_start {
            config.start = None;
            config.direction = None;
            config.random_start = true;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(noise) = self.noise {
            config.noise = noise;
        }
        if let Some(replay) = &self.replay {
            config.replay_filename = Some(replay.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(state) => {
            println!(
                "Finished after {} steps ({:?}): ant at ({}, {}) facing {:?}, {} black cells",
                state.step,
                state.finished_reason,
                state.position.x,
                state.position.y,
                state.direction,
                state.black_cells
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("langton: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SimulationState> {
    let mut simulation = Simulation::new(cli.simulation_config()?)?;

    if !cli.draw {
        return simulation.run();
    }

    // Pacing belongs to the driver, the engine never waits
    simulation.draw()?;
    while !simulation.state().finished {
        thread::sleep(Duration::from_millis(cli.delay));
        simulation.update()?;
        simulation.draw()?;
    }

    Ok(simulation.state())
}
