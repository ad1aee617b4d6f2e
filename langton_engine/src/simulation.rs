use crate::ant::{Ant, Direction};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::grid::{Color, Grid, Position};
use crate::replay::{create_replay_logger, ReplayLogger};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::Serialize;

/// A run of Langton's Ant and the main entry point for driving the engine.
///
/// The simulation owns the grid and the ant for the whole run. It never waits
/// between steps; pacing is up to whoever calls [`Simulation::update`].
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    ant: Ant,
    step: usize,
    finished: bool,
    finished_reason: Option<FinishedReason>,
    replay_logger: Box<dyn ReplayLogger>,
}

/// Represents the state of the simulation after a step.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    /// The number of steps taken so far.
    pub step: usize,
    pub position: Position,
    pub direction: Direction,
    pub steps_left: usize,
    pub black_cells: usize,
    /// Whether the simulation has finished.
    pub finished: bool,
    /// The reason the simulation finished. `None` if it has not finished.
    pub finished_reason: Option<FinishedReason>,
}

/// Represents the reason the simulation finished.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum FinishedReason {
    /// The ant used up all of its steps.
    StepsExhausted,
    /// The simulation was stopped before the ant used up its steps.
    Stopped,
}

impl Simulation {
    /// Creates a new simulation, ready to be updated.
    pub fn new(config: SimulationConfig) -> Result<Simulation> {
        config.validate()?;
        let (grid, ant) = Self::build(&config)?;
        let replay_logger =
            create_replay_logger(config.replay_filename.clone(), grid.width(), grid.height());

        let mut simulation = Simulation {
            config,
            grid,
            ant,
            step: 0,
            finished: false,
            finished_reason: None,
            replay_logger,
        };
        simulation.begin()?;

        Ok(simulation)
    }

    /// Resets the grid and the ant to the configured starting state.
    pub fn start(&mut self) -> Result<SimulationState> {
        let (grid, ant) = Self::build(&self.config)?;
        self.grid = grid;
        self.ant = ant;
        self.step = 0;
        self.finished = false;
        self.finished_reason = None;
        self.replay_logger.clear();
        self.begin()?;

        Ok(self.state())
    }

    /// Advances the simulation by one step.
    ///
    /// Once the simulation has finished this does nothing and returns the
    /// final state.
    pub fn update(&mut self) -> Result<SimulationState> {
        if self.finished {
            return Ok(self.state());
        }

        if let Some(movement) = self.ant.step(&mut self.grid)? {
            self.step += 1;
            trace!(
                "step {}: ({}, {}) -> ({}, {}) facing {:?}",
                self.step,
                movement.from.x,
                movement.from.y,
                movement.to.x,
                movement.to.y,
                movement.direction
            );
            self.replay_logger.log_move(self.step, &movement);
        }

        if self.ant.is_done() {
            self.finish(FinishedReason::StepsExhausted)?;
        }

        Ok(self.state())
    }

    /// Runs the simulation until the ant has no steps left.
    pub fn run(&mut self) -> Result<SimulationState> {
        while !self.finished {
            self.update()?;
        }
        Ok(self.state())
    }

    /// Ends the simulation early. The ant will not move again.
    pub fn stop(&mut self) -> Result<SimulationState> {
        if !self.finished {
            debug!("stop requested at step {}", self.step);
            self.ant.stop();
            self.finish(FinishedReason::Stopped)?;
        }
        Ok(self.state())
    }

    pub fn state(&self) -> SimulationState {
        SimulationState {
            step: self.step,
            position: self.ant.position(),
            direction: self.ant.direction(),
            steps_left: self.ant.steps_left(),
            black_cells: self.grid.black_cells(),
            finished: self.finished,
            finished_reason: self.finished_reason,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    pub fn snapshot(&self) -> String {
        self.grid.snapshot(&self.ant)
    }

    /// Draws the simulation to the console.
    pub fn draw(&self) -> Result<()> {
        self.grid.draw(&self.ant, self.step)
    }

    fn begin(&mut self) -> Result<()> {
        info!(
            "starting a {}x{} simulation at ({}, {}) facing {:?} with {} steps",
            self.grid.width(),
            self.grid.height(),
            self.ant.position().x,
            self.ant.position().y,
            self.ant.direction(),
            self.ant.steps_left()
        );
        self.replay_logger.log_start(
            self.ant.position(),
            self.ant.direction(),
            self.ant.steps_left(),
        );

        // A run without any steps is over before it starts
        if self.ant.is_done() {
            self.finish(FinishedReason::StepsExhausted)?;
        }
        Ok(())
    }

    fn finish(&mut self, reason: FinishedReason) -> Result<()> {
        self.finished = true;
        self.finished_reason = Some(reason);
        info!(
            "simulation finished after {} steps: {:?}, {} black cells",
            self.step,
            reason,
            self.grid.black_cells()
        );

        let snapshot = self.snapshot();
        self.replay_logger.log_end(reason, snapshot);
        self.replay_logger.save()
    }

    fn build(config: &SimulationConfig) -> Result<(Grid, Ant)> {
        let mut rng = StdRng::seed_from_u64(config.seed);

        let (mut grid, placement) = match &config.map {
            Some(map) => Grid::parse(map)?,
            None => (Grid::new(config.width, config.height)?, None),
        };

        if config.map.is_none() && config.noise > 0.0 {
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    if rng.gen_bool(config.noise) {
                        grid.set(x, y, Color::Black)?;
                    }
                }
            }
        }

        let position = match placement.map(|p| p.position).or(config.start) {
            Some(position) => position,
            None if config.random_start => Position::new(
                rng.gen_range(0..grid.width()),
                rng.gen_range(0..grid.height()),
            ),
            None => Position::new(grid.width() / 2, grid.height() / 2),
        };
        let direction = match placement.map(|p| p.direction).or(config.direction) {
            Some(direction) => direction,
            None if config.random_start => rng.gen(),
            None => Direction::North,
        };

        let ant = Ant::place(&grid, position, direction, config.steps)?;
        Ok((grid, ant))
    }
}
