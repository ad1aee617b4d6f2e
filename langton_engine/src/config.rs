use crate::ant::Direction;
use crate::error::{Error, Result};
use crate::grid::Position;
use serde::{Deserialize, Serialize};

/// Describes a simulation run.
///
/// Random choices come from a generator seeded with `seed`, so a config
/// always describes one reproducible run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width. Ignored when `map` is given.
    pub width: usize,
    /// Grid height. Ignored when `map` is given.
    pub height: usize,
    /// A snapshot to start from instead of an empty grid.
    pub map: Option<String>,
    /// Starting cell of the ant, unless the map places it. The centre of the
    /// grid when `None`.
    pub start: Option<Position>,
    /// Starting heading of the ant, unless the map places it. North when `None`.
    pub direction: Option<Direction>,
    /// Draw a missing `start` and `direction` from the seed instead.
    pub random_start: bool,
    /// Number of steps the ant is allowed to take.
    pub steps: usize,
    pub seed: u64,
    /// Probability of each cell of a fresh grid starting black.
    pub noise: f64,
    /// Where to save the JSON replay of the run. No replay when `None`.
    pub replay_filename: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 101,
            height: 101,
            map: None,
            start: None,
            direction: None,
            random_start: false,
            steps: 11000,
            seed: 0,
            noise: 0.0,
            replay_filename: None,
        }
    }
}

impl SimulationConfig {
    /// Loads a config from JSON. Missing fields take their default values.
    pub fn from_json(contents: &str) -> Result<SimulationConfig> {
        let config: SimulationConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.noise) {
            return Err(Error::Config(format!(
                "noise must be between 0 and 1, got {}",
                self.noise
            )));
        }

        if self.map.is_some() {
            return Ok(());
        }

        if self.width == 0 || self.height == 0 {
            return Err(Error::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        match self.start {
            Some(start) if start.x >= self.width || start.y >= self.height => {
                Err(Error::OutOfRange {
                    x: start.x,
                    y: start.y,
                    width: self.width,
                    height: self.height,
                })
            }
            _ => Ok(()),
        }
    }
}
