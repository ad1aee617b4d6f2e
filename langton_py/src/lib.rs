//! # langton_py
//!
//! Python bindings for `langton_engine`, so a presentation layer written in
//! Python can drive the simulation and read back its state.

use langton_engine::{
    Color, Direction, Error, FinishedReason, Position, Simulation, SimulationConfig,
    SimulationState,
};
use pyo3::exceptions::{PyIOError, PyIndexError, PyValueError};
use pyo3::prelude::*;

/// Represents the direction the ant is facing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[pyclass(name = "Direction", module = "langton_py", eq, eq_int)]
pub enum PyDirection {
    North,
    East,
    South,
    West,
}

impl From<Direction> for PyDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => PyDirection::North,
            Direction::East => PyDirection::East,
            Direction::South => PyDirection::South,
            Direction::West => PyDirection::West,
        }
    }
}

impl From<PyDirection> for Direction {
    fn from(direction: PyDirection) -> Self {
        match direction {
            PyDirection::North => Direction::North,
            PyDirection::East => Direction::East,
            PyDirection::South => Direction::South,
            PyDirection::West => Direction::West,
        }
    }
}

/// Represents the color of a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
#[pyclass(name = "Color", module = "langton_py", eq, eq_int)]
pub enum PyColor {
    White,
    Black,
}

impl From<Color> for PyColor {
    fn from(color: Color) -> Self {
        match color {
            Color::White => PyColor::White,
            Color::Black => PyColor::Black,
        }
    }
}

/// Represents the reason the simulation finished.
#[derive(Clone, Copy, Debug, PartialEq)]
#[pyclass(name = "FinishedReason", module = "langton_py", eq, eq_int)]
pub enum PyFinishedReason {
    /// The ant used up all of its steps.
    StepsExhausted,
    /// The simulation was stopped early.
    Stopped,
}

impl From<FinishedReason> for PyFinishedReason {
    fn from(reason: FinishedReason) -> Self {
        match reason {
            FinishedReason::StepsExhausted => PyFinishedReason::StepsExhausted,
            FinishedReason::Stopped => PyFinishedReason::Stopped,
        }
    }
}

/// Represents the state of the simulation after a step.
#[derive(Clone, Debug, PartialEq)]
#[pyclass(name = "SimulationState", module = "langton_py", get_all)]
pub struct PySimulationState {
    /// The number of steps taken so far.
    pub step: usize,
    /// The column of the ant.
    pub x: usize,
    /// The row of the ant.
    pub y: usize,
    pub direction: PyDirection,
    pub steps_left: usize,
    pub black_cells: usize,
    pub finished: bool,
    /// The reason the simulation finished. `None` if it has not finished.
    pub finished_reason: Option<PyFinishedReason>,
}

impl From<SimulationState> for PySimulationState {
    fn from(state: SimulationState) -> Self {
        PySimulationState {
            step: state.step,
            x: state.position.x,
            y: state.position.y,
            direction: state.direction.into(),
            steps_left: state.steps_left,
            black_cells: state.black_cells,
            finished: state.finished,
            finished_reason: state.finished_reason.map(Into::into),
        }
    }
}

/// A run of Langton's Ant.
#[pyclass(name = "Simulation", module = "langton_py")]
pub struct PySimulation {
    inner: Simulation,
}

#[pymethods]
impl PySimulation {
    /// Creates a new simulation.
    ///
    /// # Arguments
    /// * `width` - The width of the grid. Ignored when `map` is given.
    /// * `height` - The height of the grid. Ignored when `map` is given.
    /// * `steps` - The number of steps the ant may take.
    /// * `x` - The starting column. The centre of the grid when not given.
    /// * `y` - The starting row. The centre of the grid when not given.
    /// * `direction` - The starting heading. North when not given.
    /// * `random_start` - Whether to draw a missing position and heading from `seed`.
    /// * `seed` - The seed for the random number generator.
    /// * `noise` - The probability of each cell starting black.
    /// * `map` - A snapshot to start from instead of an empty grid.
    /// * `replay_filename` - Where to save a JSON replay. If `None`, no replay is saved.
    #[new]
    #[pyo3(signature = (width=101, height=101, steps=11000, x=None, y=None, direction=None, random_start=false, seed=0, noise=0.0, map=None, replay_filename=None))]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        width: usize,
        height: usize,
        steps: usize,
        x: Option<usize>,
        y: Option<usize>,
        direction: Option<PyDirection>,
        random_start: bool,
        seed: u64,
        noise: f64,
        map: Option<String>,
        replay_filename: Option<String>,
    ) -> PyResult<PySimulation> {
        let start = match (x, y) {
            (Some(x), Some(y)) => Some(Position::new(x, y)),
            (None, None) => None,
            _ => return Err(PyValueError::new_err("`x` and `y` must be given together")),
        };

        let config = SimulationConfig {
            width,
            height,
            map,
            start,
            direction: direction.map(Into::into),
            random_start,
            steps,
            seed,
            noise,
            replay_filename,
        };

        Simulation::new(config)
            .map(|inner| PySimulation { inner })
            .map_err(to_py_err)
    }

    /// Resets the grid and the ant to their starting state.
    pub fn start(&mut self) -> PyResult<PySimulationState> {
        self.inner.start().map(Into::into).map_err(to_py_err)
    }

    /// Advances the simulation by one step.
    pub fn update(&mut self) -> PyResult<PySimulationState> {
        self.inner.update().map(Into::into).map_err(to_py_err)
    }

    /// Runs the simulation until the ant has no steps left.
    pub fn run(&mut self) -> PyResult<PySimulationState> {
        self.inner.run().map(Into::into).map_err(to_py_err)
    }

    /// Ends the simulation early.
    pub fn stop(&mut self) -> PyResult<PySimulationState> {
        self.inner.stop().map(Into::into).map_err(to_py_err)
    }

    pub fn state(&self) -> PySimulationState {
        self.inner.state().into()
    }

    /// Returns the color of the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> PyResult<PyColor> {
        self.inner
            .grid()
            .get(x, y)
            .map(Into::into)
            .map_err(to_py_err)
    }

    /// Returns the grid as text with the ant's cell marked.
    pub fn snapshot(&self) -> String {
        self.inner.snapshot()
    }

    /// Draws the simulation to the console.
    pub fn draw(&self) -> PyResult<()> {
        self.inner.draw().map_err(to_py_err)
    }

    #[getter]
    pub fn width(&self) -> usize {
        self.inner.grid().width()
    }

    #[getter]
    pub fn height(&self) -> usize {
        self.inner.grid().height()
    }

    #[getter]
    pub fn position(&self) -> (usize, usize) {
        let position = self.inner.ant().position();
        (position.x, position.y)
    }

    #[getter]
    pub fn direction(&self) -> PyDirection {
        self.inner.ant().direction().into()
    }

    #[getter]
    pub fn steps_left(&self) -> usize {
        self.inner.ant().steps_left()
    }

    pub fn __str__(&self) -> String {
        self.inner.snapshot()
    }
}

fn to_py_err(error: Error) -> PyErr {
    match error {
        Error::OutOfRange { .. } => PyIndexError::new_err(error.to_string()),
        Error::Io(_) => PyIOError::new_err(error.to_string()),
        _ => PyValueError::new_err(error.to_string()),
    }
}

#[pymodule]
fn langton_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyColor>()?;
    m.add_class::<PyDirection>()?;
    m.add_class::<PyFinishedReason>()?;
    m.add_class::<PySimulation>()?;
    m.add_class::<PySimulationState>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_converting_states_the_position_is_split_into_x_and_y() {
        let state = SimulationState {
            step: 3,
            position: Position::new(4, 1),
            direction: Direction::South,
            steps_left: 7,
            black_cells: 3,
            finished: false,
            finished_reason: None,
        };

        let converted = PySimulationState::from(state);

        assert_eq!(converted.x, 4);
        assert_eq!(converted.y, 1);
        assert_eq!(converted.direction, PyDirection::South);
        assert_eq!(converted.steps_left, 7);
        assert!(converted.finished_reason.is_none());
    }

    #[test]
    fn when_converting_directions_both_ways_they_match() {
        for direction in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            assert_eq!(Direction::from(PyDirection::from(direction)), direction);
        }
    }

    #[test]
    fn when_driving_a_simulation_the_wrapper_reports_the_engine_state() {
        let mut simulation = PySimulation::new(
            5,
            5,
            4,
            Some(2),
            Some(2),
            Some(PyDirection::North),
            false,
            0,
            0.0,
            None,
            None,
        )
        .unwrap();

        let state = simulation.run().unwrap();

        assert_eq!((state.x, state.y), (2, 2));
        assert_eq!(state.black_cells, 4);
        assert_eq!(state.finished_reason, Some(PyFinishedReason::StepsExhausted));
        assert_eq!(simulation.position(), (2, 2));
        assert_eq!(simulation.get(3, 3).unwrap(), PyColor::Black);
    }
}
