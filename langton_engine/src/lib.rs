//! # langton_engine
//!
//! A deterministic engine for [Langton's Ant](https://en.wikipedia.org/wiki/Langton%27s_ant).
//!
//! An ant walks a grid of black and white cells. On a white cell it turns
//! right, on a black cell it turns left; either way it flips the cell and
//! steps forward. The grid wraps around at its edges.
//!
//! ```
//! use langton_engine::{Ant, Color, Direction, Grid, Position};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! let mut ant = Ant::new(Position::new(2, 2), Direction::North, 4);
//! while !ant.is_done() {
//!     ant.step(&mut grid).unwrap();
//! }
//!
//! assert_eq!(ant.position(), Position::new(2, 2));
//! assert_eq!(grid.get(3, 3).unwrap(), Color::Black);
//! ```

pub mod ant;
pub use ant::Ant;
pub use ant::Direction;
pub use ant::Move;

pub mod grid;
pub use grid::Color;
pub use grid::Grid;
pub use grid::Placement;
pub use grid::Position;

pub mod simulation;
pub use simulation::FinishedReason;
pub use simulation::Simulation;
pub use simulation::SimulationState;

mod config;
pub use config::SimulationConfig;

mod error;
pub use error::Error;
pub use error::Result;

mod replay;
