use crate::error::{Error, Result};
use crate::grid::{Color, Grid, Position};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the direction an ant is facing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Rotates 90° clockwise.
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Rotates 90° counter-clockwise.
    pub fn turn_left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// The unit move as `(dx, dy)`, with `y` growing southwards.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn from_char(value: char) -> Option<Direction> {
        match value.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(value: &str) -> Result<Direction> {
        match value.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "e" | "east" => Ok(Direction::East),
            "s" | "south" => Ok(Direction::South),
            "w" | "west" => Ok(Direction::West),
            _ => Err(Error::Parse(format!("unknown direction `{}`", value))),
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        match rng.gen_range(0..4) {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }
}

/// What happened during a single tick of an ant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Move {
    /// The cell the ant stood on, and flipped.
    pub from: Position,
    /// The cell the ant moved to.
    pub to: Position,
    /// The direction after turning.
    pub direction: Direction,
    /// The new color of `from`.
    pub color: Color,
}

/// The ant: a position, a heading and a budget of remaining steps.
///
/// The ant never owns the grid it walks on. It is handed the grid on each
/// [`Ant::step`] and relies on the grid for bounds checking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ant {
    position: Position,
    direction: Direction,
    steps_left: usize,
    initial_steps: usize,
}

impl Ant {
    /// Creates a new ant.
    ///
    /// # Arguments
    /// * `position` - The starting cell.
    /// * `direction` - The starting heading.
    /// * `steps_left` - The number of steps the ant is allowed to take.
    pub fn new(position: Position, direction: Direction, steps_left: usize) -> Ant {
        Ant {
            position,
            direction,
            steps_left,
            initial_steps: steps_left,
        }
    }

    /// Creates a new ant, checking that `position` lies on `grid`.
    pub fn place(
        grid: &Grid,
        position: Position,
        direction: Direction,
        steps_left: usize,
    ) -> Result<Ant> {
        grid.get(position.x, position.y)?;
        Ok(Ant::new(position, direction, steps_left))
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn steps_left(&self) -> usize {
        self.steps_left
    }

    pub fn initial_steps(&self) -> usize {
        self.initial_steps
    }

    pub fn is_done(&self) -> bool {
        self.steps_left == 0
    }

    /// Drops the remaining budget so the next `step` is a no-op.
    pub fn stop(&mut self) {
        self.steps_left = 0;
    }

    /// Advances the ant by one tick.
    ///
    /// On a white cell the ant turns right, on a black cell it turns left.
    /// It then flips the cell it stands on and moves one cell forward,
    /// wrapping around the edges of the grid.
    ///
    /// Returns `Ok(None)` without touching the grid when no steps are left.
    /// Grid errors (an ant placed off the grid) are returned as they are.
    pub fn step(&mut self, grid: &mut Grid) -> Result<Option<Move>> {
        if self.steps_left == 0 {
            return Ok(None);
        }

        let from = self.position;
        self.direction = match grid.get(from.x, from.y)? {
            Color::White => self.direction.turn_right(),
            Color::Black => self.direction.turn_left(),
        };

        // The cell is flipped before the ant leaves it
        let color = grid.flip(from.x, from.y)?;
        self.position = grid.neighbor(from, self.direction);
        self.steps_left -= 1;

        Ok(Some(Move {
            from,
            to: self.position,
            direction: self.direction,
            color,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[test]
    fn when_turning_right_the_direction_cycles_clockwise() {
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::East.turn_right(), Direction::South);
        assert_eq!(Direction::South.turn_right(), Direction::West);
        assert_eq!(Direction::West.turn_right(), Direction::North);
    }

    #[test]
    fn when_turning_left_the_direction_cycles_counter_clockwise() {
        assert_eq!(Direction::North.turn_left(), Direction::West);
        assert_eq!(Direction::West.turn_left(), Direction::South);
        assert_eq!(Direction::South.turn_left(), Direction::East);
        assert_eq!(Direction::East.turn_left(), Direction::North);
    }

    #[test]
    fn when_turning_four_times_in_the_same_way_the_direction_is_unchanged() {
        for direction in ALL {
            let right = (0..4).fold(direction, |d, _| d.turn_right());
            let left = (0..4).fold(direction, |d, _| d.turn_left());

            assert_eq!(right, direction);
            assert_eq!(left, direction);
        }
    }

    #[test]
    fn when_parsing_a_direction_full_names_and_letters_are_accepted() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("E".parse::<Direction>().unwrap(), Direction::East);
        assert_eq!("South".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!("w".parse::<Direction>().unwrap(), Direction::West);
        assert!(matches!("up".parse::<Direction>(), Err(Error::Parse(_))));
    }

    #[test]
    fn when_sampling_directions_from_the_same_seed_the_sequence_is_repeated() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        let first: Vec<Direction> = (0..32).map(|_| a.gen()).collect();
        let second: Vec<Direction> = (0..32).map(|_| b.gen()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn when_stepping_on_a_white_cell_the_ant_turns_right_flips_it_and_moves() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut ant = Ant::new(Position::new(2, 2), Direction::North, 1);

        let movement = ant.step(&mut grid).unwrap().unwrap();

        assert_eq!(ant.direction(), Direction::East);
        assert_eq!(ant.position(), Position::new(3, 2));
        assert_eq!(grid.get(2, 2).unwrap(), Color::Black);
        assert_eq!(
            movement,
            Move {
                from: Position::new(2, 2),
                to: Position::new(3, 2),
                direction: Direction::East,
                color: Color::Black,
            }
        );
    }

    #[test]
    fn when_stepping_on_a_black_cell_the_ant_turns_left_flips_it_and_moves() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, Color::Black).unwrap();
        let mut ant = Ant::new(Position::new(2, 2), Direction::North, 1);

        ant.step(&mut grid).unwrap();

        assert_eq!(ant.direction(), Direction::West);
        assert_eq!(ant.position(), Position::new(1, 2));
        assert_eq!(grid.get(2, 2).unwrap(), Color::White);
    }

    #[test]
    fn when_running_four_steps_on_an_empty_grid_the_ant_walks_a_square() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut ant = Ant::new(Position::new(2, 2), Direction::North, 4);

        let expected = [
            (Position::new(3, 2), Direction::East, 3),
            (Position::new(3, 3), Direction::South, 2),
            (Position::new(2, 3), Direction::West, 1),
            (Position::new(2, 2), Direction::North, 0),
        ];

        for (position, direction, steps_left) in expected {
            ant.step(&mut grid).unwrap();
            assert_eq!(ant.position(), position);
            assert_eq!(ant.direction(), direction);
            assert_eq!(ant.steps_left(), steps_left);
        }

        for (x, y) in [(2, 2), (3, 2), (3, 3), (2, 3)] {
            assert_eq!(grid.get(x, y).unwrap(), Color::Black);
        }
        assert_eq!(grid.black_cells(), 4);
    }

    #[test]
    fn when_no_steps_are_left_stepping_is_a_no_op() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut ant = Ant::new(Position::new(2, 2), Direction::North, 1);

        assert!(ant.step(&mut grid).unwrap().is_some());
        let before = grid.clone();

        assert!(ant.step(&mut grid).unwrap().is_none());
        assert!(ant.step(&mut grid).unwrap().is_none());

        assert_eq!(ant.steps_left(), 0);
        assert_eq!(ant.position(), Position::new(3, 2));
        assert_eq!(grid, before);
    }

    #[test]
    fn when_stopped_the_ant_does_not_move_again() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut ant = Ant::new(Position::new(2, 2), Direction::North, 10);

        ant.step(&mut grid).unwrap();
        ant.stop();

        assert!(ant.is_done());
        assert!(ant.step(&mut grid).unwrap().is_none());
        assert_eq!(ant.position(), Position::new(3, 2));
        assert_eq!(ant.initial_steps(), 10);
    }

    #[test]
    fn when_leaving_column_zero_westwards_the_ant_wraps_to_the_last_column() {
        let mut grid = Grid::new(5, 5).unwrap();
        // South on a white cell turns right to face West
        let mut ant = Ant::new(Position::new(0, 2), Direction::South, 1);

        ant.step(&mut grid).unwrap();

        assert_eq!(ant.direction(), Direction::West);
        assert_eq!(ant.position(), Position::new(4, 2));
    }

    #[test]
    fn when_leaving_any_edge_the_ant_reappears_on_the_opposite_edge() {
        let mut grid = Grid::new(4, 3).unwrap();

        // West on white turns North
        let mut ant = Ant::new(Position::new(1, 0), Direction::West, 1);
        ant.step(&mut grid).unwrap();
        assert_eq!(ant.position(), Position::new(1, 2));

        // North on white turns East
        let mut ant = Ant::new(Position::new(3, 1), Direction::North, 1);
        ant.step(&mut grid).unwrap();
        assert_eq!(ant.position(), Position::new(0, 1));

        // East on white turns South
        let mut ant = Ant::new(Position::new(2, 2), Direction::East, 1);
        ant.step(&mut grid).unwrap();
        assert_eq!(ant.position(), Position::new(2, 0));
    }

    #[test]
    fn when_the_ant_is_off_the_grid_stepping_returns_out_of_range() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut ant = Ant::new(Position::new(3, 0), Direction::North, 5);

        let result = ant.step(&mut grid);

        assert!(matches!(
            result,
            Err(Error::OutOfRange { x: 3, y: 0, .. })
        ));
        assert_eq!(ant.steps_left(), 5);
        assert_eq!(grid.black_cells(), 0);
    }

    #[test]
    fn when_placing_an_ant_off_the_grid_an_error_is_returned() {
        let grid = Grid::new(3, 3).unwrap();

        assert!(Ant::place(&grid, Position::new(2, 2), Direction::East, 1).is_ok());
        assert!(matches!(
            Ant::place(&grid, Position::new(0, 3), Direction::East, 1),
            Err(Error::OutOfRange { .. })
        ));
    }
}
