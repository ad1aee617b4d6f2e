use crate::ant::{Ant, Direction};
use crate::error::{Error, Result};
use crossterm::{
    cursor::Hide,
    execute,
    style::{Color as TermColor, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io::{stdout, Write};

/// The color of a single cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn flipped(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn char(self) -> char {
        match self {
            Color::White => '.',
            Color::Black => '#',
        }
    }

    fn term_color(self) -> TermColor {
        match self {
            Color::White => TermColor::Grey,
            Color::Black => TermColor::DarkGrey,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Position {
        Position { x, y }
    }
}

/// Where the ant stands in a parsed snapshot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub direction: Direction,
}

/// A fixed-size grid of black and white cells.
///
/// The grid is the only bounds authority of the engine: every accessor checks
/// its coordinates and fails with [`Error::OutOfRange`] instead of clamping.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Creates an all-white grid.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid { width, height });
        }

        let len = width
            .checked_mul(height)
            .ok_or(Error::TooLarge { width, height })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::TooLarge { width, height })?;
        cells.resize(len, Color::White);

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Parses a grid from the text produced by [`Grid::snapshot`].
    ///
    /// Returns the grid along with the ant's placement, if the text marks one.
    pub fn parse(contents: &str) -> Result<(Grid, Option<Placement>)> {
        let metadata = Regex::new(r"rows (\d+)\s+cols (\d+)")?
            .captures(contents)
            .ok_or_else(|| Error::Parse("missing `rows <n>` and `cols <n>` header".to_string()))?;

        let height = parse_dimension(&metadata[1])?;
        let width = parse_dimension(&metadata[2])?;

        // Rows are checked against the header before anything is allocated
        let rows: Vec<&str> = Regex::new(r"(?m)^\s*m (.*)$")?
            .captures_iter(contents)
            .filter_map(|captures| captures.get(1))
            .map(|line| line.as_str().trim())
            .collect();

        if rows.len() != height {
            return Err(Error::Parse(format!(
                "expected {} rows, found {}",
                height,
                rows.len()
            )));
        }

        for (y, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(Error::Parse(format!(
                    "row {} should have {} cells, found {}",
                    y,
                    width,
                    line.chars().count()
                )));
            }
        }

        let mut grid = Grid::new(width, height)?;
        let mut placement = None;
        for (y, line) in rows.iter().enumerate() {
            for (x, value) in line.chars().enumerate() {
                let (color, direction) = from_char(value)?;
                grid.set(x, y, color)?;

                if let Some(direction) = direction {
                    if placement.is_some() {
                        return Err(Error::Parse("more than one ant on the grid".to_string()));
                    }
                    placement = Some(Placement {
                        position: Position::new(x, y),
                        direction,
                    });
                }
            }
        }

        Ok((grid, placement))
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Color> {
        self.index(x, y).map(|index| self.cells[index])
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let index = self.index(x, y)?;
        self.cells[index] = color;
        Ok(())
    }

    /// Flips a cell and returns its new color.
    pub fn flip(&mut self, x: usize, y: usize) -> Result<Color> {
        let index = self.index(x, y)?;
        self.cells[index] = self.cells[index].flipped();
        Ok(self.cells[index])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn black_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|color| **color == Color::Black)
            .count()
    }

    /// The adjacent cell in `direction`, wrapping around the edges.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: modulo(position.x as i64 + dx, self.width),
            y: modulo(position.y as i64 + dy, self.height),
        }
    }

    /// Renders the grid as text with the ant's cell marked.
    ///
    /// White cells are `.`, black cells `#`. The ant's cell shows its heading
    /// as `N`, `E`, `S` or `W`, in lower case when the cell beneath is black.
    /// An ant outside the grid is not shown.
    pub fn snapshot(&self, ant: &Ant) -> String {
        let mut lines = Vec::with_capacity(self.height + 2);
        lines.push(format!("rows {}", self.height));
        lines.push(format!("cols {}", self.width));

        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| self.char_at(x, y, ant))
                .collect();
            lines.push(format!("m {}", row));
        }

        lines.join("\n")
    }

    /// Draws the grid to the console.
    pub fn draw(&self, ant: &Ant, step: usize) -> Result<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            Clear(ClearType::All),
            Hide,
            Print("Step: "),
            Print(step.to_string()),
            Print("\nSteps left: "),
            Print(ant.steps_left().to_string()),
            Print("\nBlack cells: "),
            Print(self.black_cells().to_string()),
            Print("\n\n")
        )?;

        for y in 0..self.height {
            for x in 0..self.width {
                let color = if ant.position() == Position::new(x, y) {
                    TermColor::Red
                } else {
                    self.cells[y * self.width + x].term_color()
                };
                execute!(
                    stdout,
                    SetForegroundColor(color),
                    Print(self.char_at(x, y, ant)),
                    SetForegroundColor(TermColor::Reset)
                )?;
            }
            execute!(stdout, Print("\n"))?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn char_at(&self, x: usize, y: usize, ant: &Ant) -> char {
        let color = self.cells[y * self.width + x];
        if ant.position() != Position::new(x, y) {
            return color.char();
        }

        match color {
            Color::White => ant.direction().char(),
            Color::Black => ant.direction().char().to_ascii_lowercase(),
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }
}

fn modulo(value: i64, max: usize) -> usize {
    value.rem_euclid(max as i64) as usize
}

fn parse_dimension(value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| Error::Parse(format!("invalid dimension `{}`", value)))
}

fn from_char(value: char) -> Result<(Color, Option<Direction>)> {
    match value {
        '.' => Ok((Color::White, None)),
        '#' => Ok((Color::Black, None)),
        // Upper case ants stand on white cells, lower case ants on black ones
        'N' | 'E' | 'S' | 'W' => Ok((Color::White, Direction::from_char(value))),
        'n' | 'e' | 's' | 'w' => Ok((Color::Black, Direction::from_char(value))),
        _ => Err(Error::Parse(format!("invalid cell `{}`", value))),
    }
}
