//! The W×H tile container.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Connections, Direction, Position, Sense};

/// Errors raised when a grid is created or addressed incorrectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// Width or height is zero, or the grid is too small to hold a connected server.
    #[display("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The position lies outside `[0, width) × [0, height)`.
    #[display("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

/// Errors returned when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contains no rows.
    #[display("grid text is empty")]
    Empty,
    /// A row has a different length from the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell is not a hexadecimal digit.
    #[display("invalid cell {found:?} at row {row}, column {column}")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The offending character.
        found: char,
    },
}

/// The logical role of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum TileType {
    /// The root of the network, at the grid center.
    #[display("server")]
    Server,
    /// A tile with exactly one connection.
    #[display("endpoint")]
    Endpoint,
    /// A tile with two or more connections.
    #[display("junction")]
    Junction,
    /// A tile with no connections.
    #[display("blank")]
    Blank,
}

impl TileType {
    /// Classifies a non-server tile by its connection count.
    #[must_use]
    pub const fn classify(connections: Connections) -> Self {
        match connections.degree() {
            0 => Self::Blank,
            1 => Self::Endpoint,
            _ => Self::Junction,
        }
    }
}

/// A W×H grid of tile connection masks.
///
/// The server tile always sits at [`Grid::server`], the geometric center
/// `(width / 2, height / 2)`. For even sizes this is the lower-right of the
/// four middle cells.
///
/// Grids print and parse as rows of hexadecimal mask digits:
///
/// ```
/// use netwalk_core::{Connections, Grid, Position};
///
/// let grid: Grid = "
///     040
///     2a9
///     000
/// ".parse()?;
/// assert_eq!(grid.server(), Position::new(1, 1));
/// assert_eq!(grid[Position::new(1, 1)], Connections::LEFT | Connections::RIGHT);
/// assert_eq!(grid.to_string(), "040\n2a9\n000");
/// # Ok::<(), netwalk_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Connections>,
}

impl Grid {
    /// Creates a grid in which every tile is blank.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Connections::empty(); len],
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the server position.
    #[must_use]
    pub fn server(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Returns `true` if both grids have the same width and height.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Returns `true` if `pos` is inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Checks that `pos` is inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] otherwise.
    pub fn check(&self, pos: Position) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the row-major index of `pos`, or `None` if it is outside the grid.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.y() * self.width + pos.x())
    }

    /// Returns the connections at `pos`, or `None` if it is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Connections> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Returns the in-bounds neighbor of `pos` in `direction`.
    #[must_use]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|&next| self.contains(next))
    }

    /// Returns `true` if `pos` and its neighbor in `direction` point at each other.
    ///
    /// This is the mutual-adjacency test: a one-sided pipe does not connect.
    #[must_use]
    pub fn is_linked(&self, pos: Position, direction: Direction) -> bool {
        let Some(here) = self.get(pos) else {
            return false;
        };
        here.has(direction)
            && self
                .neighbor(pos, direction)
                .and_then(|next| self.get(next))
                .is_some_and(|there| there.has(direction.opposite()))
    }

    /// Iterates over the neighbors mutually linked with `pos`.
    pub fn linked_neighbors(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> {
        let here = self.get(pos).unwrap_or(Connections::empty());
        here.directions().filter_map(move |dir| {
            self.is_linked(pos, dir)
                .then(|| self.neighbor(pos, dir))
                .flatten()
                .map(|next| (dir, next))
        })
    }

    /// Opens a link between `pos` and its neighbor in `direction`.
    ///
    /// Sets the bit towards the neighbor on `pos` and the bit pointing back on
    /// the neighbor. Returns the neighbor, or `None` (leaving the grid
    /// untouched) if either cell is outside the grid.
    pub fn connect(&mut self, pos: Position, direction: Direction) -> Option<Position> {
        let here = self.index_of(pos)?;
        let next = self.neighbor(pos, direction)?;
        let there = self.index_of(next)?;
        self.cells[here] |= direction.connection();
        self.cells[there] |= direction.opposite().connection();
        Some(next)
    }

    /// Rotates the tile at `pos` by one quarter turn and returns its new mask.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn rotate(&mut self, pos: Position, sense: Sense) -> Result<Connections, GridError> {
        self.check(pos)?;
        let cell = &mut self[pos];
        *cell = cell.rotate(1, sense);
        Ok(*cell)
    }

    /// Classifies the tile at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn tile_type(&self, pos: Position) -> Result<TileType, GridError> {
        self.check(pos)?;
        if pos == self.server() {
            return Ok(TileType::Server);
        }
        Ok(TileType::classify(self[pos]))
    }

    /// Counts the non-blank tiles.
    #[must_use]
    pub fn count_non_blank(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Counts mutual links, each undirected edge once.
    #[must_use]
    pub fn count_links(&self) -> usize {
        self.positions()
            .map(|pos| {
                usize::from(self.is_linked(pos, Direction::Right))
                    + usize::from(self.is_linked(pos, Direction::Down))
            })
            .sum()
    }

    /// Iterates over the positions whose masks differ between `self` and `other`.
    ///
    /// Grids of different shapes are compared over their common area.
    pub fn differences<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = Position> + 'a {
        self.positions()
            .filter(move |&pos| other.contains(pos) && self[pos] != other[pos])
    }
}

impl Index<Position> for Grid {
    type Output = Connections;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "{pos} is outside the grid");
        &self.cells[pos.y() * self.width + pos.x()]
    }
}

impl IndexMut<Position> for Grid {
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        assert!(self.contains(pos), "{pos} is outside the grid");
        &mut self.cells[pos.y() * self.width + pos.x()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{:x}", cell.bits())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses rows of hexadecimal mask digits.
    ///
    /// Rows are separated by newlines or `/`; blank lines and surrounding
    /// whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();
        let width = rows.first().ok_or(ParseGridError::Empty)?.chars().count();

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseGridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, ch) in line.chars().enumerate() {
                let digit = ch
                    .to_digit(16)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(ParseGridError::InvalidCell { row, column, found: ch })?;
                cells.push(Connections::from_bits_truncate(digit));
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }
}
