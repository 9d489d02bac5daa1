//! Grid coordinates.

use crate::Direction;

/// A cell coordinate `(x, y)`, with `(0, 0)` at the top-left corner.
///
/// A position is not tied to a grid size; bounds are checked by [`Grid`](crate::Grid).
///
/// # Examples
///
/// ```
/// use netwalk_core::{Direction, Position};
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.step(Direction::Right), Some(Position::new(3, 0)));
/// assert_eq!(pos.step(Direction::Up), None);
/// assert_eq!(pos.to_string(), "(2, 0)");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from its column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the adjacent position in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let Self { x, y } = self;
        match direction {
            Direction::Up => Some(Self::new(x, y.checked_sub(1)?)),
            Direction::Right => Some(Self::new(x.checked_add(1)?, y)),
            Direction::Down => Some(Self::new(x, y.checked_add(1)?)),
            Direction::Left => Some(Self::new(x.checked_sub(1)?, y)),
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}
