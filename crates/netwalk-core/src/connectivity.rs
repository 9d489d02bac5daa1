//! Reachability from the server over the current tile masks.

use crate::{Grid, Position};

/// A dense set of positions on a grid of fixed size.
///
/// Used as the visited set of traversals and as the result of
/// [`connected_cells`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSet {
    width: usize,
    height: usize,
    bits: Vec<bool>,
    len: usize,
}

impl PositionSet {
    /// Creates an empty set sized for `grid`.
    #[must_use]
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            bits: vec![false; grid.len()],
            len: 0,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.x() < self.width && pos.y() < self.height).then(|| pos.y() * self.width + pos.x())
    }

    /// Inserts `pos` and returns `true` if it was not already present.
    ///
    /// Positions outside the grid are ignored and return `false`.
    pub fn insert(&mut self, pos: Position) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        if self.bits[i] {
            return false;
        }
        self.bits[i] = true;
        self.len += 1;
        true
    }

    /// Returns `true` if `pos` is in the set.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.bits[i])
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(i, _)| Position::new(i % width, i / width))
    }
}

/// Returns the cells reachable from the server through mutual links.
///
/// The traversal reads the grid's current masks, so on a live grid it reports
/// the part of the network that is already powered. The server itself is always
/// included.
///
/// # Examples
///
/// ```
/// use netwalk_core::{Grid, Position, connected_cells};
///
/// // The server at (1, 1) links left; the tile above points away from it.
/// let grid: Grid = "010/280/000".parse()?;
/// let connected = connected_cells(&grid);
/// assert_eq!(connected.len(), 2);
/// assert!(connected.contains(Position::new(0, 1)));
/// assert!(!connected.contains(Position::new(1, 0)));
/// # Ok::<(), netwalk_core::ParseGridError>(())
/// ```
#[must_use]
pub fn connected_cells(grid: &Grid) -> PositionSet {
    let server = grid.server();
    let mut connected = PositionSet::for_grid(grid);
    connected.insert(server);

    let mut stack = vec![server];
    while let Some(pos) = stack.pop() {
        for (_, next) in grid.linked_neighbors(pos) {
            if connected.insert(next) {
                stack.push(next);
            }
        }
    }
    connected
}
