//! Spanning-tree validation of a grid's link graph.

use crate::{Grid, connected_cells};

/// Link-graph statistics of a grid.
///
/// A grid is a valid puzzle solution when its mutual links form exactly one
/// tree that spans every non-blank tile and contains the server. A blank
/// server links nothing, so a grid needs at least two cells to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeReport {
    /// Non-blank tiles.
    pub tiles: usize,
    /// Mutual links, each counted once.
    pub links: usize,
    /// Non-blank tiles reachable from the server, the server included.
    pub reachable: usize,
}

impl TreeReport {
    /// Returns `true` if every tile is reachable and the links form no cycle.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.reachable == self.tiles && self.links + 1 == self.tiles
    }
}

/// Computes the [`TreeReport`] of `grid`.
///
/// # Examples
///
/// ```
/// use netwalk_core::{Grid, tree};
///
/// let solved: Grid = "040/2b8/000".parse()?;
/// assert!(tree::analyze(&solved).is_spanning_tree());
///
/// let loop_: Grid = "6c/39".parse()?;
/// let report = tree::analyze(&loop_);
/// assert_eq!(report.links, 4);
/// assert!(!report.is_spanning_tree());
/// # Ok::<(), netwalk_core::ParseGridError>(())
/// ```
#[must_use]
pub fn analyze(grid: &Grid) -> TreeReport {
    let reachable = if grid[grid.server()].is_empty() {
        0
    } else {
        connected_cells(grid).len()
    };
    TreeReport {
        tiles: grid.count_non_blank(),
        links: grid.count_links(),
        reachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_server_is_not_a_tree() {
        let grid = Grid::new(1, 1).unwrap();
        let report = analyze(&grid);
        assert_eq!(
            report,
            TreeReport {
                tiles: 0,
                links: 0,
                reachable: 0
            }
        );
        assert!(!report.is_spanning_tree());

        // The only tile is not the server and points off the grid.
        let grid: Grid = "1/0".parse().unwrap();
        let report = analyze(&grid);
        assert_eq!((report.tiles, report.reachable), (1, 0));
        assert!(!report.is_spanning_tree());
    }

    #[test]
    fn test_two_cell_tree() {
        let grid: Grid = "4/1".parse().unwrap();
        let report = analyze(&grid);
        assert_eq!(
            report,
            TreeReport {
                tiles: 2,
                links: 1,
                reachable: 2
            }
        );
        assert!(report.is_spanning_tree());
    }

    #[test]
    fn test_disconnected_island_is_not_a_tree() {
        // The server links left; (2, 0) and (2, 1) form a separate pair.
        let grid: Grid = "004/281/000".parse().unwrap();
        let report = analyze(&grid);
        assert_eq!(report.tiles, 4);
        assert_eq!(report.links, 2);
        assert_eq!(report.reachable, 2);
        assert!(!report.is_spanning_tree());
    }
}
