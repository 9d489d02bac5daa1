use std::fmt::Debug;

use netwalk_core::{Grid, GridError, Position, Rotation};

use crate::{GreedySolver, Move, TreeSolver};

/// Errors raised when a move list cannot be computed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The live and solution grids have different shapes.
    #[display(
        "live grid is {live_width}x{live_height} but solution is {solution_width}x{solution_height}"
    )]
    DimensionMismatch {
        /// Width of the live grid.
        live_width: usize,
        /// Height of the live grid.
        live_height: usize,
        /// Width of the solution grid.
        solution_width: usize,
        /// Height of the solution grid.
        solution_height: usize,
    },
    /// The server tiles differ; the server cannot be rotated.
    #[display("server at {position} does not match the solution")]
    ServerMismatch {
        /// The server position.
        position: Position,
    },
    /// No rotation of the live tile equals the solution tile.
    #[display("tile at {position} cannot be rotated into the solution")]
    UnreachableTarget {
        /// The offending tile.
        position: Position,
    },
    /// A grid operation failed.
    #[display("grid error: {_0}")]
    #[from]
    Grid(GridError),
}

/// A strategy that turns a live grid into its solution.
pub trait Solver: Debug + Send + Sync {
    /// Returns the name of the solver.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the solver.
    fn clone_box(&self) -> BoxedSolver;

    /// Computes the ordered quarter turns that transform `live` into `solution`.
    ///
    /// Neither grid is modified.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] when the grids differ in size,
    /// [`SolverError::ServerMismatch`] when the server tiles differ, and
    /// [`SolverError::UnreachableTarget`] when some tile is not a rotation of
    /// its target.
    fn solve(&self, live: &Grid, solution: &Grid) -> Result<Vec<Move>, SolverError>;
}

/// A boxed solver.
pub type BoxedSolver = Box<dyn Solver>;

impl Clone for BoxedSolver {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns every available solver, fastest first.
#[must_use]
pub fn all_solvers() -> Vec<BoxedSolver> {
    vec![Box::new(GreedySolver::new()), Box::new(TreeSolver::new())]
}

pub(crate) fn check_dimensions(live: &Grid, solution: &Grid) -> Result<(), SolverError> {
    if live.same_shape(solution) {
        Ok(())
    } else {
        Err(SolverError::DimensionMismatch {
            live_width: live.width(),
            live_height: live.height(),
            solution_width: solution.width(),
            solution_height: solution.height(),
        })
    }
}

/// Returns the shortest rotation that turns the live tile at `pos` into its solution.
///
/// The server is never rotated, so it yields [`Rotation::NONE`] when it
/// already matches and [`SolverError::ServerMismatch`] otherwise.
///
/// # Errors
///
/// Returns [`SolverError::Grid`] if `pos` is out of bounds, and the mismatch
/// errors described above.
///
/// # Examples
///
/// ```
/// use netwalk_core::{Grid, Position, Rotation, Sense};
/// use netwalk_solver::tile_rotation;
///
/// let solution: Grid = "040/290/000".parse()?;
/// let live: Grid = "040/490/000".parse()?;
///
/// let rotation = tile_rotation(&live, &solution, Position::new(0, 1))?;
/// assert_eq!(rotation, Rotation::new(1, Sense::CounterClockwise));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn tile_rotation(live: &Grid, solution: &Grid, pos: Position) -> Result<Rotation, SolverError> {
    live.check(pos)?;
    solution.check(pos)?;
    let (current, target) = (live[pos], solution[pos]);
    if pos == solution.server() {
        return if current == target {
            Ok(Rotation::NONE)
        } else {
            Err(SolverError::ServerMismatch { position: pos })
        };
    }
    current
        .rotation_to(target)
        .ok_or(SolverError::UnreachableTarget { position: pos })
}

/// Expands a per-tile rotation into single quarter-turn moves.
pub(crate) fn push_moves(moves: &mut Vec<Move>, pos: Position, rotation: Rotation) {
    let mv = Move::new(pos, rotation.sense());
    moves.extend(std::iter::repeat_n(mv, usize::from(rotation.steps())));
}

#[cfg(test)]
mod tests {
    use netwalk_core::Sense;

    use super::*;

    #[test]
    fn test_check_dimensions() {
        let a = Grid::new(3, 3).unwrap();
        let b = Grid::new(3, 4).unwrap();
        assert!(check_dimensions(&a, &a).is_ok());
        assert_eq!(
            check_dimensions(&a, &b),
            Err(SolverError::DimensionMismatch {
                live_width: 3,
                live_height: 3,
                solution_width: 3,
                solution_height: 4,
            })
        );
    }

    #[test]
    fn test_tile_rotation_prefers_fewest_steps() {
        let solution: Grid = "040/290/000".parse().unwrap();
        let cases = [
            ("040/290/000", Rotation::NONE),
            ("040/190/000", Rotation::new(1, Sense::Clockwise)),
            ("040/890/000", Rotation::new(2, Sense::Clockwise)),
            ("040/490/000", Rotation::new(1, Sense::CounterClockwise)),
        ];
        for (live, expected) in cases {
            let live: Grid = live.parse().unwrap();
            assert_eq!(
                tile_rotation(&live, &solution, Position::new(0, 1)).unwrap(),
                expected,
                "live grid {live}"
            );
        }
    }

    #[test]
    fn test_tile_rotation_server_mismatch() {
        let solution: Grid = "040/290/000".parse().unwrap();
        let live: Grid = "040/2c0/000".parse().unwrap();
        assert_eq!(
            tile_rotation(&live, &solution, Position::new(1, 1)),
            Err(SolverError::ServerMismatch {
                position: Position::new(1, 1)
            })
        );
    }

    #[test]
    fn test_tile_rotation_unreachable_target() {
        let solution: Grid = "040/290/000".parse().unwrap();
        let live: Grid = "040/a90/000".parse().unwrap();
        assert_eq!(
            tile_rotation(&live, &solution, Position::new(0, 1)),
            Err(SolverError::UnreachableTarget {
                position: Position::new(0, 1)
            })
        );
    }

    #[test]
    fn test_tile_rotation_out_of_bounds() {
        let grid: Grid = "040/290/000".parse().unwrap();
        assert!(matches!(
            tile_rotation(&grid, &grid, Position::new(3, 0)),
            Err(SolverError::Grid(GridError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_grid_errors_convert() {
        fn rotate(grid: &mut Grid, pos: Position) -> Result<(), SolverError> {
            grid.rotate(pos, Sense::Clockwise)?;
            Ok(())
        }

        let mut grid: Grid = "040/290/000".parse().unwrap();
        assert!(rotate(&mut grid, Position::new(0, 1)).is_ok());
        assert_eq!(
            rotate(&mut grid, Position::new(0, 3)),
            Err(SolverError::from(GridError::OutOfBounds {
                position: Position::new(0, 3),
                width: 3,
                height: 3,
            }))
        );
    }

    #[test]
    fn test_all_solvers_have_distinct_names() {
        let solvers = all_solvers();
        assert_eq!(solvers.len(), 2);
        assert_ne!(solvers[0].name(), solvers[1].name());
        let cloned = solvers.clone();
        assert_eq!(cloned[1].name(), solvers[1].name());
    }
}
