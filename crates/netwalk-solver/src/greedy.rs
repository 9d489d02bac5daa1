use netwalk_core::{Grid, Position, Rotation};

use crate::{
    BoxedSolver, Move, Solver, SolverError,
    solver::{check_dimensions, push_moves, tile_rotation},
};

/// A single-pass solver that fixes the most-rotated tiles first.
///
/// Every tile gets its shortest rotation. Tiles are ranked by the number of
/// quarter turns they need, descending, with row-major order breaking ties.
/// The move count equals the sum of per-tile minimums, which is optimal.
///
/// # Examples
///
/// ```
/// use netwalk_core::{Grid, Position, Sense};
/// use netwalk_solver::{GreedySolver, Move, Solver as _};
///
/// let solution: Grid = "040/290/000".parse()?;
/// let live: Grid = "040/490/000".parse()?;
///
/// let moves = GreedySolver::new().solve(&live, &solution)?;
/// assert_eq!(moves, [Move::new(Position::new(0, 1), Sense::CounterClockwise)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySolver {}

impl GreedySolver {
    /// Creates a new `GreedySolver`.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn clone_box(&self) -> BoxedSolver {
        Box::new(*self)
    }

    fn solve(&self, live: &Grid, solution: &Grid) -> Result<Vec<Move>, SolverError> {
        check_dimensions(live, solution)?;

        let mut ranked: Vec<(Position, Rotation)> = Vec::new();
        for pos in live.differences(solution) {
            let rotation = tile_rotation(live, solution, pos)?;
            debug_assert!(!rotation.is_identity());
            ranked.push((pos, rotation));
        }
        ranked.sort_by_key(|(_, rotation)| std::cmp::Reverse(rotation.steps()));

        let mut moves = Vec::new();
        let mut work = live.clone();
        for (pos, rotation) in ranked {
            let start = moves.len();
            push_moves(&mut moves, pos, rotation);
            for mv in &moves[start..] {
                mv.apply(&mut work)?;
            }
        }
        debug_assert_eq!(work, *solution);

        log::debug!("greedy solver: {} moves", moves.len());
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use netwalk_core::Sense;

    use super::*;
    use crate::testing::SolverTester;

    #[test]
    fn test_single_scrambled_tile() {
        SolverTester::new("040/290/000", "040/490/000")
            .solve(&GreedySolver::new())
            .assert_moves(&[Move::new(Position::new(0, 1), Sense::CounterClockwise)])
            .assert_solved();
    }

    #[test]
    fn test_already_solved_needs_no_moves() {
        SolverTester::new("6ac/785/381", "6ac/785/381")
            .solve(&GreedySolver::new())
            .assert_move_count(0)
            .assert_solved();
    }

    #[test]
    fn test_most_rotated_tiles_come_first() {
        // (0,0) needs one clockwise turn, (2,0) needs two.
        SolverTester::new("6ac/785/381", "3a3/785/381")
            .solve(&GreedySolver::new())
            .assert_moves(&[
                Move::new(Position::new(2, 0), Sense::Clockwise),
                Move::new(Position::new(2, 0), Sense::Clockwise),
                Move::new(Position::new(0, 0), Sense::Clockwise),
            ])
            .assert_solved();
    }

    #[test]
    fn test_dimension_mismatch() {
        let live = Grid::new(3, 3).unwrap();
        let solution = Grid::new(4, 3).unwrap();
        assert!(matches!(
            GreedySolver::new().solve(&live, &solution),
            Err(SolverError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_unreachable_target() {
        let solution: Grid = "040/290/000".parse().unwrap();
        let live: Grid = "040/290/200".parse().unwrap();
        assert_eq!(
            GreedySolver::new().solve(&live, &solution),
            Err(SolverError::UnreachableTarget {
                position: Position::new(0, 2)
            })
        );
    }
}
