//! Test harness for solver implementations.
//!
//! [`SolverTester`] holds a solution and a live grid, runs a solver on them and
//! checks the produced moves by replaying them.

use netwalk_core::Grid;

use crate::{Move, Solver, apply_moves};

/// A fluent harness for checking [`Solver`] output.
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SolverTester {
    solution: Grid,
    live: Grid,
    moves: Vec<Move>,
}

impl SolverTester {
    /// Creates a tester from the solution and live grids in text form.
    ///
    /// # Panics
    ///
    /// Panics if either string is not a valid grid.
    #[track_caller]
    pub fn new(solution: &str, live: &str) -> Self {
        Self {
            solution: solution.parse().unwrap(),
            live: live.parse().unwrap(),
            moves: Vec::new(),
        }
    }

    /// Runs `solver` and records its moves.
    ///
    /// # Panics
    ///
    /// Panics if the solver returns an error.
    #[track_caller]
    pub fn solve<S>(mut self, solver: &S) -> Self
    where
        S: Solver + ?Sized,
    {
        self.moves = solver.solve(&self.live, &self.solution).unwrap();
        self
    }

    /// Asserts the number of recorded moves.
    #[track_caller]
    pub fn assert_move_count(self, expected: usize) -> Self {
        assert_eq!(
            self.moves.len(),
            expected,
            "unexpected move count, moves: {:?}",
            self.moves
        );
        self
    }

    /// Asserts the exact move sequence.
    #[track_caller]
    pub fn assert_moves(self, expected: &[Move]) -> Self {
        assert_eq!(self.moves, expected);
        self
    }

    /// Asserts that replaying the moves on the live grid yields the solution.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        let mut grid = self.live.clone();
        apply_moves(&mut grid, &self.moves).unwrap();
        assert_eq!(
            grid, self.solution,
            "replayed grid:\n{grid}\nexpected:\n{}",
            self.solution
        );
        self
    }
}
