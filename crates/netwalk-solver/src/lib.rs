//! Solvers for the network puzzle.
//!
//! A solver takes the live grid and the solution grid and returns the ordered
//! quarter turns that transform one into the other. Both grids are left
//! untouched; replaying the moves is up to the caller.
//!
//! - [`GreedySolver`] ranks tiles by how far they are from their target.
//! - [`TreeSolver`] walks the solution tree from the server and reuses the cost
//!   of repeated subtrees.
//!
//! Both produce the minimum number of moves.
//!
//! # Examples
//!
//! ```
//! use netwalk_core::Grid;
//! use netwalk_solver::{Solver as _, all_solvers, apply_moves};
//!
//! let solution: Grid = "6ac/785/381".parse()?;
//! let live: Grid = "3a3/785/381".parse()?;
//!
//! for solver in all_solvers() {
//!     let moves = solver.solve(&live, &solution)?;
//!     let mut grid = live.clone();
//!     apply_moves(&mut grid, &moves)?;
//!     assert_eq!(grid, solution, "{}", solver.name());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    greedy::GreedySolver,
    moves::{Move, apply_moves},
    solver::{BoxedSolver, Solver, SolverError, all_solvers, tile_rotation},
    tree::{TreePlan, TreeSolver},
};

mod greedy;
mod moves;
mod solver;
#[cfg(test)]
mod testing;
mod tree;
