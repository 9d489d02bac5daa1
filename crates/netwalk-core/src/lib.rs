//! Core data structures for the network puzzle.
//!
//! This crate provides the types shared by generation, solving and game
//! management:
//!
//! - [`Connections`], [`Direction`], [`Sense`] and [`Rotation`]: the four-bit
//!   tile mask and its rotation transform.
//! - [`Position`] and [`Grid`]: coordinates and the W×H tile container, with
//!   tile classification through [`TileType`].
//! - [`connected_cells`] and [`PositionSet`]: reachability from the server over
//!   the current masks, honoring mutual adjacency.
//! - [`tree`]: spanning-tree validation of a grid's link graph.
//!
//! # Examples
//!
//! ```
//! use netwalk_core::{Grid, Position, Sense, connected_cells};
//!
//! let solution: Grid = "040/2b8/000".parse()?;
//! let mut live = solution.clone();
//! live.rotate(Position::new(0, 1), Sense::Clockwise)?;
//!
//! assert_ne!(live, solution);
//! assert_eq!(connected_cells(&live).len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod connections;
pub mod connectivity;
pub mod grid;
pub mod position;
pub mod tree;

pub use self::{
    connections::{Connections, Direction, Rotation, Sense},
    connectivity::{PositionSet, connected_cells},
    grid::{Grid, GridError, ParseGridError, TileType},
    position::Position,
};
