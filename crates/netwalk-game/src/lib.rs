//! Game state for the network puzzle.
//!
//! [`Game`] holds one puzzle: the solution, the scrambled starting position and
//! the live grid the player rotates. [`GameSession`] wraps it for front-ends,
//! creating new games from [`NewGameOptions`] and returning a [`SessionState`]
//! snapshot after every change.
//!
//! Winning requires the live grid to equal the solution tile for tile;
//! connecting every tile to the server is only reported as [`Progress`].

pub use self::{
    error::GameError,
    game::{Game, GameStatus, MoveCounters, Progress, RotationOutcome},
    options::NewGameOptions,
    session::{GameSession, SessionState},
};

mod error;
mod game;
mod options;
mod session;
