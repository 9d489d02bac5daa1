use netwalk_core::{Grid, Position, PositionSet, Sense, connected_cells};
use netwalk_generator::{GeneratedPuzzle, PuzzleSeed};
use netwalk_solver::{GreedySolver, Move, Solver, TreeSolver};

use crate::GameError;

/// The lifecycle state of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum GameStatus {
    /// A puzzle is being generated; no board is available yet.
    #[display("generating")]
    Generating,
    /// The puzzle accepts rotations.
    #[display("playing")]
    Playing,
    /// The live grid matches the solution. Terminal until a new game.
    #[display("solved")]
    Solved,
}

/// Rotation counts since the last restart or new game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCounters {
    /// Rotations requested by the player.
    pub player: usize,
    /// Rotations replayed from a solver's move list.
    pub replayed: usize,
}

impl MoveCounters {
    /// Returns the sum of both counters.
    #[must_use]
    pub const fn total(self) -> usize {
        self.player + self.replayed
    }
}

/// How many tiles are currently connected to the server.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{active}/{total}")]
pub struct Progress {
    /// Tiles reachable from the server, including the server.
    pub active: usize,
    /// Non-blank tiles in the grid.
    pub total: usize,
}

/// The effect of a rotation request that was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum RotationOutcome {
    /// The tile was turned and counted as a move.
    Rotated,
    /// The tile is blank; nothing changed and no move was counted.
    Unchanged,
}

/// A network puzzle in progress.
///
/// Holds the solution, the scrambled starting position used by
/// [`restart`](Self::restart), and the live grid that rotations act on.
///
/// # Examples
///
/// ```
/// use netwalk_core::{Position, Sense};
/// use netwalk_game::{Game, GameStatus};
/// use netwalk_generator::{GeneratedPuzzle, PuzzleSeed};
///
/// let puzzle = GeneratedPuzzle {
///     solution: "040/290/000".parse()?,
///     scrambled: "040/490/000".parse()?,
///     seed: PuzzleSeed::from_bytes([0; 32]),
/// };
/// let mut game = Game::new(puzzle);
/// assert_eq!(game.status(), GameStatus::Playing);
///
/// game.rotate_tile(Position::new(0, 1), Sense::CounterClockwise)?;
/// assert!(game.is_solved());
/// assert_eq!(game.status(), GameStatus::Solved);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    solution: Grid,
    scrambled: Grid,
    live: Grid,
    seed: PuzzleSeed,
    status: GameStatus,
    counters: MoveCounters,
}

impl Game {
    /// Creates a game from a generated puzzle.
    ///
    /// The game starts in [`GameStatus::Playing`] with the scrambled grid as
    /// the live grid, even if the scramble happened to leave every tile in
    /// place. [`is_solved`](Self::is_solved) is then already `true`, and the
    /// status only becomes [`GameStatus::Solved`] once a move lands on the
    /// solution.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            solution,
            scrambled,
            seed,
        } = puzzle;
        let live = scrambled.clone();
        Self {
            solution,
            scrambled,
            live,
            seed,
            status: GameStatus::Playing,
            counters: MoveCounters::default(),
        }
    }

    /// Returns the grid that rotations act on.
    #[must_use]
    pub fn live(&self) -> &Grid {
        &self.live
    }

    /// Returns the target configuration.
    #[must_use]
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns the starting configuration restored by [`restart`](Self::restart).
    #[must_use]
    pub fn scrambled(&self) -> &Grid {
        &self.scrambled
    }

    /// Returns the seed the puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move counters.
    #[must_use]
    pub fn counters(&self) -> MoveCounters {
        self.counters
    }

    /// Rotates the tile at `pos` by one quarter turn, as a player move.
    ///
    /// Rotating a blank tile is accepted but changes nothing and is not
    /// counted. A rotation that makes the live grid equal to the solution
    /// moves the game to [`GameStatus::Solved`].
    ///
    /// # Errors
    ///
    /// - [`GameError::Grid`] if `pos` is outside the grid.
    /// - [`GameError::IllegalRotation`] if `pos` is the server.
    /// - [`GameError::AlreadySolved`] if the puzzle is solved.
    ///
    /// The game is unchanged on error.
    pub fn rotate_tile(
        &mut self,
        pos: Position,
        sense: Sense,
    ) -> Result<RotationOutcome, GameError> {
        let outcome = self.turn(pos, sense)?;
        if outcome.is_rotated() {
            self.counters.player += 1;
        }
        Ok(outcome)
    }

    /// Applies one solver move, counting it as a replayed move.
    ///
    /// # Errors
    ///
    /// Same as [`rotate_tile`](Self::rotate_tile).
    pub fn apply_move(&mut self, mv: Move) -> Result<RotationOutcome, GameError> {
        let outcome = self.turn(mv.position, mv.sense)?;
        if outcome.is_rotated() {
            self.counters.replayed += 1;
        }
        Ok(outcome)
    }

    fn turn(&mut self, pos: Position, sense: Sense) -> Result<RotationOutcome, GameError> {
        self.check_rotation(pos).inspect_err(|err| {
            log::debug!("rejected rotation at {pos}: {err}");
        })?;
        if self.live[pos].is_empty() {
            return Ok(RotationOutcome::Unchanged);
        }

        self.live.rotate(pos, sense)?;
        if self.is_solved() {
            self.status = GameStatus::Solved;
            log::info!(
                "puzzle {} solved after {} moves",
                self.seed,
                self.counters.total() + 1
            );
        }
        Ok(RotationOutcome::Rotated)
    }

    fn check_rotation(&self, pos: Position) -> Result<(), GameError> {
        self.live.check(pos)?;
        if pos == self.live.server() {
            return Err(GameError::IllegalRotation { position: pos });
        }
        if self.status.is_solved() {
            return Err(GameError::AlreadySolved);
        }
        Ok(())
    }

    /// Restores the scrambled starting position and resets the counters.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySolved`] if the puzzle is solved.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if self.status.is_solved() {
            return Err(GameError::AlreadySolved);
        }
        self.live.clone_from(&self.scrambled);
        self.counters = MoveCounters::default();
        log::info!("puzzle {} restarted", self.seed);
        Ok(())
    }

    /// Returns `true` if every live tile equals its solution tile.
    ///
    /// Connecting every tile to the server is not enough; the masks must
    /// match exactly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.live == self.solution
    }

    /// Returns the tiles currently connected to the server.
    #[must_use]
    pub fn connected_cells(&self) -> PositionSet {
        connected_cells(&self.live)
    }

    /// Returns the connected and total tile counts.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            active: self.connected_cells().len(),
            total: self.live.count_non_blank(),
        }
    }

    /// Computes the moves that solve the live grid with `solver`.
    ///
    /// The game is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solver`] if the solver fails.
    pub fn solve_with<S>(&self, solver: &S) -> Result<Vec<Move>, GameError>
    where
        S: Solver + ?Sized,
    {
        Ok(solver.solve(&self.live, &self.solution)?)
    }

    /// Computes a move list with [`GreedySolver`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solver`] if the solver fails.
    pub fn solve_greedy(&self) -> Result<Vec<Move>, GameError> {
        self.solve_with(&GreedySolver::new())
    }

    /// Computes a move list with [`TreeSolver`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solver`] if the solver fails.
    pub fn solve_optimal(&self) -> Result<Vec<Move>, GameError> {
        self.solve_with(&TreeSolver::new())
    }
}
