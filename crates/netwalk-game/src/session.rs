use netwalk_core::{Grid, Position, PositionSet, Sense};
use netwalk_generator::{PuzzleGenerator, PuzzleSeed};
use netwalk_solver::Move;

use crate::{Game, GameError, GameStatus, MoveCounters, NewGameOptions, Progress};

/// A snapshot of the session returned by every mutating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// The live grid.
    pub live: Grid,
    /// The game status.
    pub status: GameStatus,
    /// Moves since the last restart or new game.
    pub counters: MoveCounters,
    /// Connected and total tile counts.
    pub progress: Progress,
    /// The seed that reproduces the puzzle.
    pub seed: PuzzleSeed,
    /// Whether a solution is held for the puzzle. The solution grid itself is
    /// not part of the snapshot.
    pub has_solution: bool,
}

impl SessionState {
    fn capture(game: &Game) -> Self {
        let live = game.live().clone();
        Self {
            width: live.width(),
            height: live.height(),
            live,
            status: game.status(),
            counters: game.counters(),
            progress: game.progress(),
            seed: game.seed(),
            has_solution: true,
        }
    }
}

/// The entry point for front-ends: owns at most one [`Game`] at a time.
///
/// Operations other than [`new_game`](Self::new_game) fail with
/// [`GameError::NoActiveGame`] until a game has been started.
///
/// # Examples
///
/// ```
/// use netwalk_game::{GameSession, GameStatus, NewGameOptions};
///
/// let mut session = GameSession::new();
/// assert_eq!(session.status(), GameStatus::Generating);
///
/// let state = session.new_game(&NewGameOptions::default().with_size(5, 5))?;
/// assert_eq!(state.status, GameStatus::Playing);
///
/// for mv in session.solve_optimal()? {
///     session.apply_move(mv)?;
/// }
/// assert!(session.check_win()?);
/// # Ok::<(), netwalk_game::GameError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct GameSession {
    game: Option<Game>,
}

impl GameSession {
    /// Creates a session with no game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game, if any.
    ///
    /// The game exposes its solution grid, so front-ends that must not spoil
    /// the puzzle should stick to [`SessionState`] snapshots.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Returns the status, or [`GameStatus::Generating`] before the first game.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game.as_ref().map_or(GameStatus::Generating, Game::status)
    }

    fn game_ref(&self) -> Result<&Game, GameError> {
        self.game.as_ref().ok_or(GameError::NoActiveGame)
    }

    fn game_mut(&mut self) -> Result<&mut Game, GameError> {
        self.game.as_mut().ok_or(GameError::NoActiveGame)
    }

    /// Generates and starts a fresh puzzle, replacing the current game.
    ///
    /// The game always starts in [`GameStatus::Playing`]. A scramble may leave
    /// every tile in place, in which case [`check_win`](Self::check_win) is
    /// already `true` and the first rotation moves the board away from the
    /// solution.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Generator`] if the dimensions are invalid. The
    /// current game, if any, is kept.
    pub fn new_game(&mut self, options: &NewGameOptions) -> Result<SessionState, GameError> {
        let generator = PuzzleGenerator::new(options.width, options.height)?;
        let seed = options.seed.unwrap_or_else(PuzzleSeed::random);
        log::debug!(
            "generating {}x{} puzzle from seed {seed}",
            options.width,
            options.height
        );
        let game = Game::new(generator.generate_with_seed(seed));
        log::info!("new {}x{} game, seed={seed}", options.width, options.height);
        Ok(SessionState::capture(self.game.insert(game)))
    }

    /// Returns a snapshot of the current game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no game has been started.
    pub fn state(&self) -> Result<SessionState, GameError> {
        Ok(SessionState::capture(self.game_ref()?))
    }

    /// Rotates the tile at `(x, y)` by one quarter turn.
    ///
    /// # Errors
    ///
    /// See [`Game::rotate_tile`]; also [`GameError::NoActiveGame`].
    pub fn rotate_tile(
        &mut self,
        x: usize,
        y: usize,
        sense: Sense,
    ) -> Result<SessionState, GameError> {
        let game = self.game_mut()?;
        game.rotate_tile(Position::new(x, y), sense)?;
        Ok(SessionState::capture(game))
    }

    /// Applies one solver move to the live grid.
    ///
    /// # Errors
    ///
    /// See [`Game::apply_move`]; also [`GameError::NoActiveGame`].
    pub fn apply_move(&mut self, mv: Move) -> Result<SessionState, GameError> {
        let game = self.game_mut()?;
        game.apply_move(mv)?;
        Ok(SessionState::capture(game))
    }

    /// Restores the scrambled starting position of the current puzzle.
    ///
    /// # Errors
    ///
    /// See [`Game::restart`]; also [`GameError::NoActiveGame`].
    pub fn restart(&mut self) -> Result<SessionState, GameError> {
        let game = self.game_mut()?;
        game.restart()?;
        Ok(SessionState::capture(game))
    }

    /// Computes a move list with the greedy solver. The session is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] or [`GameError::Solver`].
    pub fn solve_greedy(&self) -> Result<Vec<Move>, GameError> {
        self.game_ref()?.solve_greedy()
    }

    /// Computes a move list with the tree solver. The session is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] or [`GameError::Solver`].
    pub fn solve_optimal(&self) -> Result<Vec<Move>, GameError> {
        self.game_ref()?.solve_optimal()
    }

    /// Returns the tiles connected to the server.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no game has been started.
    pub fn connected_cells(&self) -> Result<PositionSet, GameError> {
        Ok(self.game_ref()?.connected_cells())
    }

    /// Returns `true` if the live grid equals the solution.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no game has been started.
    pub fn check_win(&self) -> Result<bool, GameError> {
        Ok(self.game_ref()?.is_solved())
    }
}
