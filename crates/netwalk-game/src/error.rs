use netwalk_core::{GridError, Position};
use netwalk_generator::GeneratorError;
use netwalk_solver::SolverError;

/// Errors raised by game and session operations.
///
/// A failed operation never changes the game state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The position is outside the grid.
    #[display("{_0}")]
    #[from]
    Grid(GridError),
    /// The server tile cannot be rotated.
    #[display("the server at {position} cannot be rotated")]
    IllegalRotation {
        /// The server position.
        position: Position,
    },
    /// A new puzzle could not be generated.
    #[display("{_0}")]
    #[from]
    Generator(GeneratorError),
    /// A solver could not compute a move list.
    #[display("{_0}")]
    #[from]
    Solver(SolverError),
    /// No game has been started in the session.
    #[display("no game in progress")]
    NoActiveGame,
    /// The puzzle is solved; start a new game to keep playing.
    #[display("the puzzle is already solved")]
    AlreadySolved,
}

#[cfg(test)]
mod tests {
    use netwalk_core::Grid;
    use netwalk_generator::PuzzleGenerator;
    use netwalk_solver::{GreedySolver, Solver as _};

    use super::*;

    fn check(grid: &Grid, pos: Position) -> Result<(), GameError> {
        grid.check(pos)?;
        Ok(())
    }

    #[test]
    fn test_source_errors_convert() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(check(&grid, Position::new(1, 1)).is_ok());
        assert!(matches!(
            check(&grid, Position::new(2, 0)),
            Err(GameError::Grid(GridError::OutOfBounds { .. }))
        ));

        let generator = PuzzleGenerator::new(1, 1).map_err(GameError::from);
        assert!(matches!(
            generator,
            Err(GameError::Generator(GeneratorError::Grid(_)))
        ));

        let taller = Grid::new(2, 3).unwrap();
        let moves = GreedySolver::new()
            .solve(&grid, &taller)
            .map_err(GameError::from);
        assert!(matches!(
            moves,
            Err(GameError::Solver(SolverError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn test_messages() {
        let position = Position::new(3, 3);
        assert_eq!(
            GameError::IllegalRotation { position }.to_string(),
            format!("the server at {position} cannot be rotated")
        );
        assert_eq!(GameError::NoActiveGame.to_string(), "no game in progress");
    }
}
