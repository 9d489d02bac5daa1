use netwalk_core::{Grid, GridError, Position, Sense};

/// A single quarter turn of one tile.
///
/// # Examples
///
/// ```
/// use netwalk_core::{Grid, Position, Sense};
/// use netwalk_solver::Move;
///
/// let mut grid: Grid = "040/2b8/000".parse()?;
/// let mv = Move::new(Position::new(0, 1), Sense::CounterClockwise);
/// assert_eq!(mv.to_string(), "(0, 1, ccw)");
///
/// mv.apply(&mut grid)?;
/// assert_eq!(grid.to_string(), "040/1b8/000".replace('/', "\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({}, {}, {sense})", position.x(), position.y())]
pub struct Move {
    /// The tile to turn.
    pub position: Position,
    /// The direction of the quarter turn.
    pub sense: Sense,
}

impl Move {
    /// Creates a move.
    #[must_use]
    pub const fn new(position: Position, sense: Sense) -> Self {
        Self { position, sense }
    }

    /// Applies the move to `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the position is outside the grid.
    pub fn apply(self, grid: &mut Grid) -> Result<(), GridError> {
        grid.rotate(self.position, self.sense)?;
        Ok(())
    }
}

/// Applies `moves` to `grid` in order.
///
/// # Errors
///
/// Returns [`GridError::OutOfBounds`] at the first move outside the grid. Moves
/// before it have already been applied.
pub fn apply_moves<'a, I>(grid: &mut Grid, moves: I) -> Result<(), GridError>
where
    I: IntoIterator<Item = &'a Move>,
{
    for mv in moves {
        mv.apply(grid)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use netwalk_core::Connections;

    use super::*;

    #[test]
    fn test_opposite_turns_restore_grid() {
        let original: Grid = "6ac/785/381".parse().unwrap();
        let mut grid = original.clone();
        let pos = Position::new(2, 0);
        Move::new(pos, Sense::Clockwise).apply(&mut grid).unwrap();
        assert_ne!(grid, original);
        Move::new(pos, Sense::CounterClockwise).apply(&mut grid).unwrap();
        assert_eq!(grid, original);
    }

    #[test]
    fn test_apply_moves_stops_at_out_of_bounds() {
        let mut grid: Grid = "6ac/785/381".parse().unwrap();
        let moves = [
            Move::new(Position::new(0, 0), Sense::Clockwise),
            Move::new(Position::new(5, 5), Sense::Clockwise),
        ];
        assert!(matches!(
            apply_moves(&mut grid, &moves),
            Err(GridError::OutOfBounds { .. })
        ));
        assert_eq!(grid[Position::new(0, 0)], Connections::DOWN | Connections::LEFT);
    }
}
