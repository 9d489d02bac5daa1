//! Connection bitmasks and the rotation transform.

/// One of the four directions a tile can connect towards.
///
/// `y` grows downward, so [`Direction::Up`] points to the row above.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards the row above.
    #[default]
    Up,
    /// Towards the next column.
    Right,
    /// Towards the row below.
    Down,
    /// Towards the previous column.
    Left,
}

impl Direction {
    /// All directions in clockwise order, starting from [`Direction::Up`].
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the direction pointing the other way.
    ///
    /// # Examples
    ///
    /// ```
    /// use netwalk_core::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Returns the single-bit connection set for this direction.
    #[must_use]
    pub const fn connection(self) -> Connections {
        match self {
            Self::Up => Connections::UP,
            Self::Right => Connections::RIGHT,
            Self::Down => Connections::DOWN,
            Self::Left => Connections::LEFT,
        }
    }
}

bitflags::bitflags! {
    /// The set of directions a tile currently exposes.
    ///
    /// The bit values are fixed: `UP = 1`, `RIGHT = 2`, `DOWN = 4`, `LEFT = 8`,
    /// so every tile state is a mask in `0..=15`.
    ///
    /// # Examples
    ///
    /// ```
    /// use netwalk_core::{Connections, Sense};
    ///
    /// let elbow = Connections::UP | Connections::RIGHT;
    /// assert_eq!(elbow.bits(), 3);
    /// assert_eq!(
    ///     elbow.rotate(1, Sense::Clockwise),
    ///     Connections::RIGHT | Connections::DOWN
    /// );
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Connections: u8 {
        /// Connected to the tile above.
        const UP = 0b0001;
        /// Connected to the tile on the right.
        const RIGHT = 0b0010;
        /// Connected to the tile below.
        const DOWN = 0b0100;
        /// Connected to the tile on the left.
        const LEFT = 0b1000;
    }
}

const GLYPHS: [char; 16] = [
    ' ', '╵', '╶', '└', '╷', '│', '┌', '├', '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼',
];

impl Connections {
    /// Rotates the mask by `steps` quarter turns in the given sense.
    ///
    /// Clockwise maps `UP → RIGHT → DOWN → LEFT → UP`; counter-clockwise is the
    /// inverse. `steps` is taken modulo 4.
    ///
    /// # Examples
    ///
    /// ```
    /// use netwalk_core::{Connections, Sense};
    ///
    /// let tee = Connections::UP | Connections::RIGHT | Connections::DOWN;
    /// assert_eq!(tee.rotate(4, Sense::Clockwise), tee);
    /// assert_eq!(
    ///     tee.rotate(1, Sense::Clockwise).rotate(1, Sense::CounterClockwise),
    ///     tee
    /// );
    /// ```
    #[must_use]
    pub const fn rotate(self, steps: u8, sense: Sense) -> Self {
        let steps = steps % 4;
        let shift = match sense {
            Sense::Clockwise => steps,
            Sense::CounterClockwise => (4 - steps) % 4,
        };
        let bits = self.bits();
        Self::from_bits_truncate((bits << shift) | (bits >> (4 - shift)))
    }

    /// Returns the shortest rotation that turns `self` into `target`.
    ///
    /// Returns `None` when no rotation of `self` equals `target` (the masks
    /// expose a different number of connections, or a different shape).
    /// Two-step rotations are reported as clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use netwalk_core::{Connections, Rotation, Sense};
    ///
    /// let rotation = Connections::LEFT.rotation_to(Connections::DOWN).unwrap();
    /// assert_eq!(rotation, Rotation::new(1, Sense::CounterClockwise));
    ///
    /// assert!(Connections::UP.rotation_to(Connections::UP | Connections::DOWN).is_none());
    /// ```
    #[must_use]
    pub fn rotation_to(self, target: Self) -> Option<Rotation> {
        (0..4)
            .find(|&steps| self.rotate(steps, Sense::Clockwise) == target)
            .map(Rotation::from_clockwise_steps)
    }

    /// Returns `true` if the mask exposes `direction`.
    #[must_use]
    pub const fn has(self, direction: Direction) -> bool {
        self.contains(direction.connection())
    }

    /// Returns the number of exposed directions.
    #[must_use]
    pub const fn degree(self) -> u32 {
        self.bits().count_ones()
    }

    /// Iterates over the exposed directions in clockwise order from `Up`.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&dir| self.has(dir))
    }

    /// Returns the box-drawing character that pictures this mask.
    ///
    /// ```
    /// use netwalk_core::Connections;
    ///
    /// assert_eq!((Connections::UP | Connections::DOWN).glyph(), '│');
    /// assert_eq!(Connections::all().glyph(), '┼');
    /// ```
    #[must_use]
    pub const fn glyph(self) -> char {
        GLYPHS[self.bits() as usize]
    }
}

/// The rotational sense of a quarter turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Sense {
    /// Clockwise.
    #[display("cw")]
    Clockwise,
    /// Counter-clockwise.
    #[display("ccw")]
    CounterClockwise,
}

impl Sense {
    /// Returns the opposite sense.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// A number of quarter turns in one sense, in the range `0..=2`.
///
/// Rotations are always normalized to the shortest form: three clockwise
/// steps are stored as one counter-clockwise step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    steps: u8,
    sense: Sense,
}

impl Rotation {
    /// The rotation that leaves a tile unchanged.
    pub const NONE: Self = Self {
        steps: 0,
        sense: Sense::Clockwise,
    };

    /// Creates a normalized rotation of `steps` quarter turns in `sense`.
    #[must_use]
    pub const fn new(steps: u8, sense: Sense) -> Self {
        let clockwise = match sense {
            Sense::Clockwise => steps % 4,
            Sense::CounterClockwise => (4 - steps % 4) % 4,
        };
        Self::from_clockwise_steps(clockwise)
    }

    /// Creates the shortest rotation equivalent to `steps` clockwise quarter turns.
    #[must_use]
    pub const fn from_clockwise_steps(steps: u8) -> Self {
        match steps % 4 {
            0 => Self::NONE,
            3 => Self {
                steps: 1,
                sense: Sense::CounterClockwise,
            },
            steps => Self {
                steps,
                sense: Sense::Clockwise,
            },
        }
    }

    /// Returns the number of quarter turns.
    #[must_use]
    pub const fn steps(self) -> u8 {
        self.steps
    }

    /// Returns the sense of the quarter turns.
    #[must_use]
    pub const fn sense(self) -> Sense {
        self.sense
    }

    /// Returns the equivalent number of clockwise quarter turns (`0..=3`).
    #[must_use]
    pub const fn clockwise_steps(self) -> u8 {
        match self.sense {
            Sense::Clockwise => self.steps,
            Sense::CounterClockwise => (4 - self.steps) % 4,
        }
    }

    /// Returns `true` for the zero rotation.
    #[must_use]
    pub const fn is_identity(self) -> bool {
        self.steps == 0
    }

    /// Applies this rotation to `connections`.
    #[must_use]
    pub const fn apply(self, connections: Connections) -> Connections {
        connections.rotate(self.steps, self.sense)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn any_connections() -> impl Strategy<Value = Connections> {
        (0u8..16).prop_map(Connections::from_bits_truncate)
    }

    fn any_sense() -> impl Strategy<Value = Sense> {
        prop_oneof![Just(Sense::Clockwise), Just(Sense::CounterClockwise)]
    }

    #[test]
    fn test_clockwise_cycle_of_single_bits() {
        let cw = |c: Connections| c.rotate(1, Sense::Clockwise);
        assert_eq!(cw(Connections::UP), Connections::RIGHT);
        assert_eq!(cw(Connections::RIGHT), Connections::DOWN);
        assert_eq!(cw(Connections::DOWN), Connections::LEFT);
        assert_eq!(cw(Connections::LEFT), Connections::UP);
    }

    #[test]
    fn test_counter_clockwise_cycle_of_single_bits() {
        let ccw = |c: Connections| c.rotate(1, Sense::CounterClockwise);
        assert_eq!(ccw(Connections::UP), Connections::LEFT);
        assert_eq!(ccw(Connections::LEFT), Connections::DOWN);
        assert_eq!(ccw(Connections::DOWN), Connections::RIGHT);
        assert_eq!(ccw(Connections::RIGHT), Connections::UP);
    }

    #[test]
    fn test_symmetric_masks_are_fixed_points() {
        assert_eq!(Connections::empty().rotate(1, Sense::Clockwise), Connections::empty());
        assert_eq!(Connections::all().rotate(3, Sense::Clockwise), Connections::all());
        let straight = Connections::UP | Connections::DOWN;
        assert_eq!(straight.rotate(2, Sense::CounterClockwise), straight);
    }

    #[test]
    fn test_rotation_to_prefers_shortest_sense() {
        let up = Connections::UP;
        assert_eq!(up.rotation_to(up), Some(Rotation::NONE));
        assert_eq!(
            up.rotation_to(Connections::RIGHT),
            Some(Rotation::new(1, Sense::Clockwise))
        );
        assert_eq!(
            up.rotation_to(Connections::DOWN),
            Some(Rotation::new(2, Sense::Clockwise))
        );
        assert_eq!(
            up.rotation_to(Connections::LEFT),
            Some(Rotation::new(1, Sense::CounterClockwise))
        );
    }

    #[test]
    fn test_rotation_to_straight_pipe_needs_at_most_one_step() {
        let vertical = Connections::UP | Connections::DOWN;
        let horizontal = Connections::LEFT | Connections::RIGHT;
        let rotation = vertical.rotation_to(horizontal).unwrap();
        assert_eq!(rotation.steps(), 1);
        assert!(rotation.sense().is_clockwise());
    }

    #[test]
    fn test_rotation_normalization() {
        assert_eq!(Rotation::new(3, Sense::Clockwise), Rotation::new(1, Sense::CounterClockwise));
        assert_eq!(Rotation::new(4, Sense::CounterClockwise), Rotation::NONE);
        assert_eq!(Rotation::new(2, Sense::CounterClockwise), Rotation::new(2, Sense::Clockwise));
        assert_eq!(Rotation::new(1, Sense::CounterClockwise).clockwise_steps(), 3);
    }

    #[test]
    fn test_directions_and_degree() {
        let tee = Connections::RIGHT | Connections::DOWN | Connections::LEFT;
        assert_eq!(tee.degree(), 3);
        assert_eq!(
            tee.directions().collect::<Vec<_>>(),
            vec![Direction::Right, Direction::Down, Direction::Left]
        );
    }

    #[test]
    fn test_glyphs_follow_bit_layout() {
        assert_eq!(Connections::empty().glyph(), ' ');
        assert_eq!((Connections::UP | Connections::RIGHT).glyph(), '└');
        assert_eq!((Connections::DOWN | Connections::LEFT).glyph(), '┐');
        assert_eq!((Connections::LEFT | Connections::UP | Connections::RIGHT).glyph(), '┴');
    }

    proptest! {
        #[test]
        fn prop_four_quarter_turns_are_identity(c in any_connections(), sense in any_sense()) {
            let turned = c
                .rotate(1, sense)
                .rotate(1, sense)
                .rotate(1, sense)
                .rotate(1, sense);
            prop_assert_eq!(turned, c);
            prop_assert_eq!(c.rotate(4, sense), c);
        }

        #[test]
        fn prop_counter_clockwise_undoes_clockwise(c in any_connections(), steps in 0u8..8) {
            prop_assert_eq!(
                c.rotate(steps, Sense::Clockwise).rotate(steps, Sense::CounterClockwise),
                c
            );
        }

        #[test]
        fn prop_rotation_preserves_degree(c in any_connections(), steps in 0u8..4, sense in any_sense()) {
            prop_assert_eq!(c.rotate(steps, sense).degree(), c.degree());
        }

        #[test]
        fn prop_rotation_to_reaches_every_rotated_mask(c in any_connections(), steps in 0u8..4) {
            let target = c.rotate(steps, Sense::Clockwise);
            let rotation = c.rotation_to(target).unwrap();
            prop_assert!(rotation.steps() <= 2);
            prop_assert_eq!(rotation.apply(c), target);
        }
    }
}
