/// The standard puzzle sizes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GridPreset {
    /// 5×5.
    #[display("5x5")]
    Small,
    /// 7×7.
    #[default]
    #[display("7x7")]
    Medium,
    /// 9×9.
    #[display("9x9")]
    Large,
    /// 11×11.
    #[display("11x11")]
    Huge,
}

impl GridPreset {
    /// All presets from smallest to largest.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Huge];

    /// Returns `(width, height)`.
    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            Self::Small => (5, 5),
            Self::Medium => (7, 7),
            Self::Large => (9, 9),
            Self::Huge => (11, 11),
        }
    }
}
