use netwalk_generator::{GridPreset, PuzzleSeed};

/// Options for starting a new game.
///
/// Defaults to the [`GridPreset::Medium`] size with a random seed.
///
/// # Examples
///
/// ```
/// use netwalk_game::NewGameOptions;
/// use netwalk_generator::{GridPreset, PuzzleSeed};
///
/// let options = NewGameOptions::from(GridPreset::Small).with_seed(PuzzleSeed::from_bytes([1; 32]));
/// assert_eq!((options.width, options.height), (5, 5));
///
/// let options = NewGameOptions::default().with_size(12, 8);
/// assert_eq!(options.seed, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewGameOptions {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Seed to reproduce a specific puzzle; a random one is drawn when `None`.
    pub seed: Option<PuzzleSeed>,
}

impl Default for NewGameOptions {
    fn default() -> Self {
        GridPreset::default().into()
    }
}

impl From<GridPreset> for NewGameOptions {
    fn from(preset: GridPreset) -> Self {
        let (width, height) = preset.dimensions();
        Self {
            width,
            height,
            seed: None,
        }
    }
}

impl NewGameOptions {
    /// Sets the grid size.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: PuzzleSeed) -> Self {
        self.seed = Some(seed);
        self
    }
}
