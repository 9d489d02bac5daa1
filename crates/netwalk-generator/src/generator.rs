use netwalk_core::{Direction, Grid, GridError, PositionSet};
use rand::seq::{IndexedRandom as _, SliceRandom as _};
use rand_pcg::Pcg64;
use tinyvec::ArrayVec;

use crate::{GridPreset, PuzzleSeed, scramble};

/// Errors returned when configuring a [`PuzzleGenerator`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GeneratorError {
    /// The requested grid cannot hold a playable puzzle.
    #[display("cannot generate puzzle: {_0}")]
    #[from]
    Grid(GridError),
}

/// A generated puzzle: the target network and its scrambled starting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The unrotated network. Its links form a spanning tree rooted at the server.
    pub solution: Grid,
    /// The solution with every non-server tile turned a random number of quarter turns.
    pub scrambled: Grid,
    /// The seed that reproduces both grids.
    pub seed: PuzzleSeed,
}

/// Generates puzzles by randomized tree growth from the center server.
///
/// Generation runs in two seeded stages:
///
/// 1. The server at the grid center opens two or three random directions
///    (fewer when the grid edge is in the way), and each opened neighbor is
///    pushed onto a frontier stack.
/// 2. A randomized depth-first expansion repeatedly links the top of the stack
///    to a random unvisited neighbor, backtracking at dead ends. A link never
///    targets a visited cell, so the result has no cycles.
///
/// The finished tree is then scrambled with [`scramble`].
///
/// # Examples
///
/// ```
/// use netwalk_core::tree;
/// use netwalk_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(5, 5)?;
/// let puzzle = generator.generate();
///
/// assert!(tree::analyze(&puzzle.solution).is_spanning_tree());
/// assert_eq!(generator.generate_with_seed(puzzle.seed), puzzle);
/// # Ok::<(), netwalk_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGenerator {
    blank: Grid,
}

const TREE_STREAM: &[u8] = b"netwalk/tree";

impl PuzzleGenerator {
    /// Creates a generator for `width × height` puzzles.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero or
    /// the grid has a single cell, which leaves the server nothing to connect to.
    pub fn new(width: usize, height: usize) -> Result<Self, GeneratorError> {
        let blank = Grid::new(width, height)?;
        if blank.len() < 2 {
            return Err(GridError::InvalidDimensions { width, height }.into());
        }
        Ok(Self { blank })
    }

    /// Creates a generator for one of the standard sizes.
    #[must_use]
    pub fn from_preset(preset: GridPreset) -> Self {
        let (width, height) = preset.dimensions();
        #[expect(clippy::missing_panics_doc)]
        let blank = Grid::new(width, height).expect("presets have valid dimensions");
        Self { blank }
    }

    /// Returns the puzzle width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.blank.width()
    }

    /// Returns the puzzle height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.blank.height()
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed and size always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let (width, height) = (self.width(), self.height());

        let mut solution = self.blank.clone();
        grow_tree(&mut solution, &mut seed.stream(width, height, TREE_STREAM));
        let scrambled = scramble(&solution, seed);

        log::debug!(
            "generated {width}x{height} puzzle: {} tiles, {} links, seed={seed}",
            solution.count_non_blank(),
            solution.count_links(),
        );

        GeneratedPuzzle {
            solution,
            scrambled,
            seed,
        }
    }
}

fn grow_tree(grid: &mut Grid, rng: &mut Pcg64) {
    let server = grid.server();
    let mut visited = PositionSet::for_grid(grid);
    visited.insert(server);

    let mut directions = Direction::ALL;
    directions.shuffle(rng);
    let branches = [2, 3].choose(rng).copied().unwrap_or(2);

    let mut frontier = Vec::with_capacity(grid.len());
    for dir in directions {
        if frontier.len() == branches {
            break;
        }
        if let Some(next) = grid.connect(server, dir) {
            visited.insert(next);
            frontier.push(next);
        }
    }

    while let Some(&current) = frontier.last() {
        let open = Direction::ALL
            .into_iter()
            .filter(|&dir| {
                grid.neighbor(current, dir)
                    .is_some_and(|next| !visited.contains(next))
            })
            .collect::<ArrayVec<[Direction; 4]>>();
        let Some(&dir) = open.choose(rng) else {
            frontier.pop();
            continue;
        };
        if let Some(next) = grid.connect(current, dir) {
            visited.insert(next);
            frontier.push(next);
        }
    }
}
