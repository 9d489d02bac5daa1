//! Puzzle generation for the network puzzle.
//!
//! [`PuzzleGenerator`] grows a random spanning tree from the center server and
//! scrambles it into a starting position. Every puzzle is identified by a
//! [`PuzzleSeed`], so a generated puzzle can be reproduced exactly from its
//! seed and size.
//!
//! # Examples
//!
//! ```
//! use netwalk_generator::{GridPreset, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::from_preset(GridPreset::Small);
//! let puzzle = generator.generate();
//!
//! println!("Seed: {}", puzzle.seed);
//! println!("Solution:\n{}", puzzle.solution);
//! println!("Scrambled:\n{}", puzzle.scrambled);
//! ```

pub use self::{
    generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator},
    preset::GridPreset,
    scramble::scramble,
    seed::{ParseSeedError, PuzzleSeed},
};

mod generator;
mod preset;
mod scramble;
mod seed;
