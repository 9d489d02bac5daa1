use netwalk_core::{Grid, Sense};
use rand::seq::IndexedRandom as _;
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

const SCRAMBLE_STREAM: &[u8] = b"netwalk/scramble";

/// Turns every non-server tile of `solution` a random number of quarter turns.
///
/// Each tile independently receives `k ∈ {0, 1, 2, 3}` clockwise turns, drawn
/// uniformly from a stream derived from `seed`. The server is copied unchanged.
/// The result is the puzzle's starting position and its restart snapshot.
///
/// # Examples
///
/// ```
/// use netwalk_core::Grid;
/// use netwalk_generator::{PuzzleSeed, scramble};
///
/// let solution: Grid = "040/2b8/000".parse()?;
/// let seed = PuzzleSeed::from_bytes([7; 32]);
///
/// let scrambled = scramble(&solution, seed);
/// assert_eq!(scrambled[solution.server()], solution[solution.server()]);
/// assert_eq!(scramble(&solution, seed), scrambled);
/// # Ok::<(), netwalk_core::ParseGridError>(())
/// ```
#[must_use]
pub fn scramble(solution: &Grid, seed: PuzzleSeed) -> Grid {
    let mut rng = seed.stream(solution.width(), solution.height(), SCRAMBLE_STREAM);
    scramble_with(solution, &mut rng)
}

fn scramble_with(solution: &Grid, rng: &mut Pcg64) -> Grid {
    let server = solution.server();
    let mut scrambled = solution.clone();
    let mut turned = 0;
    for pos in solution.positions() {
        if pos == server {
            continue;
        }
        let steps = [0, 1, 2, 3].choose(rng).copied().unwrap_or(0);
        let cell = &mut scrambled[pos];
        *cell = cell.rotate(steps, Sense::Clockwise);
        if *cell != solution[pos] {
            turned += 1;
        }
    }
    log::trace!("scrambled {turned} of {} tiles", solution.len());
    scrambled
}
