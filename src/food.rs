use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridSize;
use crate::error::SpawnError;
use crate::snake::Position;

/// Random draws attempted before falling back to enumerating free cells.
pub const MAX_REJECTION_DRAWS: usize = 64;

/// Picks free cells for food uniformly at random.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    /// Creates a deterministic spawner for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a spawner seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Returns a cell not contained in `occupied`.
    pub fn spawn(
        &mut self,
        occupied: &HashSet<Position>,
        grid: GridSize,
    ) -> Result<Position, SpawnError> {
        spawn_position(&mut self.rng, occupied, grid)
    }
}

/// Draws uniform cells until one is free.
///
/// Rejection sampling stays cheap while the board is mostly empty. After
/// [`MAX_REJECTION_DRAWS`] misses the free cells are enumerated and one is
/// picked uniformly, so a nearly full board still terminates.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    occupied: &HashSet<Position>,
    grid: GridSize,
) -> Result<Position, SpawnError> {
    let extent = grid.extent();

    for _ in 0..MAX_REJECTION_DRAWS {
        let candidate = Position::new(rng.gen_range(0..extent), rng.gen_range(0..extent));
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
    }

    let mut candidates = Vec::new();
    for y in 0..extent {
        for x in 0..extent {
            let position = Position::new(x, y);
            if !occupied.contains(&position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return Err(SpawnError::BoardFull {
            cells: grid.total_cells(),
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}
