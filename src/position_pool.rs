//! Pool of unoccupied interior cells used while laying out a level.

use rand::Rng;

use crate::components::Position;
use crate::error::{GameError, Result};

/// Interior cells still free for placement on the current level.
///
/// Cells leave the pool as objects are placed and never come back until the
/// next [`PositionPool::reset`].
#[derive(Debug, Clone, Default)]
pub struct PositionPool {
    cells: Vec<Position>,
}

impl PositionPool {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Refill with every interior cell: x in [1, columns-2], y in [1, rows-2].
    pub fn reset(&mut self, columns: i32, rows: i32) {
        self.cells.clear();
        for x in 1..columns - 1 {
            for y in 1..rows - 1 {
                self.cells.push(Position::new(x, y));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Remove and return a uniformly random cell.
    pub fn take_random(&mut self, rng: &mut impl Rng) -> Result<Position> {
        if self.cells.is_empty() {
            return Err(GameError::PoolExhausted {
                requested: 1,
                available: 0,
            });
        }
        let index = rng.gen_range(0..self.cells.len());
        Ok(self.cells.swap_remove(index))
    }

    /// Take `count` distinct cells at once. Fails without consuming anything
    /// when the pool cannot satisfy the whole request.
    pub fn take_many(&mut self, count: usize, rng: &mut impl Rng) -> Result<Vec<Position>> {
        if count > self.cells.len() {
            return Err(GameError::PoolExhausted {
                requested: count,
                available: self.cells.len(),
            });
        }
        let mut taken = Vec::with_capacity(count);
        for _ in 0..count {
            taken.push(self.take_random(rng)?);
        }
        Ok(taken)
    }
}
