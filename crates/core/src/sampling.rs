//! Uniform sampling of distinct lattice positions
//!
//! Initialization for both models seeds the lattice by drawing cell indices
//! uniformly at random *without replacement*. The draw is delegated to
//! `rand`'s partial Fisher-Yates index sampler, which guarantees uniformity
//! and no duplicates in O(amount) memory.

use crate::error::SimulationError;
use rand::seq::index;
use rand::Rng;

/// Draw `amount` distinct flat cell indices from `0..total`, uniformly at
/// random and without replacement.
///
/// # Errors
/// Returns [`SimulationError::InsufficientCells`] when `amount > total`.
pub fn sample_distinct_indices<R: Rng + ?Sized>(
    rng: &mut R,
    total: usize,
    amount: usize,
) -> Result<Vec<usize>, SimulationError> {
    if amount > total {
        return Err(SimulationError::InsufficientCells {
            requested: amount,
            available: total,
        });
    }
    Ok(index::sample(rng, total, amount).into_vec())
}
