//! Fire-spread automaton: threshold contagion on a toroidal forest
//!
//! Trees are scattered at a configured density, one tree is ignited, and
//! fire spreads to any tree with at least one burning cell inside its
//! square contagion window. A burning cell chars to burnt after exactly one
//! step; burnt is terminal. All randomness happens at initialization, the
//! transition rule itself is deterministic.

use crate::engine::{Model, Simulation};
use crate::error::SimulationError;
use crate::grid::Grid;
use crate::sampling::sample_distinct_indices;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// State of one forest cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireCell {
    /// Open ground, never ignites
    #[default]
    Empty,
    /// Fuel, ignites when the contagion window contains a burning cell
    Tree,
    /// On fire for exactly one step
    Burning,
    /// Charred, terminal state
    Burnt,
}

/// Validated parameters for the fire-spread automaton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireModel {
    size: usize,
    density: f64,
    radius: usize,
}

impl FireModel {
    /// Validate and build fire-spread parameters
    ///
    /// `size` is the lattice side length, `density` the fraction of cells
    /// seeded with trees, `radius` the side half-width of the square
    /// contagion window (1 = Moore neighborhood).
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] when `size == 0`,
    /// `density` is outside `[0, 1]`, or `radius < 1`.
    pub fn new(size: usize, density: f64, radius: usize) -> Result<Self, SimulationError> {
        if size == 0 {
            return Err(SimulationError::InvalidParameter(
                "size must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&density) {
            return Err(SimulationError::InvalidParameter(format!(
                "density must be in [0, 1], got {density}"
            )));
        }
        if radius < 1 {
            return Err(SimulationError::InvalidParameter(
                "radius must be at least 1".to_string(),
            ));
        }
        Ok(FireModel {
            size,
            density,
            radius,
        })
    }

    /// Configured tree density
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Configured contagion radius
    pub fn radius(&self) -> usize {
        self.radius
    }
}

impl Model for FireModel {
    type Cell = FireCell;

    fn size(&self) -> usize {
        self.size
    }

    /// Scatter `⌊density · size²⌋` trees uniformly without replacement, then
    /// ignite one of them uniformly at random.
    ///
    /// At `density = 0` no trees are placed and nothing is ignited; the
    /// simulation is static from the first step, which is a legitimate
    /// configuration rather than an error.
    fn seed<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid<FireCell>,
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        let total = self.size * self.size;
        let tree_count = (self.density * total as f64).floor() as usize;

        let positions = sample_distinct_indices(rng, total, tree_count)?;
        for &idx in &positions {
            grid.set_flat(idx, FireCell::Tree);
        }

        if !positions.is_empty() {
            let ignition = positions[rng.random_range(0..positions.len())];
            grid.set_flat(ignition, FireCell::Burning);
        }

        debug!(
            trees = tree_count.saturating_sub(1),
            ignited = usize::from(!positions.is_empty()),
            "forest seeded"
        );
        Ok(())
    }

    fn next_state(&self, current: &Grid<FireCell>, row: usize, col: usize) -> FireCell {
        match current.get(row, col) {
            FireCell::Burning => FireCell::Burnt,
            FireCell::Tree => {
                if current.window_contains(row, col, self.radius, |c| c == FireCell::Burning) {
                    FireCell::Burning
                } else {
                    FireCell::Tree
                }
            }
            state => state,
        }
    }
}

/// Fire-spread simulation over a [`FireModel`]
pub type ForestFire = Simulation<FireModel>;

/// Per-state cell counts of a fire grid snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireCensus {
    /// Open ground cells
    pub empty: usize,
    /// Unburnt trees
    pub tree: usize,
    /// Cells currently on fire
    pub burning: usize,
    /// Charred cells
    pub burnt: usize,
}

impl Simulation<FireModel> {
    /// Count cells per state in the current grid
    pub fn census(&self) -> FireCensus {
        let mut census = FireCensus::default();
        for &cell in self.grid().cells() {
            match cell {
                FireCell::Empty => census.empty += 1,
                FireCell::Tree => census.tree += 1,
                FireCell::Burning => census.burning += 1,
                FireCell::Burnt => census.burnt += 1,
            }
        }
        census
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moore_model() -> FireModel {
        FireModel::new(5, 0.5, 1).unwrap()
    }

    #[test]
    fn test_parameter_validation() {
        assert!(matches!(
            FireModel::new(0, 0.5, 1),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(matches!(
            FireModel::new(10, 1.5, 1),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(matches!(
            FireModel::new(10, -0.1, 1),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(matches!(
            FireModel::new(10, 0.5, 0),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(FireModel::new(10, 0.0, 3).is_ok());
        assert!(FireModel::new(10, 1.0, 1).is_ok());
    }

    #[test]
    fn test_burning_chars_unconditionally() {
        let model = moore_model();
        let mut grid = Grid::new(5, FireCell::Empty);
        grid.set(2, 2, FireCell::Burning);

        assert_eq!(model.next_state(&grid, 2, 2), FireCell::Burnt);
    }

    #[test]
    fn test_tree_ignites_from_window() {
        let model = moore_model();
        let mut grid = Grid::new(5, FireCell::Empty);
        grid.set(2, 2, FireCell::Tree);
        grid.set(3, 3, FireCell::Burning);

        assert_eq!(model.next_state(&grid, 2, 2), FireCell::Burning);
    }

    #[test]
    fn test_tree_outside_radius_survives() {
        let model = moore_model();
        let mut grid = Grid::new(5, FireCell::Empty);
        grid.set(0, 0, FireCell::Tree);
        grid.set(2, 2, FireCell::Burning);

        assert_eq!(model.next_state(&grid, 0, 0), FireCell::Tree);
    }

    #[test]
    fn test_empty_and_burnt_are_invariant() {
        let model = moore_model();
        let mut grid = Grid::new(5, FireCell::Burning);
        grid.set(2, 2, FireCell::Empty);
        grid.set(3, 3, FireCell::Burnt);

        assert_eq!(model.next_state(&grid, 2, 2), FireCell::Empty);
        assert_eq!(model.next_state(&grid, 3, 3), FireCell::Burnt);
    }

    #[test]
    fn test_contagion_wraps_across_edges() {
        // Burning cell in a corner ignites the tree in the opposite corner
        // through the torus
        let model = FireModel::new(4, 0.5, 1).unwrap();
        let mut grid = Grid::new(4, FireCell::Empty);
        grid.set(0, 0, FireCell::Burning);
        grid.set(3, 3, FireCell::Tree);

        assert_eq!(model.next_state(&grid, 3, 3), FireCell::Burning);
    }
}
