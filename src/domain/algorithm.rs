//! Step strategy selection.
//!
//! Both strategies compute the same generation; they differ only in how the
//! work is scheduled.

use serde::{Deserialize, Serialize};

use super::VoxelGrid;

/// How a generation is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStrategy {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Cells split across the rayon thread pool
    Parallel,
}

impl StepStrategy {
    /// Get all available strategies
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel]
    }

    /// Display name for the HUD
    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
        }
    }

    /// Advance `grid` by one generation
    pub fn step(&self, grid: &VoxelGrid) -> VoxelGrid {
        match self {
            StepStrategy::Serial => grid.evolve(),
            StepStrategy::Parallel => grid.evolve_parallel(),
        }
    }
}
