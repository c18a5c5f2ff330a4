mod cell;
mod grid;
mod algorithm;

pub use cell::Cell;
pub use grid::VoxelGrid;
pub use algorithm::StepStrategy;
