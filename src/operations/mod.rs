mod assemble;
mod generate_grid;
pub mod layout;
mod stats;

pub use assemble::assemble;
pub use generate_grid::{generate_grid, GenerateGrid};
pub use layout::{AxisOffsets, ClosedFormLayout, FeasibilitySearch, GridParams, LayoutVariant};
pub use stats::{compute_details, STATS_PRECISION};
