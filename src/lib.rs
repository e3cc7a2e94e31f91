pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod query;
pub mod result;

pub use error::{ErrorKind, RectGridError, Result};
pub use geometry::{Bounds, Rectangle};
pub use operations::{generate_grid, GenerateGrid, GridParams, LayoutVariant};
pub use result::{GridDetails, GridResult};
