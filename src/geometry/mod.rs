pub mod rectangle;

pub use rectangle::{Bounds, Rectangle};
