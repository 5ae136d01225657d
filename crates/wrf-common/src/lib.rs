//! Common types shared across the WRF projection crates.

pub mod bbox;
pub mod coord;
pub mod corners;
pub mod error;
pub mod grid;

pub use bbox::Extent;
pub use coord::CoordPair;
pub use corners::{CornerBox, CornerInput};
pub use error::{CornerError, CornerResult};
pub use grid::CoordGrid;
