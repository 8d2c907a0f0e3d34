pub mod types;
pub mod error;
pub mod raster;
pub mod compose;
pub mod dims;
#[cfg(feature = "serde")]
pub mod config;

pub use compose::{compose, Flag};
pub use dims::{render_flag, FlagDimensions};
pub use error::FlagError;
pub use raster::rasterize;
pub use types::{Cell, Coordinate};
