//! Flag dimensions derived from the single adjustable input, the height.

use crate::compose::{compose, Flag};
use crate::error::FlagError;
use crate::raster::{rasterize, round_half_up};
use crate::types::Coordinate;

/// Length-to-height ratio of the flag (2:3).
pub const LENGTH_RATIO: f64 = 1.5;

/// Circle diameter as a fraction of the flag height.
pub const CIRCLE_RATIO: f64 = 3.0 / 5.0;

/// Everything the renderer needs, derived from one flag height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlagDimensions {
    /// Side of the square core region, in cells.
    pub height: u32,
    /// `round(height * 1.5)`.
    pub length: u32,
    /// Circle diameter, `round(height * 3/5)`.
    pub circle_size: u32,
    /// Blank rows above and below the core, `round((length - height) / 2)`.
    pub padding: u32,
}

impl FlagDimensions {
    pub fn from_height(height: u32) -> Result<FlagDimensions, FlagError> {
        if height == 0 {
            return Err(FlagError::ZeroHeight);
        }

        let h = height as f64;
        let length = round_half_up(h * LENGTH_RATIO) as u32;
        let circle_size = round_half_up(h * CIRCLE_RATIO) as u32;
        let padding = round_half_up((length - height) as f64 / 2.0) as u32;

        Ok(FlagDimensions {
            height,
            length,
            circle_size,
            padding,
        })
    }

    /// Rasterize this flag's circle on its core grid.
    pub fn rasterize(&self) -> Vec<Coordinate> {
        rasterize(self.height, self.circle_size)
    }

    /// Run the full pipeline: rasterize, then compose with padding.
    pub fn render(&self) -> Flag {
        compose(self.height, self.padding, &self.rasterize())
    }
}

/// Derive dimensions for `height` and render the flag.
pub fn render_flag(height: u32) -> Result<Flag, FlagError> {
    let dims = FlagDimensions::from_height(height)?;
    log::debug!("rendering flag {:?}", dims);
    Ok(dims.render())
}
