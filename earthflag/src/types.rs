/// One cell of the square core region, with (0, 0) at its top-left.
///
/// Equality and hashing are structural, so two coordinates with the same
/// `x` and `y` always collapse to a single set entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    // Field order gives a row-major `Ord`.
    pub y: i32,
    pub x: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { y, x }
    }
}

/// The state of a cell in a composed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cell {
    /// Background cell, also used for every padding row.
    Blank,
    /// Part of the rasterized circle.
    Circle,
}
