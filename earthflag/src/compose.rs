use std::collections::HashSet;

use crate::types::{Cell, Coordinate};

/// A composed flag: `padding` blank rows, the square core region, then
/// `padding` blank rows again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Side length of the square core region, also the width of every row.
    pub core_height: usize,
    /// Number of blank rows above and below the core region.
    pub padding: usize,
    /// Cell states in row-major order (top-to-bottom, left-to-right).
    pub cells: Vec<Cell>,
}

impl Flag {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.core_height
    }

    /// Total number of rows, padding included.
    pub fn height(&self) -> usize {
        self.core_height + 2 * self.padding
    }

    /// Get the cell at column `x` of row `y`, counting padding rows.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width() + x]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on zero; an empty flag has no rows anyway.
        self.cells.chunks_exact(self.width().max(1))
    }

    /// Circle cells, translated back into core-region coordinates.
    pub fn circle_coordinates(&self) -> Vec<Coordinate> {
        let width = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Circle)
            .map(|(i, _)| Coordinate::new((i % width) as i32, (i / width - self.padding) as i32))
            .collect()
    }

    /// Number of circle cells.
    pub fn circle_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Circle).count()
    }

    /// Convert to RGBA pixel data (4 bytes per cell).
    ///
    /// Circle = (0, 0, 0, 255), Blank = (255, 255, 255, 255).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flat_map(|c| match c {
                Cell::Circle => [0, 0, 0, 255],
                Cell::Blank => [255, 255, 255, 255],
            })
            .collect()
    }

    /// Render as text, one line per row.
    pub fn to_text(&self, circle: &str, blank: &str) -> String {
        let mut s = String::with_capacity(self.height() * (self.width() + 1));
        for row in self.rows() {
            for cell in row {
                s.push_str(match cell {
                    Cell::Circle => circle,
                    Cell::Blank => blank,
                });
            }
            s.push('\n');
        }
        s
    }
}

/// Lay out a flag from a rasterized circle.
///
/// `core_height` must match the grid height the coordinates were produced
/// for. Coordinates outside the core region are dropped.
pub fn compose(core_height: u32, padding: u32, circle: &[Coordinate]) -> Flag {
    let size = core_height as usize;
    let padding = padding as usize;
    let marked: HashSet<Coordinate> = circle.iter().copied().collect();

    let padding_block = vec![Cell::Blank; padding * size];
    let mut cells = Vec::with_capacity((size + 2 * padding) * size);

    cells.extend_from_slice(&padding_block);
    for y in 0..size {
        for x in 0..size {
            let cell = if marked.contains(&Coordinate::new(x as i32, y as i32)) {
                Cell::Circle
            } else {
                Cell::Blank
            };
            cells.push(cell);
        }
    }
    cells.extend_from_slice(&padding_block);

    let flag = Flag {
        core_height: size,
        padding,
        cells,
    };
    log::debug!(
        "composed {}x{} flag ({} padding rows each side, {} of {} circle cells inside)",
        flag.width(),
        flag.height(),
        padding,
        flag.circle_count(),
        marked.len()
    );
    flag
}
