//! Horizontal-band circle rasterization.
//!
//! The circle is drawn as a stack of horizontal bands around a center row.
//! Each band's width comes from circular-segment geometry and is rounded to
//! whole cells; on even grids every off-center band is forced to an even
//! width so the shape stays balanced around the grid's middle line.

use std::collections::BTreeSet;

use crate::types::Coordinate;

/// Round to the nearest integer, ties towards positive infinity.
///
/// `f64::round` sends negative ties away from zero (-1.5 → -2), which would
/// move cells at the left edge of oversize circles.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Row (and column) index of the circle's center in a square grid.
pub fn center_of(grid_height: u32) -> i32 {
    round_half_up(grid_height as f64 / 2.0) as i32
}

/// Width in cells of every band above (and below) the center row.
///
/// Index 0 is the band one row away from the center. The list ends at the
/// first offset whose segment height `h = r - d` is no longer positive.
pub fn band_lengths(grid_height: u32, circle_diameter: u32) -> Vec<u32> {
    let r = circle_diameter as f64 / 2.0;
    let even_grid = grid_height % 2 == 0;

    let mut lengths = Vec::new();
    for d in 1u32.. {
        let h = r - d as f64;
        if h <= 0.0 {
            break;
        }

        let mut c = round_half_up((8.0 * h * (r - h / 2.0)).sqrt()) as u32;
        if even_grid && c % 2 == 1 {
            c -= 1;
        }
        lengths.push(c);
    }
    lengths
}

/// Rasterize a circle of `circle_diameter` cells centered in a square grid
/// of side `grid_height`.
///
/// Returns each covered cell exactly once, sorted row-major. A zero
/// diameter yields no cells. Diameters larger than the grid produce
/// coordinates outside it; clipping is the consumer's job.
pub fn rasterize(grid_height: u32, circle_diameter: u32) -> Vec<Coordinate> {
    let center = center_of(grid_height);
    let mut points = BTreeSet::new();

    push_band(&mut points, center, circle_diameter, center);

    let lengths = band_lengths(grid_height, circle_diameter);
    for (i, &length) in lengths.iter().enumerate() {
        let offset = i as i32 + 1;
        push_band(&mut points, center, length, center + offset);
        push_band(&mut points, center, length, center - offset);
    }

    log::trace!(
        "rasterized diameter {} on {}x{} grid: {} bands, {} cells",
        circle_diameter,
        grid_height,
        grid_height,
        2 * lengths.len() + 1,
        points.len()
    );

    points.into_iter().collect()
}

/// Insert one band of `length` cells at row `y`, centered on column `center`.
fn push_band(points: &mut BTreeSet<Coordinate>, center: i32, length: u32, y: i32) {
    let left = center as f64 - length as f64 / 2.0;
    for j in 0..length {
        let x = round_half_up(j as f64 + left) as i32;
        points.insert(Coordinate::new(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collapse a point set into `(y, first_x, last_x)` per row, checking
    /// that every row is one contiguous run.
    fn row_spans(points: &[Coordinate]) -> Vec<(i32, i32, i32)> {
        let mut spans: Vec<(i32, i32, i32)> = Vec::new();
        for p in points {
            match spans.last_mut() {
                Some((y, _, last)) if *y == p.y => {
                    assert_eq!(p.x, *last + 1, "gap in row {}", p.y);
                    *last = p.x;
                }
                _ => spans.push((p.y, p.x, p.x)),
            }
        }
        spans
    }

    #[test]
    fn round_half_up_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.51), -2.0);
    }

    #[test]
    fn center_rounds_half_up() {
        assert_eq!(center_of(10), 5);
        assert_eq!(center_of(5), 3);
        assert_eq!(center_of(1), 1);
        assert_eq!(center_of(120), 60);
    }

    #[test]
    fn grid10_diameter6_golden() {
        let points = rasterize(10, 6);
        assert_eq!(points.len(), 26);
        assert_eq!(
            row_spans(&points),
            vec![(3, 3, 6), (4, 2, 7), (5, 2, 7), (6, 2, 7), (7, 3, 6)]
        );
    }

    #[test]
    fn grid5_diameter3_golden() {
        // Odd grid: center band starts on a half cell and rounds up.
        let points = rasterize(5, 3);
        assert_eq!(row_spans(&points), vec![(2, 2, 3), (3, 2, 4), (4, 2, 3)]);
    }

    #[test]
    fn grid12_diameter7_golden() {
        // Even grid with odd diameter: off-center bands are trimmed to even
        // widths, the center row keeps all seven cells.
        let points = rasterize(12, 7);
        assert_eq!(points.len(), 39);
        assert_eq!(
            row_spans(&points),
            vec![
                (3, 4, 7),
                (4, 3, 8),
                (5, 3, 8),
                (6, 3, 9),
                (7, 3, 8),
                (8, 3, 8),
                (9, 4, 7),
            ]
        );
    }

    #[test]
    fn grid20_diameter12_golden() {
        let points = rasterize(20, 12);
        assert_eq!(points.len(), 104);
        assert_eq!(
            row_spans(&points),
            vec![
                (5, 7, 12),
                (6, 6, 13),
                (7, 5, 14),
                (8, 5, 14),
                (9, 4, 15),
                (10, 4, 15),
                (11, 4, 15),
                (12, 5, 14),
                (13, 5, 14),
                (14, 6, 13),
                (15, 7, 12),
            ]
        );
    }

    #[test]
    fn band_lengths_known_values() {
        assert_eq!(band_lengths(10, 6), vec![6, 4]);
        assert_eq!(band_lengths(12, 7), vec![6, 6, 4]);
        assert_eq!(band_lengths(20, 12), vec![12, 10, 10, 8, 6]);
        // Odd grids keep odd widths.
        assert_eq!(band_lengths(7, 4), vec![3]);
    }

    #[test]
    fn zero_diameter_is_empty() {
        assert!(rasterize(10, 0).is_empty());
        assert!(band_lengths(10, 0).is_empty());
    }

    #[test]
    fn diameter_one_is_single_cell() {
        assert_eq!(rasterize(2, 1), vec![Coordinate::new(1, 1)]);
    }

    #[test]
    fn duplicates_collapse_by_value() {
        let points = rasterize(120, 72);
        let unique: std::collections::HashSet<_> = points.iter().copied().collect();
        assert_eq!(unique.len(), points.len());
        assert_eq!(points.len(), 4032);
    }

    #[test]
    fn oversize_diameter_reaches_negative_columns() {
        let points = rasterize(4, 8);
        assert!(points.iter().any(|p| p.x < 0));
        let center_row = points.iter().filter(|p| p.y == 2).count();
        assert_eq!(center_row, 8);
    }
}
