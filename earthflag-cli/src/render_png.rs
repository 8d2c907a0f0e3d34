//! PNG rendering for composed flags.

use anyhow::{Context, Result};
use earthflag::{Cell, Flag};
use std::path::Path;

struct GrayImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

/// Write a flag as a grayscale PNG, `scale` pixels per cell.
pub fn write_flag_png(flag: &Flag, scale: usize, path: &Path) -> Result<()> {
    anyhow::ensure!(scale > 0, "scale must be at least 1");
    let img = flag_to_image(flag, scale);
    log::debug!("PNG image {}x{} px", img.width, img.height);
    write_grayscale_png(path, &img.pixels, img.width, img.height)
}

/// Scale each cell up to a `scale` x `scale` block.
fn flag_to_image(flag: &Flag, scale: usize) -> GrayImage {
    let width = flag.width() * scale;
    let height = flag.height() * scale;
    let mut pixels = vec![255u8; width * height];

    for (y, row) in flag.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if *cell == Cell::Blank {
                continue;
            }
            let (ox, oy) = (x * scale, y * scale);
            for sy in 0..scale {
                let start = (oy + sy) * width + ox;
                pixels[start..start + scale].fill(0);
            }
        }
    }

    GrayImage {
        pixels,
        width,
        height,
    }
}

fn write_grayscale_png(path: &Path, pixels: &[u8], width: usize, height: usize) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let w = std::io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("writing PNG header for {}", path.display()))?;
    writer
        .write_image_data(pixels)
        .with_context(|| format!("writing PNG data for {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use earthflag::{compose, Coordinate};

    #[test]
    fn image_scales_cells() {
        let flag = compose(2, 1, &[Coordinate::new(1, 0)]);
        let img = flag_to_image(&flag, 3);
        assert_eq!((img.width, img.height), (6, 12));

        // Core row 0 is flag row 1 → pixel rows 3..6, columns 3..6.
        for y in 0..img.height {
            for x in 0..img.width {
                let expected = if (3..6).contains(&y) && (3..6).contains(&x) {
                    0
                } else {
                    255
                };
                assert_eq!(img.pixels[y * img.width + x], expected, "({x}, {y})");
            }
        }
    }
}
