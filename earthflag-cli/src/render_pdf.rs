//! Printable PDF rendering: one page sized to the flag.

use anyhow::{Context, Result};
use earthflag::{Cell, Flag};
use printpdf::*;

/// Page margin around the flag in mm.
const MARGIN_MM: f32 = 10.0;

/// Gap between neighbouring cells in mm; the grey background shows
/// through as grid lines.
const GAP_MM: f32 = 0.1;

/// Write a flag as a single-page PDF with `cell_mm` millimetres per cell.
pub fn write_flag_pdf(flag: &Flag, cell_mm: f32, title: &str, path: &str) -> Result<()> {
    anyhow::ensure!(cell_mm > GAP_MM, "cell size must exceed {GAP_MM} mm");

    let flag_w_mm = flag.width() as f32 * cell_mm;
    let flag_h_mm = flag.height() as f32 * cell_mm;
    let page_w_mm = flag_w_mm + 2.0 * MARGIN_MM;
    let page_h_mm = flag_h_mm + 2.0 * MARGIN_MM;

    let (doc, page1, layer1) = PdfDocument::new(title, Mm(page_w_mm), Mm(page_h_mm), "Flag");
    let layer = doc.get_page(page1).get_layer(layer1);

    draw_flag(&layer, flag, MARGIN_MM, MARGIN_MM, cell_mm);

    doc.save(&mut std::io::BufWriter::new(
        std::fs::File::create(path).with_context(|| format!("creating {path}"))?,
    ))
    .with_context(|| format!("writing PDF to {path}"))?;

    Ok(())
}

/// Draw a flag with its lower-left corner at (`x_mm`, `y_mm`).
fn draw_flag(layer: &PdfLayerReference, flag: &Flag, x_mm: f32, y_mm: f32, cell_mm: f32) {
    let grey = Color::Rgb(Rgb::new(0.75, 0.75, 0.75, None));
    layer.set_fill_color(grey.clone());
    layer.set_outline_color(grey);
    layer.add_rect(Rect::new(
        Mm(x_mm),
        Mm(y_mm),
        Mm(x_mm + flag.width() as f32 * cell_mm),
        Mm(y_mm + flag.height() as f32 * cell_mm),
    ));

    let rows = flag.height();
    for (cy, row) in flag.rows().enumerate() {
        for (cx, cell) in row.iter().enumerate() {
            let color = match cell {
                Cell::Circle => Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
                Cell::Blank => Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)),
            };
            layer.set_fill_color(color.clone());
            layer.set_outline_color(color);

            // PDF y is bottom-up: row 0 is at the top
            let px = x_mm + cx as f32 * cell_mm + GAP_MM / 2.0;
            let py = y_mm + (rows - 1 - cy) as f32 * cell_mm + GAP_MM / 2.0;
            let side = cell_mm - GAP_MM;
            layer.add_rect(Rect::new(Mm(px), Mm(py), Mm(px + side), Mm(py + side)));
        }
    }
}
