use serde::Serialize;
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use earthflag::{Cell, FlagDimensions};

// ── Tsify types for TypeScript interface generation ──

/// One circle cell, (0, 0) at the top-left of the square core.
#[derive(Tsify, Serialize, Debug, PartialEq)]
#[tsify(into_wasm_abi)]
pub struct WasmPoint {
    pub x: i32,
    pub y: i32,
}

/// A composed flag returned to JavaScript.
#[derive(Tsify, Serialize, Debug)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmFlag {
    pub height: u32,
    pub length: u32,
    pub circle_size: u32,
    pub padding: u32,
    /// Row-major cells, padding rows included; `true` marks the circle.
    pub rows: Vec<Vec<bool>>,
}

// ── Exports ──

/// Rasterize a circle of `circle_diameter` cells on a square grid.
#[wasm_bindgen]
pub fn rasterize(grid_height: u32, circle_diameter: u32) -> Result<JsValue, JsError> {
    if grid_height == 0 {
        return Err(JsError::new("grid height must be at least 1"));
    }
    let points = points_to_wasm(grid_height, circle_diameter);
    serde_wasm_bindgen::to_value(&points).map_err(|e| JsError::new(&e.to_string()))
}

/// Derive dimensions from `height` and compose the full flag.
#[wasm_bindgen]
pub fn flag(height: u32) -> Result<JsValue, JsError> {
    let dims = FlagDimensions::from_height(height).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&flag_to_wasm(&dims)).map_err(|e| JsError::new(&e.to_string()))
}

fn points_to_wasm(grid_height: u32, circle_diameter: u32) -> Vec<WasmPoint> {
    earthflag::rasterize(grid_height, circle_diameter)
        .into_iter()
        .map(|p| WasmPoint { x: p.x, y: p.y })
        .collect()
}

fn flag_to_wasm(dims: &FlagDimensions) -> WasmFlag {
    let flag = dims.render();
    WasmFlag {
        height: dims.height,
        length: dims.length,
        circle_size: dims.circle_size,
        padding: dims.padding,
        rows: flag
            .rows()
            .map(|row| row.iter().map(|&c| c == Cell::Circle).collect())
            .collect(),
    }
}
