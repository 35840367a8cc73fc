//! ASCII preview of generated maps
//!
//! A debugging view: each cell shows its top-most non-empty layer.

use std::collections::HashSet;

use crate::sites::NamedSite;
use crate::terrain::{CellTiles, TerrainLayers, EMPTY, WATER};

/// Character drawn over a cell that carries a named site.
pub const SITE_CHAR: char = '*';

/// Get the ASCII character for a cell's stacked tiles.
pub fn cell_char(cell: &CellTiles) -> char {
    if cell.peaks != EMPTY {
        'A'
    } else if cell.hills != EMPTY {
        'n'
    } else if cell.terrain != EMPTY {
        '^'
    } else if cell.base == WATER {
        '~'
    } else if cell.base != EMPTY {
        '.'
    } else {
        ' '
    }
}

/// Render the layers as text, one line per row, with sites marked.
pub fn render_ascii_map(layers: &TerrainLayers, sites: &[NamedSite]) -> String {
    let width = layers.width();
    let height = layers.height();
    let mut result = String::with_capacity((width + 1) * height);
    let marked: HashSet<(usize, usize)> = sites.iter().map(|s| (s.x, s.y)).collect();

    for y in 0..height {
        for x in 0..width {
            let ch = if marked.contains(&(x, y)) {
                SITE_CHAR
            } else {
                cell_char(&layers.cell(x, y))
            };
            result.push(ch);
        }
        result.push('\n');
    }

    result
}

pub fn legend() -> &'static str {
    "~ water  . grass  ^ rock  n hills  A snow  * site"
}
