//! Threshold classification of noise samples into stacked tile layers.
//!
//! Every cell is sampled twice: a base sample at the map's noise scale and a
//! detail sample offset by [`DETAIL_OFFSET`] at twice the frequency. The base
//! sample alone decides water/grass and rock; hills and snow also require the
//! detail sample to clear its own cut point.
//!
//! Peaks, hills and rock nest by their base-sample conditions (0.5 > 0.3 > 0.1)
//! but that nesting is not enforced across layers: a cell can be a peak
//! without being a hill when its detail sample falls between the two gates.

use rayon::prelude::*;
use serde::Serialize;

use crate::noise_field::NoiseField;
use crate::tilemap::Tilemap;

// =============================================================================
// TILE CODES
// =============================================================================

/// Opaque per-layer sprite index. Zero means the layer is empty at that cell.
pub type TileCode = u16;

pub const EMPTY: TileCode = 0;
pub const GRASS: TileCode = 40;
pub const WATER: TileCode = 70;
pub const ROCK: TileCode = 165;
pub const HILL: TileCode = 50;
pub const SNOW: TileCode = 51;

/// Coordinate offset applied before the detail sample.
pub const DETAIL_OFFSET: f64 = 100.0;
/// Detail samples use `noise_scale * DETAIL_SCALE_FACTOR`, i.e. double frequency.
pub const DETAIL_SCALE_FACTOR: f64 = 0.5;

// =============================================================================
// LAYERS
// =============================================================================

/// The four independently addressable layers, bottom to top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    Base,
    Terrain,
    Hills,
    Peaks,
}

impl LayerKind {
    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Base => "base",
            LayerKind::Terrain => "terrain",
            LayerKind::Hills => "hills",
            LayerKind::Peaks => "peaks",
        }
    }

    pub fn all() -> &'static [LayerKind] {
        &[
            LayerKind::Base,
            LayerKind::Terrain,
            LayerKind::Hills,
            LayerKind::Peaks,
        ]
    }
}

/// Four same-shaped tile layers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TerrainLayers {
    pub base: Tilemap<TileCode>,
    pub terrain: Tilemap<TileCode>,
    pub hills: Tilemap<TileCode>,
    pub peaks: Tilemap<TileCode>,
}

impl TerrainLayers {
    /// All layers empty (code 0 everywhere).
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            base: Tilemap::new(width, height),
            terrain: Tilemap::new(width, height),
            hills: Tilemap::new(width, height),
            peaks: Tilemap::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.base.width
    }

    pub fn height(&self) -> usize {
        self.base.height
    }

    pub fn layer(&self, kind: LayerKind) -> &Tilemap<TileCode> {
        match kind {
            LayerKind::Base => &self.base,
            LayerKind::Terrain => &self.terrain,
            LayerKind::Hills => &self.hills,
            LayerKind::Peaks => &self.peaks,
        }
    }

    /// The codes of all four layers at one cell.
    pub fn cell(&self, x: usize, y: usize) -> CellTiles {
        CellTiles {
            base: *self.base.get(x, y),
            terrain: *self.terrain.get(x, y),
            hills: *self.hills.get(x, y),
            peaks: *self.peaks.get(x, y),
        }
    }

    fn set_cell(&mut self, x: usize, y: usize, tiles: CellTiles) {
        self.base.set(x, y, tiles.base);
        self.terrain.set(x, y, tiles.terrain);
        self.hills.set(x, y, tiles.hills);
        self.peaks.set(x, y, tiles.peaks);
    }

    /// Number of cells in `kind` holding `code`.
    pub fn count(&self, kind: LayerKind, code: TileCode) -> usize {
        self.layer(kind).iter().filter(|&(_, _, &c)| c == code).count()
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Cut points for each layer rule. The defaults set the standard map
/// distribution exactly; changing them changes what the map looks like.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Base sample strictly below this is water, otherwise grass
    pub water_below: f64,
    /// Base sample strictly above this is rock
    pub rock_above: f64,
    pub hills_above: f64,
    pub hills_detail_above: f64,
    pub peaks_above: f64,
    pub peaks_detail_above: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            water_below: -0.2,
            rock_above: 0.1,
            hills_above: 0.3,
            hills_detail_above: 0.0,
            peaks_above: 0.5,
            peaks_detail_above: 0.2,
        }
    }
}

/// The two noise samples a cell is classified from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSamples {
    pub base: f64,
    pub detail: f64,
}

/// Tile codes of one cell across all layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellTiles {
    pub base: TileCode,
    pub terrain: TileCode,
    pub hills: TileCode,
    pub peaks: TileCode,
}

/// Sample the base and detail noise for grid cell (x, y).
#[inline]
pub fn sample_cell(field: &NoiseField, x: usize, y: usize, noise_scale: f64) -> CellSamples {
    let (fx, fy) = (x as f64, y as f64);
    let detail_scale = noise_scale * DETAIL_SCALE_FACTOR;
    CellSamples {
        base: field.sample2(fx / noise_scale, fy / noise_scale),
        detail: field.sample2(
            (fx + DETAIL_OFFSET) / detail_scale,
            (fy + DETAIL_OFFSET) / detail_scale,
        ),
    }
}

/// Apply every layer rule to one cell's samples. Each rule is evaluated on its
/// own; none reads another layer's result.
pub fn classify_cell(samples: CellSamples, t: &Thresholds) -> CellTiles {
    let CellSamples { base, detail } = samples;
    CellTiles {
        base: if base < t.water_below { WATER } else { GRASS },
        terrain: if base > t.rock_above { ROCK } else { EMPTY },
        hills: if base > t.hills_above && detail > t.hills_detail_above { HILL } else { EMPTY },
        peaks: if base > t.peaks_above && detail > t.peaks_detail_above { SNOW } else { EMPTY },
    }
}

/// Classify a `width` x `height` grid with the default thresholds.
///
/// `noise_scale` is used as given; clamping it to at least 1 is the caller's
/// job (see [`crate::generate::GenerateRequest::resolve`]).
pub fn classify(width: usize, height: usize, seed: f64, noise_scale: f64) -> TerrainLayers {
    classify_with(width, height, seed, noise_scale, &Thresholds::default())
}

/// Classify with explicit thresholds. Rows are sampled in parallel; the result
/// is identical to a sequential pass since cells share nothing but the
/// read-only noise field.
pub fn classify_with(
    width: usize,
    height: usize,
    seed: f64,
    noise_scale: f64,
    thresholds: &Thresholds,
) -> TerrainLayers {
    let mut layers = TerrainLayers::new(width, height);
    if layers.base.is_empty() {
        return layers;
    }

    let field = NoiseField::new(seed);

    let rows: Vec<Vec<CellTiles>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| classify_cell(sample_cell(&field, x, y, noise_scale), thresholds))
                .collect()
        })
        .collect();

    for (y, row) in rows.into_iter().enumerate() {
        for (x, tiles) in row.into_iter().enumerate() {
            layers.set_cell(x, y, tiles);
        }
    }

    layers
}
