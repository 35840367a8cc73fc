//! The generation pipeline: request in, layers and named sites out.
//!
//! Regeneration is a brand-new request. [`ResolvedRequest::coarser`],
//! [`ResolvedRequest::finer`] and [`ResolvedRequest::reroll`] build the next
//! request from the one that produced the current map; nothing from the
//! previous [`GenerateResult`] is reused.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::naming::Grammar;
use crate::seeds::MapSeeds;
use crate::sites::{self, NamedSite, DEFAULT_SITE_STRIDE};
use crate::terrain::{self, TerrainLayers, Thresholds};

pub const DEFAULT_NOISE_SCALE: f64 = 10.0;
pub const MIN_NOISE_SCALE: f64 = 1.0;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Map configuration. Defaults give a 20x15 map of 64px tiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
    /// Tile edge in pixels; only used to place labels in presentation space
    pub tile_size: u32,
    pub site_stride: usize,
    pub noise_scale: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            tile_size: 64,
            site_stride: DEFAULT_SITE_STRIDE,
            noise_scale: DEFAULT_NOISE_SCALE,
        }
    }
}

impl MapConfig {
    /// A request for this map size and scale with a random seed.
    pub fn request(&self) -> GenerateRequest {
        GenerateRequest::new(self.width, self.height).with_noise_scale(self.noise_scale)
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline {
            site_stride: self.site_stride,
            ..Pipeline::default()
        }
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// What the presentation layer asks for. Missing values get defaults when the
/// request is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GenerateRequest {
    pub seed: Option<f64>,
    pub noise_scale: Option<f64>,
    pub width: usize,
    pub height: usize,
}

impl GenerateRequest {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            seed: None,
            noise_scale: None,
            width,
            height,
        }
    }

    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_noise_scale(mut self, noise_scale: f64) -> Self {
        self.noise_scale = Some(noise_scale);
        self
    }

    /// Fill in defaults. A seed of 0 or NaN counts as unset and becomes a
    /// random seed in [0, 1). A noise scale of 0, NaN or infinity counts as
    /// unset and becomes [`DEFAULT_NOISE_SCALE`]; any other scale is clamped
    /// to at least [`MIN_NOISE_SCALE`].
    pub fn resolve(&self, rng: &mut impl Rng) -> ResolvedRequest {
        let seed = match self.seed {
            Some(s) if s != 0.0 && !s.is_nan() => s,
            _ => rng.gen(),
        };
        let noise_scale = match self.noise_scale {
            Some(s) if s != 0.0 && s.is_finite() => s.max(MIN_NOISE_SCALE),
            _ => DEFAULT_NOISE_SCALE,
        };
        ResolvedRequest {
            seed,
            noise_scale,
            width: self.width,
            height: self.height,
        }
    }
}

/// A request with every value concrete. Generating the same resolved request
/// twice gives identical results.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResolvedRequest {
    pub seed: f64,
    pub noise_scale: f64,
    pub width: usize,
    pub height: usize,
}

impl ResolvedRequest {
    /// Same seed, noise scale lowered by 1 (never below [`MIN_NOISE_SCALE`]).
    pub fn coarser(&self) -> Self {
        Self {
            noise_scale: (self.noise_scale - 1.0).max(MIN_NOISE_SCALE),
            ..*self
        }
    }

    /// Same seed, noise scale raised by 1.
    pub fn finer(&self) -> Self {
        Self {
            noise_scale: self.noise_scale + 1.0,
            ..*self
        }
    }

    /// Same scale, fresh random seed in [0, 1).
    pub fn reroll(&self, rng: &mut impl Rng) -> Self {
        Self {
            seed: rng.gen(),
            ..*self
        }
    }

    pub fn seeds(&self) -> MapSeeds {
        MapSeeds::from_master(self.seed)
    }
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Generated map handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateResult {
    /// The request this map came from; feed it to the regeneration helpers
    pub request: ResolvedRequest,
    pub layers: TerrainLayers,
    pub sites: Vec<NamedSite>,
}

/// Classification and naming settings shared across requests.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipeline {
    pub thresholds: Thresholds,
    pub grammar: Grammar,
    pub site_stride: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            grammar: Grammar::default(),
            site_stride: DEFAULT_SITE_STRIDE,
        }
    }
}

impl Pipeline {
    /// Run the full pass. Site labels come from an RNG seeded with the map's
    /// derived naming seed.
    pub fn run(&self, request: &ResolvedRequest) -> GenerateResult {
        let seeds = request.seeds();
        let mut name_rng = ChaCha8Rng::seed_from_u64(seeds.names);
        self.run_with_rng(request, &mut name_rng)
    }

    /// Run with a caller-supplied naming RNG.
    pub fn run_with_rng(&self, request: &ResolvedRequest, name_rng: &mut impl Rng) -> GenerateResult {
        let layers = terrain::classify_with(
            request.width,
            request.height,
            request.seed,
            request.noise_scale,
            &self.thresholds,
        );
        let sites = sites::place_sites(&layers, self.site_stride, &self.grammar, name_rng);
        GenerateResult {
            request: *request,
            layers,
            sites,
        }
    }
}

/// Generate a map with default settings, drawing a random seed if the request
/// has none.
pub fn generate(request: &GenerateRequest) -> GenerateResult {
    let resolved = request.resolve(&mut rand::thread_rng());
    Pipeline::default().run(&resolved)
}
