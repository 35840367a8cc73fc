//! Named-site placement on grass tiles.

use rand::Rng;
use serde::Serialize;

use crate::naming::{self, Grammar};
use crate::terrain::{TerrainLayers, GRASS};

/// Candidate cells are every `DEFAULT_SITE_STRIDE`-th column and row.
pub const DEFAULT_SITE_STRIDE: usize = 5;

/// A labelled grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedSite {
    pub x: usize,
    pub y: usize,
    pub label: String,
}

impl NamedSite {
    /// Centre of the site's tile in presentation space, where a label is anchored.
    /// Saturates instead of wrapping on absurdly large grids.
    pub fn pixel_center(&self, tile_size: u32) -> (u64, u64) {
        let tile = u64::from(tile_size);
        let half = tile / 2;
        let to_pixels = |cell: usize| (cell as u64).saturating_mul(tile).saturating_add(half);
        (to_pixels(self.x), to_pixels(self.y))
    }
}

/// Name every grass cell whose coordinates are both multiples of `stride`.
///
/// Sites come back in row-major order (y outer, x inner). `rng` is only drawn
/// from for cells that get a name, so the label sequence depends on the map.
/// A stride of 0 is treated as 1.
pub fn place_sites(
    layers: &TerrainLayers,
    stride: usize,
    grammar: &Grammar,
    rng: &mut impl Rng,
) -> Vec<NamedSite> {
    let stride = stride.max(1);
    let mut sites = Vec::new();

    for y in (0..layers.height()).step_by(stride) {
        for x in (0..layers.width()).step_by(stride) {
            if *layers.base.get(x, y) == GRASS {
                sites.push(NamedSite {
                    x,
                    y,
                    label: naming::generate(rng, grammar),
                });
            }
        }
    }

    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{classify, WATER};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn all_grass(width: usize, height: usize) -> TerrainLayers {
        let mut layers = TerrainLayers::new(width, height);
        for y in 0..height {
            for x in 0..width {
                layers.base.set(x, y, GRASS);
            }
        }
        layers
    }

    #[test]
    fn test_sites_on_stride_and_grass() {
        let layers = classify(20, 15, 42.0, 10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sites = place_sites(&layers, DEFAULT_SITE_STRIDE, &Grammar::default(), &mut rng);
        for site in &sites {
            assert_eq!(site.x % 5, 0);
            assert_eq!(site.y % 5, 0);
            assert_eq!(*layers.base.get(site.x, site.y), GRASS);
            assert!(!site.label.is_empty());
        }
        let expected = layers
            .base
            .iter()
            .filter(|&(x, y, &c)| x % 5 == 0 && y % 5 == 0 && c == GRASS)
            .count();
        assert_eq!(sites.len(), expected);
    }

    #[test]
    fn test_row_major_order() {
        let layers = all_grass(20, 15);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sites = place_sites(&layers, 5, &Grammar::default(), &mut rng);
        let coords: Vec<(usize, usize)> = sites.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(
            coords,
            vec![
                (0, 0), (5, 0), (10, 0), (15, 0),
                (0, 5), (5, 5), (10, 5), (15, 5),
                (0, 10), (5, 10), (10, 10), (15, 10),
            ]
        );
    }

    #[test]
    fn test_water_gets_no_sites() {
        let mut layers = all_grass(10, 10);
        layers.base.set(0, 0, WATER);
        layers.base.set(5, 5, WATER);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sites = place_sites(&layers, 5, &Grammar::default(), &mut rng);
        let coords: Vec<(usize, usize)> = sites.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(coords, vec![(5, 0), (0, 5)]);
    }

    #[test]
    fn test_same_rng_same_sites() {
        let layers = classify(20, 15, 42.0, 10.0);
        let grammar = Grammar::default();
        let a = place_sites(&layers, 5, &grammar, &mut ChaCha8Rng::seed_from_u64(8));
        let b = place_sites(&layers, 5, &grammar, &mut ChaCha8Rng::seed_from_u64(8));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_stride_and_empty_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let grammar = Grammar::default();
        let sites = place_sites(&all_grass(3, 2), 0, &grammar, &mut rng);
        assert_eq!(sites.len(), 6);
        let none = place_sites(&TerrainLayers::new(0, 0), 5, &grammar, &mut rng);
        assert!(none.is_empty());
    }

    #[test]
    fn test_pixel_center() {
        let site = NamedSite { x: 5, y: 10, label: "Goldville".to_string() };
        assert_eq!(site.pixel_center(64), (352, 672));
    }

    #[test]
    fn test_pixel_center_wide_grid() {
        let site = NamedSite { x: 70_000, y: 0, label: "Yorkdale".to_string() };
        // 70,000 * 65,536 overflows u32
        assert_eq!(site.pixel_center(65_536), (4_587_552_768, 32_768));
    }
}
