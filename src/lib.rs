//! Tile map generation library
//!
//! Seeded Perlin noise classified into four stacked tile layers, plus
//! generated place names on grass tiles. Re-exports modules for the binary.

pub mod ascii;
pub mod generate;
pub mod naming;
pub mod noise_field;
pub mod seeds;
pub mod sites;
pub mod terrain;
pub mod tilemap;
