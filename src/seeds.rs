//! Seed management for map generation
//!
//! A map is identified by one floating-point master seed. The noise field is
//! seeded with the master directly; site naming gets its own seed derived
//! from it, so the same master always yields the same labels.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for each generation system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapSeeds {
    /// Master seed; the noise field is seeded with it directly
    pub master: f64,
    /// Site label RNG seed
    pub names: u64,
}

impl MapSeeds {
    /// Create seeds from a master seed, deriving sub-seeds deterministically.
    pub fn from_master(master: f64) -> Self {
        Self {
            master,
            names: derive_seed(master, "names"),
        }
    }
}

/// Derive a sub-seed from the master seed's bit pattern and a system name.
/// -0.0 and 0.0 hash alike; every NaN hashes to the same value.
fn derive_seed(master: f64, system: &str) -> u64 {
    let bits = if master.is_nan() {
        f64::NAN.to_bits()
    } else if master == 0.0 {
        0
    } else {
        master.to_bits()
    };
    let mut hasher = DefaultHasher::new();
    bits.hash(&mut hasher);
    system.hash(&mut hasher);
    hasher.finish()
}

impl std::fmt::Display for MapSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MapSeeds {{ master: {}, names: {} }}",
            self.master, self.names,
        )
    }
}
