//! Initial orbital phases.
//!
//! Bodies start at different angles so they do not line up. Phases are drawn
//! from a seeded generator (or injected directly) so a scene is reproducible.

use std::f64::consts::TAU;

use bevy::prelude::Resource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::BodyCatalog;

/// Source of the initial angle of each body.
#[derive(Resource, Clone, Debug, PartialEq)]
pub enum OrbitPhases {
    /// Uniform draws from `[0, 2π)` in catalog order.
    Seeded(u64),
    /// One angle per body in catalog order. Missing entries start at 0.
    Explicit(Vec<f64>),
}

impl OrbitPhases {
    /// Resolve one phase per catalog body, in catalog order.
    pub fn resolve(&self, catalog: &BodyCatalog) -> Vec<f64> {
        match self {
            OrbitPhases::Seeded(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                catalog.iter().map(|_| rng.gen_range(0.0..TAU)).collect()
            }
            OrbitPhases::Explicit(phases) => (0..catalog.len())
                .map(|i| phases.get(i).copied().unwrap_or(0.0))
                .collect(),
        }
    }
}
