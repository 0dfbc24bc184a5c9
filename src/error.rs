//! Error types for catalog construction and selection.

use crate::types::BodyId;

/// Rejected body catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("catalog contains no bodies")]
    Empty,

    #[error("duplicate body id {0}")]
    DuplicateId(BodyId),

    #[error("body {id} has non-positive radius {radius}")]
    NonPositiveRadius { id: BodyId, radius: f32 },

    #[error("body {id} has invalid orbit radius {orbit_radius} (must be finite and >= 0)")]
    InvalidOrbitRadius { id: BodyId, orbit_radius: f32 },

    #[error("bodies {first} and {second} both sit at the center (orbit radius 0)")]
    SharedCenter { first: BodyId, second: BodyId },

    #[error("body {id} has non-finite angular speed {speed}")]
    NonFiniteSpeed { id: BodyId, speed: f32 },
}

/// Rejected selection request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no body with id {0} in the catalog")]
    UnknownBody(BodyId),
}
