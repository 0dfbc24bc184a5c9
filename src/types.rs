//! Shared identifiers, schedule sets and configuration for the orrery.

use std::borrow::Borrow;
use std::fmt;

use bevy::prelude::*;

use crate::camera::CameraConfig;
use crate::orbit::OrbitConfig;

/// Default seed for initial orbital phases.
pub const DEFAULT_SEED: u64 = 0x5eed_0b17;

/// Environment variable overriding [`DEFAULT_SEED`] in the binary.
pub const SEED_ENV_VAR: &str = "ORRERY_SEED";

/// Unique identifier of a body in the catalog (e.g. `"earth"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for BodyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for BodyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Per-frame ordering of the core.
///
/// Selection changes from input are applied first, so a pick made this frame
/// freezes orbits this frame. Orbits advance next, then the camera consumes
/// whatever the director issued.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrrerySet {
    /// Pointer/keyboard resolution into pick and clear messages.
    Input,
    /// Selection state machine transitions.
    Selection,
    /// Orbit integration under the pause gate.
    Orbit,
    /// Camera director commands and rig interpolation.
    Camera,
    /// Transform sync and drawing for the renderer.
    Present,
}

/// Configures the tick ordering on `Update`.
pub(crate) fn configure_orrery_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            OrrerySet::Input,
            OrrerySet::Selection,
            OrrerySet::Orbit,
            OrrerySet::Camera,
            OrrerySet::Present,
        )
            .chain(),
    );
}

/// Construction-time configuration of the whole core.
#[derive(Resource, Clone, Debug)]
pub struct OrreryConfig {
    pub orbit: OrbitConfig,
    pub camera: CameraConfig,
    /// Seed for initial orbital phases and decorative scatter.
    pub seed: u64,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            orbit: OrbitConfig::default(),
            camera: CameraConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl OrreryConfig {
    /// Default configuration with the seed taken from [`SEED_ENV_VAR`] when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(SEED_ENV_VAR) {
            match parse_seed(&raw) {
                Some(seed) => config.seed = seed,
                None => warn!("Ignoring {SEED_ENV_VAR}={raw:?}: not an unsigned integer"),
            }
        }
        config
    }
}

/// Parse a seed as decimal or `0x`-prefixed hexadecimal.
fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_decimal_and_hex() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" 0xff "), Some(255));
        assert_eq!(parse_seed("0XFF"), Some(255));
        assert_eq!(parse_seed("-1"), None);
        assert_eq!(parse_seed("earth"), None);
    }

    #[test]
    fn test_body_id_borrows_as_str() {
        let id = BodyId::from("earth");
        assert_eq!(id.as_str(), "earth");
        assert_eq!(id.to_string(), "earth");

        let mut map = std::collections::HashMap::new();
        map.insert(id.clone(), 1);
        assert_eq!(map.get("earth"), Some(&1));
    }
}
