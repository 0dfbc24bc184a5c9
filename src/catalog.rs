//! Body catalog: the read-only table of orbiting bodies and their attributes.
//!
//! Distances and sizes are simplified scene units, not physical values.
//! The star at the center is not part of the catalog; it is rendered separately.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::error::CatalogError;
use crate::types::BodyId;

/// Static attributes of one orbiting body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyData {
    pub id: BodyId,
    pub name: String,
    /// Display color as sRGB bytes.
    pub color: [u8; 3],
    /// Visual radius in scene units (> 0).
    pub radius: f32,
    /// Distance from the center in scene units (>= 0).
    pub orbit_radius: f32,
    /// Angular speed multiplier; 0 keeps the body stationary.
    pub speed: f32,
    pub has_ring: bool,
    pub description_ja: String,
    pub description_en: String,
}

impl BodyData {
    pub fn new(id: impl Into<BodyId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: [255, 255, 255],
            radius: 1.0,
            orbit_radius: 0.0,
            speed: 0.0,
            has_ring: false,
            description_ja: String::new(),
            description_en: String::new(),
        }
    }

    pub fn with_orbit(mut self, orbit_radius: f32, speed: f32) -> Self {
        self.orbit_radius = orbit_radius;
        self.speed = speed;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_ring(mut self) -> Self {
        self.has_ring = true;
        self
    }

    pub fn with_descriptions(mut self, ja: impl Into<String>, en: impl Into<String>) -> Self {
        self.description_ja = ja.into();
        self.description_en = en.into();
        self
    }

    /// Render color.
    pub fn render_color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb_u8(r, g, b)
    }

    /// Whether the body carries visible atmosphere glow.
    pub fn has_atmosphere(&self) -> bool {
        matches!(self.id.as_str(), "venus" | "earth" | "mars")
    }

    /// Whether the body is shaded as a gas giant.
    pub fn is_gas_giant(&self) -> bool {
        matches!(self.id.as_str(), "jupiter" | "saturn" | "uranus" | "neptune")
    }
}

/// Immutable, validated list of bodies.
///
/// Supplied once at start; nothing in the core mutates it afterwards.
#[derive(Resource, Clone, Debug)]
pub struct BodyCatalog {
    bodies: Vec<BodyData>,
    index: HashMap<BodyId, usize>,
}

impl BodyCatalog {
    /// Validate and index a list of bodies.
    pub fn new(bodies: Vec<BodyData>) -> Result<Self, CatalogError> {
        if bodies.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(bodies.len());
        let mut centered: Option<&BodyId> = None;

        for (i, body) in bodies.iter().enumerate() {
            if !(body.radius > 0.0 && body.radius.is_finite()) {
                return Err(CatalogError::NonPositiveRadius {
                    id: body.id.clone(),
                    radius: body.radius,
                });
            }
            if !(body.orbit_radius >= 0.0 && body.orbit_radius.is_finite()) {
                return Err(CatalogError::InvalidOrbitRadius {
                    id: body.id.clone(),
                    orbit_radius: body.orbit_radius,
                });
            }
            if !body.speed.is_finite() {
                return Err(CatalogError::NonFiniteSpeed {
                    id: body.id.clone(),
                    speed: body.speed,
                });
            }
            if body.orbit_radius == 0.0 {
                if let Some(first) = centered {
                    return Err(CatalogError::SharedCenter {
                        first: first.clone(),
                        second: body.id.clone(),
                    });
                }
                centered = Some(&body.id);
            }
            if index.insert(body.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(body.id.clone()));
            }
        }

        Ok(Self { bodies, index })
    }

    pub fn get(&self, id: &str) -> Option<&BodyData> {
        self.index.get(id).map(|&i| &self.bodies[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of the body in catalog order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyData> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        let bodies = solar_system();
        let index = bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect();
        Self { bodies, index }
    }
}

/// The eight planets in scene units.
pub fn solar_system() -> Vec<BodyData> {
    vec![
        BodyData::new("mercury", "Mercury")
            .with_color([0xA5, 0xA5, 0xA5])
            .with_radius(0.4)
            .with_orbit(5.0, 4.1)
            .with_descriptions(
                "太陽に最も近い惑星。昼は430℃、夜は-180℃という極端な温度差があります。",
                "The closest planet to the Sun, swinging between 430°C days and -180°C nights.",
            ),
        BodyData::new("venus", "Venus")
            .with_color([0xE3, 0xBB, 0x76])
            .with_radius(0.9)
            .with_orbit(7.5, 1.6)
            .with_descriptions(
                "厚い二酸化炭素の大気に覆われ、太陽系で最も熱い惑星です。",
                "Wrapped in thick carbon dioxide, the hottest planet in the Solar System.",
            ),
        BodyData::new("earth", "Earth")
            .with_color([0x22, 0x7B, 0xE3])
            .with_radius(1.0)
            .with_orbit(10.0, 1.0)
            .with_descriptions(
                "液体の水と生命が確認されている唯一の惑星です。",
                "The only known world with liquid surface water and life.",
            ),
        BodyData::new("mars", "Mars")
            .with_color([0xE2, 0x7B, 0x58])
            .with_radius(0.6)
            .with_orbit(14.0, 0.53)
            .with_descriptions(
                "赤い砂に覆われた惑星。太陽系最大の火山オリンポス山があります。",
                "The red planet, home of Olympus Mons, the largest volcano in the Solar System.",
            ),
        BodyData::new("jupiter", "Jupiter")
            .with_color([0xD3, 0x9C, 0x7E])
            .with_radius(2.0)
            .with_orbit(19.0, 0.35)
            .with_descriptions(
                "太陽系最大のガス惑星。大赤斑は地球より大きな嵐です。",
                "The largest gas giant; its Great Red Spot is a storm wider than Earth.",
            ),
        BodyData::new("saturn", "Saturn")
            .with_color([0xC5, 0xAB, 0x6E])
            .with_radius(1.7)
            .with_orbit(25.0, 0.24)
            .with_ring()
            .with_descriptions(
                "氷と岩でできた美しい環を持つガス惑星です。",
                "A gas giant crowned by bright rings of ice and rock.",
            ),
        BodyData::new("uranus", "Uranus")
            .with_color([0xBB, 0xE1, 0xE4])
            .with_radius(1.2)
            .with_orbit(30.0, 0.17)
            .with_descriptions(
                "自転軸が横倒しになったまま公転する氷の巨人です。",
                "An ice giant that rolls around the Sun on its side.",
            ),
        BodyData::new("neptune", "Neptune")
            .with_color([0x60, 0x81, 0xFF])
            .with_radius(1.2)
            .with_orbit(35.0, 0.13)
            .with_descriptions(
                "太陽系で最も強い風が吹く、青い氷の巨人です。",
                "A deep blue ice giant with the fastest winds in the Solar System.",
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let bodies = solar_system();
        let validated = BodyCatalog::new(bodies.clone()).expect("default catalog must validate");
        assert_eq!(validated.len(), 8);
        assert_eq!(BodyCatalog::default().len(), validated.len());
        assert!(validated.get("saturn").is_some_and(|b| b.has_ring));
        assert_eq!(validated.index_of("earth"), Some(2));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let bodies = vec![
            BodyData::new("earth", "Earth").with_orbit(10.0, 1.0),
            BodyData::new("earth", "Earth again").with_orbit(12.0, 1.0),
        ];
        assert_eq!(
            BodyCatalog::new(bodies).unwrap_err(),
            CatalogError::DuplicateId(BodyId::from("earth"))
        );
    }

    #[test]
    fn test_invalid_attributes_rejected() {
        let zero_radius = BodyData::new("a", "A").with_radius(0.0).with_orbit(1.0, 1.0);
        assert!(matches!(
            BodyCatalog::new(vec![zero_radius]),
            Err(CatalogError::NonPositiveRadius { .. })
        ));

        let negative_orbit = BodyData::new("a", "A").with_orbit(-1.0, 1.0);
        assert!(matches!(
            BodyCatalog::new(vec![negative_orbit]),
            Err(CatalogError::InvalidOrbitRadius { .. })
        ));

        let nan_speed = BodyData::new("a", "A").with_orbit(1.0, f32::NAN);
        assert!(matches!(
            BodyCatalog::new(vec![nan_speed]),
            Err(CatalogError::NonFiniteSpeed { .. })
        ));

        assert_eq!(BodyCatalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_shared_radius_allowed_but_not_shared_center() {
        let twins = vec![
            BodyData::new("a", "A").with_orbit(10.0, 1.0),
            BodyData::new("b", "B").with_orbit(10.0, 2.0),
        ];
        assert!(BodyCatalog::new(twins).is_ok());

        let centered = vec![
            BodyData::new("a", "A").with_orbit(0.0, 0.0),
            BodyData::new("b", "B").with_orbit(0.0, 0.0),
        ];
        assert!(matches!(
            BodyCatalog::new(centered),
            Err(CatalogError::SharedCenter { .. })
        ));
    }
}
