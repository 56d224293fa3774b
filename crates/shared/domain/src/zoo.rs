//! Zoo entities and the rules that need nothing but the entities themselves.
//!
//! Animals and habitats reference each other by name only: `Animal::habitat` names the
//! habitat an animal lives in, `Habitat::resident` names the animal living there. Both
//! sides are kept in sync by the keeper service when an animal moves.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How an animal gets around. Fixed at creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AnimalType {
    Walking,
    Flying,
    Swimming,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Mood {
    Happy,
    #[default]
    Unhappy,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TerrainType {
    Forest,
    Desert,
    Aquatic,
    Aviary,
}

impl AnimalType {
    /// Terrains this kind of animal may live on.
    #[must_use]
    pub const fn habitable_terrains(self) -> &'static [TerrainType] {
        match self {
            Self::Walking => &[TerrainType::Forest, TerrainType::Desert],
            Self::Flying => &[TerrainType::Aviary],
            Self::Swimming => &[TerrainType::Aquatic],
        }
    }

    #[must_use]
    pub fn is_compatible(self, terrain: TerrainType) -> bool {
        self.habitable_terrains().contains(&terrain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub name: String,
    #[serde(rename = "type")]
    pub animal_type: AnimalType,
    pub mood: Mood,
    /// Name of the habitat the animal lives in.
    pub habitat: Option<String>,
}

impl Animal {
    /// A newly arrived animal: unhappy and homeless.
    #[must_use]
    pub fn new(name: impl Into<String>, animal_type: AnimalType) -> Self {
        Self { name: name.into(), animal_type, mood: Mood::Unhappy, habitat: None }
    }

    pub const fn feed(&mut self) {
        self.mood = Mood::Happy;
    }

    #[must_use]
    pub fn can_live_in(&self, habitat: &Habitat) -> bool {
        self.animal_type.is_compatible(habitat.terrain_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habitat {
    pub name: String,
    pub terrain_type: TerrainType,
    /// Name of the single animal living here.
    pub resident: Option<String>,
}

impl Habitat {
    #[must_use]
    pub fn new(name: impl Into<String>, terrain_type: TerrainType) -> Self {
        Self { name: name.into(), terrain_type, resident: None }
    }

    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.resident.is_some()
    }
}
