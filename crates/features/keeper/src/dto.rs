//! Request and response bodies of the keeper routes.

use zoo_derive::api_model;
use zoo_domain::zoo::{Animal, AnimalType, Habitat, Mood, TerrainType};

/// Body of `POST /animals`.
///
/// `mood` and `habitat` may be sent but are ignored: every animal arrives unhappy and homeless.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct CreateAnimalRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub animal_type: AnimalType,
}

/// Body of `POST /habitats`.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct CreateHabitatRequest {
    pub name: String,
    pub terrain_type: TerrainType,
}

/// Query string of `GET /animals`. Given filters must all match.
#[api_model(deny_unknown_fields = false)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct AnimalFilter {
    pub mood: Option<Mood>,
    #[serde(rename = "type")]
    pub animal_type: Option<AnimalType>,
}

impl AnimalFilter {
    #[must_use]
    pub fn matches(&self, animal: &Animal) -> bool {
        self.mood.is_none_or(|mood| animal.mood == mood)
            && self.animal_type.is_none_or(|kind| animal.animal_type == kind)
    }
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct HabitatRef {
    pub name: String,
    pub terrain_type: TerrainType,
}

/// An animal as returned by every animal route.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct AnimalView {
    pub name: String,
    #[serde(rename = "type")]
    pub animal_type: AnimalType,
    pub mood: Mood,
    pub habitat: Option<HabitatRef>,
}

impl AnimalView {
    /// `home` is the habitat named by `animal.habitat`, already resolved.
    #[must_use]
    pub fn new(animal: &Animal, home: Option<&Habitat>) -> Self {
        Self {
            name: animal.name.clone(),
            animal_type: animal.animal_type,
            mood: animal.mood,
            habitat: home.map(|h| HabitatRef { name: h.name.clone(), terrain_type: h.terrain_type }),
        }
    }
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct HabitatView {
    pub name: String,
    pub terrain_type: TerrainType,
    /// Name of the animal living here
    pub resident: Option<String>,
}

impl From<&Habitat> for HabitatView {
    fn from(habitat: &Habitat) -> Self {
        Self {
            name: habitat.name.clone(),
            terrain_type: habitat.terrain_type,
            resident: habitat.resident.clone(),
        }
    }
}
