//! Feeding and relocation rules.
//!
//! Each function performs one complete read-check-write sequence over the repositories it
//! is handed. Callers run it inside a single store transaction.

use crate::error::KeeperError;
use tracing::{debug, warn};
use zoo_database::Repository;
use zoo_domain::zoo::{Animal, AnimalType, Habitat, Mood, TerrainType};

fn checked_name(name: &str, what: &'static str) -> Result<String, KeeperError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(KeeperError::blank_name(what));
    }
    Ok(name.to_owned())
}

/// Registers a new, unhappy and homeless animal.
pub(crate) fn admit_animal<A>(
    animals: &mut A,
    name: &str,
    animal_type: AnimalType,
) -> Result<Animal, KeeperError>
where
    A: Repository<Animal>,
{
    let name = checked_name(name, "Animal")?;
    let animal = animals.insert(&name, Animal::new(name.as_str(), animal_type))?.clone();
    debug!(animal = %animal.name, kind = %animal_type, "Animal admitted");
    Ok(animal)
}

pub(crate) fn build_habitat<H>(
    habitats: &mut H,
    name: &str,
    terrain_type: TerrainType,
) -> Result<Habitat, KeeperError>
where
    H: Repository<Habitat>,
{
    let name = checked_name(name, "Habitat")?;
    let habitat = habitats.insert(&name, Habitat::new(name.as_str(), terrain_type))?.clone();
    debug!(habitat = %habitat.name, terrain = %terrain_type, "Habitat built");
    Ok(habitat)
}

/// Makes the animal happy. Feeding a happy animal changes nothing.
pub(crate) fn feed<A>(animals: &mut A, name: &str) -> Result<Animal, KeeperError>
where
    A: Repository<Animal>,
{
    let animal = animals.find_by_name_mut(name).ok_or_else(|| KeeperError::animal_not_found(name))?;
    animal.feed();
    Ok(animal.clone())
}

/// Moves an animal into `destination`.
///
/// Checks run in this order and stop at the first failure:
/// 1. the animal exists, 2. the habitat exists,
/// 3. the terrain suits the animal (on failure the animal becomes unhappy and stays put),
/// 4. the habitat is empty, even of the moving animal itself (nothing changes).
///
/// On success the previous habitat, if any, is vacated and both sides are linked.
pub(crate) fn relocate<A, H>(
    animals: &mut A,
    habitats: &mut H,
    name: &str,
    destination: &str,
) -> Result<Animal, KeeperError>
where
    A: Repository<Animal>,
    H: Repository<Habitat>,
{
    let animal = animals.find_by_name(name).ok_or_else(|| KeeperError::animal_not_found(name))?;
    let previous = animal.habitat.clone();

    let target =
        habitats.find_by_name(destination).ok_or_else(|| KeeperError::habitat_not_found(destination))?;

    if !animal.can_live_in(target) {
        let (animal_type, terrain) = (animal.animal_type, target.terrain_type);
        if let Some(animal) = animals.find_by_name_mut(name) {
            animal.mood = Mood::Unhappy;
        }
        warn!(animal = name, habitat = destination, %animal_type, %terrain, "Incompatible move rejected");
        return Err(KeeperError::Conflict {
            message: format!("{animal_type} animals cannot live on {terrain} terrain").into(),
            context: Some(format!("moving '{name}' to '{destination}'").into()),
        });
    }

    if target.is_occupied() {
        let resident = target.resident.as_deref().unwrap_or_default();
        warn!(animal = name, habitat = destination, resident, "Move into occupied habitat rejected");
        return Err(KeeperError::Conflict {
            message: format!("habitat is occupied by '{resident}'").into(),
            context: Some(format!("moving '{name}' to '{destination}'").into()),
        });
    }

    let new_home = habitats
        .find_by_name_mut(destination)
        .ok_or_else(|| KeeperError::habitat_not_found(destination))?;
    new_home.resident = Some(name.to_owned());
    if let Some(old_home) = previous.as_deref().and_then(|old| habitats.find_by_name_mut(old)) {
        old_home.resident = None;
    }

    let animal = animals.find_by_name_mut(name).ok_or_else(|| KeeperError::animal_not_found(name))?;
    animal.habitat = Some(destination.to_owned());
    debug!(animal = name, from = ?previous, to = destination, "Animal relocated");
    Ok(animal.clone())
}
