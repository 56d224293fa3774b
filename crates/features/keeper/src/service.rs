use crate::dto::{AnimalFilter, AnimalView, HabitatView};
use crate::error::{KeeperError, KeeperErrorExt};
use crate::rules;
use crate::store::{Zoo, ZooStore};
use tracing::instrument;
use zoo_database::Repository;
use zoo_domain::config::HabitatSeed;
use zoo_domain::zoo::{AnimalType, TerrainType};

/// Entry point for every keeper operation.
///
/// Writes run as one exclusive store transaction each; reads share the lock.
#[derive(Debug, Clone)]
pub struct KeeperService {
    store: ZooStore,
}

impl KeeperService {
    #[must_use]
    pub const fn new(store: ZooStore) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn create_animal(
        &self,
        name: &str,
        animal_type: AnimalType,
    ) -> Result<AnimalView, KeeperError> {
        self.store.transaction(|zoo| {
            let animal = rules::admit_animal(&mut zoo.animals, name, animal_type)?;
            Ok(zoo.animal_view(&animal))
        })
    }

    #[instrument(skip(self))]
    pub fn feed(&self, name: &str) -> Result<AnimalView, KeeperError> {
        self.store.transaction(|zoo| {
            let animal = rules::feed(&mut zoo.animals, name)?;
            Ok(zoo.animal_view(&animal))
        })
    }

    #[instrument(skip(self))]
    pub fn move_animal(&self, name: &str, habitat: &str) -> Result<AnimalView, KeeperError> {
        self.store.transaction(|zoo| {
            let animal = rules::relocate(&mut zoo.animals, &mut zoo.habitats, name, habitat)?;
            Ok(zoo.animal_view(&animal))
        })
    }

    /// Animals matching `filter`, in the order they were admitted.
    #[instrument(skip(self))]
    pub fn list_animals(&self, filter: &AnimalFilter) -> Vec<AnimalView> {
        self.store.read(|zoo| {
            zoo.animals
                .list()
                .filter(|animal| filter.matches(animal))
                .map(|animal| zoo.animal_view(animal))
                .collect()
        })
    }

    #[instrument(skip(self))]
    pub fn create_habitat(
        &self,
        name: &str,
        terrain_type: TerrainType,
    ) -> Result<HabitatView, KeeperError> {
        self.store.transaction(|zoo| {
            rules::build_habitat(&mut zoo.habitats, name, terrain_type).map(|h| HabitatView::from(&h))
        })
    }

    #[instrument(skip(self))]
    pub fn list_habitats(&self) -> Vec<HabitatView> {
        self.store.read(|zoo| zoo.habitat_views().collect())
    }

    /// Builds the configured habitats in order.
    ///
    /// # Errors
    /// Stops at the first blank or repeated name.
    pub fn seed(&self, seeds: &[HabitatSeed]) -> Result<(), KeeperError> {
        seeds.iter().try_for_each(|seed| {
            self.create_habitat(&seed.name, seed.terrain_type)
                .map(drop)
                .context("Seeding habitats from config")
        })
    }

    /// Read-only access to the raw store contents.
    pub fn inspect<T>(&self, f: impl FnOnce(&Zoo) -> T) -> T {
        self.store.read(f)
    }
}
