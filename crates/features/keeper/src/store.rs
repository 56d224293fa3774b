use crate::dto::{AnimalView, HabitatView};
use zoo_database::{Database, Repository, Table};
use zoo_domain::constants::{ANIMALS, HABITATS};
use zoo_domain::zoo::{Animal, Habitat};

/// Contents of the zoo store.
#[derive(Debug, Clone)]
pub struct Zoo {
    pub animals: Table<Animal>,
    pub habitats: Table<Habitat>,
}

pub type ZooStore = Database<Zoo>;

impl Default for Zoo {
    fn default() -> Self {
        Self { animals: Table::new(ANIMALS), habitats: Table::new(HABITATS) }
    }
}

impl Zoo {
    #[must_use]
    pub fn animal_view(&self, animal: &Animal) -> AnimalView {
        let home = animal.habitat.as_deref().and_then(|name| self.habitats.find_by_name(name));
        AnimalView::new(animal, home)
    }

    pub fn habitat_views(&self) -> impl Iterator<Item = HabitatView> + '_ {
        self.habitats.list().map(HabitatView::from)
    }
}
