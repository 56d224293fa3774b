//! Random move sequences must keep animals and habitats pointing at each other.

use proptest::prelude::*;
use zoo_database::Repository;
use zoo_domain::config::ZooConfig;
use zoo_domain::zoo::{AnimalType, TerrainType};
use zoo_keeper::Keeper;

const ANIMALS: [(&str, AnimalType); 4] = [
    ("monkey", AnimalType::Walking),
    ("chimp", AnimalType::Walking),
    ("eagle", AnimalType::Flying),
    ("shark", AnimalType::Swimming),
];

const HABITATS: [(&str, TerrainType); 4] = [
    ("Jungle", TerrainType::Forest),
    ("Dunes", TerrainType::Desert),
    ("Sky Dome", TerrainType::Aviary),
    ("Lagoon", TerrainType::Aquatic),
];

proptest! {
    #[test]
    fn links_stay_bidirectional(moves in prop::collection::vec((0..4usize, 0..4usize), 0..40)) {
        let keeper = Keeper::from_config(&ZooConfig::default()).unwrap();
        for (name, kind) in ANIMALS {
            keeper.service.create_animal(name, kind).unwrap();
        }
        for (name, terrain) in HABITATS {
            keeper.service.create_habitat(name, terrain).unwrap();
        }

        for (animal, habitat) in moves {
            let _ = keeper.service.move_animal(ANIMALS[animal].0, HABITATS[habitat].0);
        }

        keeper.service.inspect(|zoo| {
            for animal in zoo.animals.list() {
                if let Some(home) = &animal.habitat {
                    let habitat = zoo.habitats.find_by_name(home).unwrap();
                    assert_eq!(habitat.resident.as_deref(), Some(animal.name.as_str()));
                    assert!(animal.can_live_in(habitat));
                }
            }
            for habitat in zoo.habitats.list() {
                if let Some(resident) = &habitat.resident {
                    let animal = zoo.animals.find_by_name(resident).unwrap();
                    assert_eq!(animal.habitat.as_deref(), Some(habitat.name.as_str()));
                }
            }
        });
    }
}
