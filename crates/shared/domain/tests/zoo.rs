use serde_json::json;
use zoo_domain::zoo::{Animal, AnimalType, Habitat, Mood, TerrainType};

#[test]
fn animal_serializes_with_wire_names() {
    let mut chimp = Animal::new("chimp", AnimalType::Walking);
    chimp.feed();

    let value = serde_json::to_value(&chimp).expect("serialize");
    assert_eq!(value, json!({ "name": "chimp", "type": "WALKING", "mood": "HAPPY", "habitat": null }));
}

#[test]
fn habitat_serializes_with_wire_names() {
    let mut jungle = Habitat::new("Monkey's Jungle", TerrainType::Forest);
    jungle.resident = Some("monkey".to_owned());

    let value = serde_json::to_value(&jungle).expect("serialize");
    assert_eq!(
        value,
        json!({ "name": "Monkey's Jungle", "terrainType": "FOREST", "resident": "monkey" })
    );
    assert!(jungle.is_occupied());
}

#[test]
fn mood_defaults_to_unhappy() {
    assert_eq!(Mood::default(), Mood::Unhappy);
}
