//! Names shared by the store, the router and the `OpenAPI` document.

/// `OpenAPI` tag for health and diagnostics endpoints.
pub const SYSTEM_TAG: &str = "System";
pub const ANIMALS_TAG: &str = "Animals";
pub const HABITATS_TAG: &str = "Habitats";

/// Table names inside the zoo store.
pub const ANIMALS: &str = "animals";
pub const HABITATS: &str = "habitats";
