//! Keeper feature slice: admits animals, builds habitats, feeds animals and moves them
//! between habitats.
//!
//! The slice owns one in-memory store holding both tables. Every write goes through
//! [`KeeperService`] as a single serialized transaction, so two concurrent moves can never
//! hand the same habitat to two animals.

mod error;
#[cfg(feature = "server")]
mod handlers;
mod rules;
mod service;
mod store;

pub mod dto;

pub use crate::error::{KeeperError, KeeperErrorExt};
#[cfg(feature = "server")]
pub use crate::handlers::router;
pub use crate::service::KeeperService;
pub use crate::store::{Zoo, ZooStore};

use tracing::info;
use zoo_database::Database;
use zoo_kernel::domain::config::{ApiConfig, ZooConfig};
use zoo_kernel::domain::registry::InitializedSlice;

/// Keeper feature state
#[zoo_derive::zoo_slice]
pub struct Keeper {
    pub service: KeeperService,
}

impl Keeper {
    /// Opens an empty zoo store and seeds it with the configured habitats.
    ///
    /// # Errors
    /// A blank or repeated habitat name in `config`.
    pub fn from_config(config: &ZooConfig) -> Result<Self, KeeperError> {
        let store = Database::builder().name("zoo").schema(Zoo::default()).init()?;
        let service = KeeperService::new(store);
        service.seed(&config.habitats)?;

        Ok(Self::new(KeeperInner { service }))
    }
}

/// Initialize the keeper feature.
///
/// # Errors
/// Fails when the configured habitats cannot be seeded.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, KeeperError> {
    let keeper = Keeper::from_config(&config.zoo)?;
    info!(habitats = config.zoo.habitats.len(), "Keeper slice initialized");

    Ok(InitializedSlice::new(keeper))
}
