//! Facade crate for the zoo features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `zoo` with the `server` feature.
//! - Call [`init`] to build every feature slice, then merge [`server::router::api_router`]
//!   into the application router.

pub use zoo_domain as domain;
use zoo_domain::config::ApiConfig;
use zoo_domain::registry::InitializedSlice;
pub use zoo_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use zoo_kernel::server::system_router;
        use zoo_kernel::server::ApiState;
        use utoipa_axum::router::OpenApiRouter;

        /// Routes of every enabled feature slice.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            crate::features::keeper::router()
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use zoo_keeper as keeper;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "keeper",
        #[cfg(feature = "server")]
        "server",
    ];
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let slices = vec![features::keeper::init(config)?];

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_registers_every_slice() {
        let slices = init(&ApiConfig::default()).unwrap();
        assert_eq!(slices.len(), 1);
        assert!(slices[0].downcast_ref::<features::keeper::Keeper>().is_some());
    }
}
