//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, the slice registry behind [`server::ApiState`],
//! the system routes and the JSON error body every slice answers with.
//!
//! ## Config loading
//! ```rust,no_run
//! use zoo_kernel::config::load_config;
//! use zoo_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(None::<&str>)?;
//! # Ok::<(), zoo_kernel::config::ConfigError>(())
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use zoo_domain as domain;
