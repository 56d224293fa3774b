//! Everyday imports for slices and applications.

pub use crate::config::{ConfigError, load_config};
pub use zoo_domain::config::ApiConfig;
pub use zoo_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError, ErrorBody, ErrorCode, system_router};
