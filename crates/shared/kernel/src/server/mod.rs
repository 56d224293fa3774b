//! HTTP plumbing shared by every slice.

mod error;
mod health;
mod state;

pub use self::error::{ErrorBody, ErrorCode};
pub use self::state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};

use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Health and diagnostics routes.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}
