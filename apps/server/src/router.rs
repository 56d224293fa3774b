use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use zoo::kernel::prelude::ApiState;

#[derive(OpenApi)]
#[openapi(
    info(title = "Zoo Keeper", description = "Animals, habitats, feeding and relocation"),
    tags(
        (name = "Animals", description = "Admit, list, feed and move animals"),
        (name = "Habitats", description = "Build and list habitats"),
        (name = "System", description = "Health and diagnostics"),
    )
)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(zoo::server::router::system_router())
        .merge(zoo::server::router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new().merge(openapi_routes).merge(scalar_routes)
}
