use crate::Keeper;
use crate::dto::{AnimalFilter, AnimalView, CreateAnimalRequest, CreateHabitatRequest, HabitatView};
use crate::error::KeeperError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection, StringRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use zoo_derive::api_handler;
use zoo_domain::constants::{ANIMALS_TAG, HABITATS_TAG};
use zoo_kernel::server::{ApiState, ErrorBody};

/// Animal and habitat routes.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_animals, create_animal))
        .routes(routes!(feed_animal))
        .routes(routes!(move_animal))
        .routes(routes!(list_habitats, create_habitat))
}

fn keeper(state: &ApiState) -> Result<&Keeper, KeeperError> {
    Ok(state.try_get_slice::<Keeper>()?)
}

#[api_handler(
    get,
    path = "/animals",
    params(AnimalFilter),
    responses(
        (status = OK, description = "Matching animals in arrival order", body = [AnimalView]),
        (status = BAD_REQUEST, description = "Unknown mood or type", body = ErrorBody),
    ),
    tag = ANIMALS_TAG,
)]
pub(crate) async fn list_animals(
    State(state): State<ApiState>,
    filter: Result<Query<AnimalFilter>, QueryRejection>,
) -> Result<Json<Vec<AnimalView>>, KeeperError> {
    let Query(filter) = filter?;
    Ok(Json(keeper(&state)?.service.list_animals(&filter)))
}

#[api_handler(
    post,
    path = "/animals",
    request_body = CreateAnimalRequest,
    responses(
        (status = CREATED, description = "Animal admitted", body = AnimalView),
        (status = BAD_REQUEST, description = "Blank name or malformed body", body = ErrorBody),
        (status = CONFLICT, description = "Name already taken", body = ErrorBody),
    ),
    tag = ANIMALS_TAG,
)]
pub(crate) async fn create_animal(
    State(state): State<ApiState>,
    payload: Result<Json<CreateAnimalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AnimalView>), KeeperError> {
    let Json(request) = payload?;
    let animal = keeper(&state)?.service.create_animal(&request.name, request.animal_type)?;
    Ok((StatusCode::CREATED, Json(animal)))
}

#[api_handler(
    post,
    path = "/animals/{name}/feed",
    params(("name" = String, Path, description = "Animal name")),
    responses(
        (status = OK, description = "Animal is happy", body = AnimalView),
        (status = NOT_FOUND, description = "No such animal", body = ErrorBody),
    ),
    tag = ANIMALS_TAG,
)]
pub(crate) async fn feed_animal(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Result<Json<AnimalView>, KeeperError> {
    Ok(Json(keeper(&state)?.service.feed(&name)?))
}

#[api_handler(
    post,
    path = "/animals/{name}/move",
    params(("name" = String, Path, description = "Animal name")),
    request_body(content = String, content_type = "text/plain", description = "Destination habitat name"),
    responses(
        (status = OK, description = "Animal moved", body = AnimalView),
        (status = BAD_REQUEST, description = "Body is not valid UTF-8", body = ErrorBody),
        (status = NOT_FOUND, description = "No such animal or habitat", body = ErrorBody),
        (status = CONFLICT, description = "Incompatible terrain or occupied habitat", body = ErrorBody),
    ),
    tag = ANIMALS_TAG,
)]
pub(crate) async fn move_animal(
    State(state): State<ApiState>,
    Path(name): Path<String>,
    habitat: Result<String, StringRejection>,
) -> Result<Json<AnimalView>, KeeperError> {
    let habitat = habitat?;
    Ok(Json(keeper(&state)?.service.move_animal(&name, habitat.trim())?))
}

#[api_handler(
    get,
    path = "/habitats",
    responses((status = OK, description = "All habitats in build order", body = [HabitatView])),
    tag = HABITATS_TAG,
)]
pub(crate) async fn list_habitats(
    State(state): State<ApiState>,
) -> Result<Json<Vec<HabitatView>>, KeeperError> {
    Ok(Json(keeper(&state)?.service.list_habitats()))
}

#[api_handler(
    post,
    path = "/habitats",
    request_body = CreateHabitatRequest,
    responses(
        (status = CREATED, description = "Habitat built", body = HabitatView),
        (status = BAD_REQUEST, description = "Blank name or malformed body", body = ErrorBody),
        (status = CONFLICT, description = "Name already taken", body = ErrorBody),
    ),
    tag = HABITATS_TAG,
)]
pub(crate) async fn create_habitat(
    State(state): State<ApiState>,
    payload: Result<Json<CreateHabitatRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<HabitatView>), KeeperError> {
    let Json(request) = payload?;
    let habitat = keeper(&state)?.service.create_habitat(&request.name, request.terrain_type)?;
    Ok((StatusCode::CREATED, Json(habitat)))
}
