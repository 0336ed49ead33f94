use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        ship::{PageParams, ShipDto, ShipFilterParams, ShipPayloadDto},
    },
    service::ship::ShipService,
};

pub static SHIP_TAG: &str = "ship";

/// Get one page of ships matching the filter parameters
#[utoipa::path(
    get,
    path = "/api/ships",
    tag = SHIP_TAG,
    params(ShipFilterParams, PageParams),
    responses(
        (status = 200, description = "Success when listing ships", body = Vec<ShipDto>),
        (status = 400, description = "Invalid filter parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ships(
    State(state): State<AppState>,
    Query(filter): Query<ShipFilterParams>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let ship_service = ShipService::new(&state.db);

    let ships = ship_service.list(&filter, &page).await?;
    let dtos: Vec<ShipDto> = ships.into_iter().map(ShipDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// Count all ships matching the filter parameters
#[utoipa::path(
    get,
    path = "/api/ships/count",
    tag = SHIP_TAG,
    params(ShipFilterParams),
    responses(
        (status = 200, description = "Success when counting ships", body = u64),
        (status = 400, description = "Invalid filter parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ships_count(
    State(state): State<AppState>,
    Query(filter): Query<ShipFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let ship_service = ShipService::new(&state.db);

    let count = ship_service.count(&filter).await?;

    Ok((StatusCode::OK, Json(count)).into_response())
}

/// Create a ship
#[utoipa::path(
    post,
    path = "/api/ships",
    tag = SHIP_TAG,
    request_body = ShipPayloadDto,
    responses(
        (status = 200, description = "Success when creating a ship", body = ShipDto),
        (status = 400, description = "Missing or out-of-range ship data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ship(
    State(state): State<AppState>,
    Json(payload): Json<ShipPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let ship_service = ShipService::new(&state.db);

    let created = ship_service.create(payload).await?;

    Ok((StatusCode::OK, Json(ShipDto::from(created))).into_response())
}

/// Get a ship by ID
#[utoipa::path(
    get,
    path = "/api/ships/{id}",
    tag = SHIP_TAG,
    params(("id" = String, Path, description = "Ship ID")),
    responses(
        (status = 200, description = "Success when retrieving a ship", body = ShipDto),
        (status = 400, description = "Malformed ship ID", body = ErrorDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let ship_service = ShipService::new(&state.db);

    let id = ShipService::parse_id(Some(&id))?;
    let ship = ship_service.get(id).await?;

    Ok((StatusCode::OK, Json(ShipDto::from(ship))).into_response())
}

/// Edit a ship, overwriting only the supplied fields
#[utoipa::path(
    post,
    path = "/api/ships/{id}",
    tag = SHIP_TAG,
    params(("id" = String, Path, description = "Ship ID")),
    request_body = ShipPayloadDto,
    responses(
        (status = 200, description = "Success when editing a ship", body = ShipDto),
        (status = 400, description = "Malformed ship ID or out-of-range ship data", body = ErrorDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_ship(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ShipPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let ship_service = ShipService::new(&state.db);

    let id = ShipService::parse_id(Some(&id))?;
    let edited = ship_service.edit(id, payload).await?;

    Ok((StatusCode::OK, Json(ShipDto::from(edited))).into_response())
}

/// Delete a ship by ID
#[utoipa::path(
    delete,
    path = "/api/ships/{id}",
    tag = SHIP_TAG,
    params(("id" = String, Path, description = "Ship ID")),
    responses(
        (status = 200, description = "Success when deleting a ship"),
        (status = 400, description = "Malformed ship ID", body = ErrorDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let ship_service = ShipService::new(&state.db);

    let id = ShipService::parse_id(Some(&id))?;
    ship_service.delete(id).await?;

    Ok(StatusCode::OK.into_response())
}
