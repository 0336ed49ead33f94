//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all ship endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/ships` - List ships matching optional filters, paginated
/// - `GET /api/ships/count` - Count ships matching optional filters
/// - `POST /api/ships` - Create a ship
/// - `GET /api/ships/{id}` - Get a ship by ID
/// - `POST /api/ships/{id}` - Edit a ship
/// - `DELETE /api/ships/{id}` - Delete a ship
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Starport", description = "Starport ship registry API"), tags(
        (name = controller::ship::SHIP_TAG, description = "Ship registry API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::ship::get_ships,
            controller::ship::create_ship
        ))
        .routes(routes!(controller::ship::get_ships_count))
        .routes(routes!(
            controller::ship::get_ship,
            controller::ship::edit_ship,
            controller::ship::delete_ship
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
