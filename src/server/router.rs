//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered here with their utoipa annotations, and
//! Swagger UI serves the resulting document at `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// Handlers sharing a path are registered in one `routes!` call so their
/// methods merge into a single route entry. The OpenAPI specification is
/// served at `/docs/openapi.json` and browsable at `/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Springfield", description = "Springfield favorites API"), tags(
        (name = controller::user::USER_TAG, description = "User account routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite set routes"),
        (name = controller::character::CHARACTER_TAG, description = "Mirrored character routes"),
        (name = controller::location::LOCATION_TAG, description = "Mirrored location routes"),
        (name = controller::catalog::UPSTREAM_TAG, description = "Upstream catalog passthrough routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_character_favorite,
            controller::favorite::remove_character_favorite
        ))
        .routes(routes!(
            controller::favorite::add_location_favorite,
            controller::favorite::remove_location_favorite
        ))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::location::get_locations))
        .routes(routes!(controller::location::get_location))
        .routes(routes!(controller::catalog::get_upstream_characters))
        .routes(routes!(controller::catalog::get_upstream_character))
        .routes(routes!(controller::catalog::get_upstream_locations))
        .routes(routes!(controller::catalog::get_upstream_location))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
