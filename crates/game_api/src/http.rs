//! Module used to serve the routes of the API. Each submodule is specific
//! for a route segment.

use actix_web::web::JsonConfig;
use actix_web::{Responder, Scope, web};
use rate_limiter::RateLimit;
use serde::Serialize;

use crate::ApiResponse;
use crate::utils::json;

pub mod game;
pub mod rating;

pub fn api_route(rate_limit: RateLimit) -> Scope {
    let json_config = JsonConfig::default().limit(1024 * 16);

    web::scope("/api")
        .app_data(json_config)
        .service(
            web::resource("/game_of_the_day")
                .route(web::get().to(game::game_of_the_day))
                .wrap(rate_limit),
        )
        .route("/games", web::get().to(game::games))
        .service(rating::rating_scope())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// The liveness probe.
pub(crate) async fn health() -> ApiResponse<impl Responder> {
    json(HealthResponse { status: "ok" })
}

#[derive(Serialize)]
struct InfoResponse {
    service_name: &'static str,
    api_version: &'static str,
}

pub(crate) async fn info() -> ApiResponse<impl Responder> {
    let api_version = env!("CARGO_PKG_VERSION");

    json(InfoResponse {
        service_name: "C64 Game of the Day API",
        api_version,
    })
}
