use actix_web::{
    Responder, Scope,
    web::{self, Json, Path, Query},
};
use serde::{Deserialize, Serialize};
use tracing_actix_web::RequestId;

use crate::utils::{ExtractDbConn, json};
use crate::{ApiResponse, ApiResultExt as _, FitRequestId as _};

pub fn rating_scope() -> Scope {
    web::scope("/games/{game_id}")
        .route("/rating", web::get().to(rating))
        .route("/rating", web::post().to(rate))
        .route("/average_rating", web::get().to(average_rating))
}

#[derive(Deserialize)]
struct RatingQuery {
    user_id: String,
}

#[derive(Serialize)]
struct UserRatingResponse {
    game_id: String,
    rating: i32,
    user_id: String,
}

async fn rating(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    game_id: Path<String>,
    Query(query): Query<RatingQuery>,
) -> ApiResponse<impl Responder> {
    let game_id = game_id.into_inner();

    let rating = catalog_lib::rating::get_rating(&conn, &game_id, &query.user_id)
        .await
        .with_api_err()
        .fit(req_id)?;

    json(UserRatingResponse {
        game_id,
        rating,
        user_id: query.user_id,
    })
}

#[derive(Deserialize)]
struct RateBody {
    game_id: String,
    rating: i32,
    user_id: String,
}

async fn rate(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    Json(body): Json<RateBody>,
) -> ApiResponse<impl Responder> {
    // Clients send the game id both in the path and in the payload; the
    // payload is authoritative.
    catalog_lib::rating::set_rating(&conn, &body.game_id, &body.user_id, body.rating)
        .await
        .with_api_err()
        .fit(req_id)?;

    json(UserRatingResponse {
        game_id: body.game_id,
        rating: body.rating,
        user_id: body.user_id,
    })
}

#[derive(Serialize)]
struct AverageRatingResponse {
    game_id: String,
    rating: i32,
}

async fn average_rating(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    game_id: Path<String>,
) -> ApiResponse<impl Responder> {
    let game_id = game_id.into_inner();

    let avg = catalog_lib::rating::get_average_rating(&conn, &game_id)
        .await
        .with_api_err()
        .fit(req_id)?;

    json(AverageRatingResponse {
        game_id,
        rating: avg.round() as i32,
    })
}
