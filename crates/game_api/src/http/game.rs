use actix_web::Responder;
use chrono::Utc;
use entity::games;
use serde::Serialize;
use tracing_actix_web::RequestId;

use crate::utils::{ExtractDbConn, json};
use crate::{ApiResponse, ApiResultExt as _, FitRequestId as _};

/// A game record, serialized with the field names the frontend expects.
#[derive(Serialize)]
pub(crate) struct GameInfoResponse {
    id: String,
    name: String,
    #[serde(rename = "d64Path")]
    d64_path: String,
    #[serde(rename = "thumbnailPath")]
    thumbnail_path: String,
    description: String,
    year: i32,
    publisher: String,
    genre: String,
    players: String,
}

impl From<games::Model> for GameInfoResponse {
    fn from(game: games::Model) -> Self {
        Self {
            id: game.id,
            name: game.name,
            d64_path: game.d64_path,
            thumbnail_path: game.thumbnail_path,
            description: game.description,
            year: game.year,
            publisher: game.publisher,
            genre: game.genre,
            players: game.players,
        }
    }
}

pub async fn game_of_the_day(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
) -> ApiResponse<impl Responder> {
    let today = Utc::now().date_naive();

    let game = catalog_lib::game::game_of_the_day(&conn, today)
        .await
        .with_api_err()
        .fit(req_id)?;

    json(GameInfoResponse::from(game))
}

pub async fn games(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
) -> ApiResponse<impl Responder> {
    let games = catalog_lib::game::get_all_games(&conn)
        .await
        .with_api_err()
        .fit(req_id)?;

    let games: Vec<_> = games.into_iter().map(GameInfoResponse::from).collect();

    json(games)
}
