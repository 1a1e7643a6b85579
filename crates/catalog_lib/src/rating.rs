//! Rating access: per-user star ratings and per-game averages.

use entity::ratings;
use sea_orm::{
    ActiveValue::Set, ColumnTrait as _, ConnectionTrait, EntityTrait, QueryFilter as _,
    QuerySelect as _,
    prelude::Expr,
    sea_query::{Func, OnConflict},
};

use crate::error::{CatalogError, CatalogResult};

/// The placeholder identifier sent by clients that haven't identified their
/// user yet. It is never accepted for a rating.
pub const UNKNOWN_USER: &str = "unknown";

/// Returns the rating the user gave to the game, or 0 if there is none.
pub async fn get_rating<C: ConnectionTrait>(
    conn: &C,
    game_id: &str,
    user_id: &str,
) -> CatalogResult<i32> {
    let rating = ratings::Entity::find()
        .filter(
            ratings::Column::GameId
                .eq(game_id)
                .and(ratings::Column::UserId.eq(user_id)),
        )
        .select_only()
        .column(ratings::Column::Rating)
        .into_tuple()
        .one(conn)
        .await?;

    Ok(rating.unwrap_or(0))
}

/// Upserts the rating of the user for the game.
///
/// The value must be between 0 and 5, and the user identifier must be
/// non-empty and not [`UNKNOWN_USER`]. An invalid input leaves the stored
/// state unchanged.
pub async fn set_rating<C: ConnectionTrait>(
    conn: &C,
    game_id: &str,
    user_id: &str,
    rating: i32,
) -> CatalogResult<()> {
    if !(0..=5).contains(&rating) {
        return Err(CatalogError::InvalidRating(rating));
    }
    if user_id.is_empty() || user_id == UNKNOWN_USER {
        return Err(CatalogError::InvalidUser(user_id.to_owned()));
    }

    ratings::Entity::insert(ratings::ActiveModel {
        game_id: Set(game_id.to_owned()),
        user_id: Set(user_id.to_owned()),
        rating: Set(rating),
    })
    .on_conflict(
        OnConflict::columns([ratings::Column::GameId, ratings::Column::UserId])
            .update_column(ratings::Column::Rating)
            .to_owned(),
    )
    .exec_without_returning(conn)
    .await?;

    Ok(())
}

/// Returns the average rating of the game over all users, or 0 when the game
/// has no rating yet.
pub async fn get_average_rating<C: ConnectionTrait>(
    conn: &C,
    game_id: &str,
) -> CatalogResult<f64> {
    let avg: Option<Option<f64>> = ratings::Entity::find()
        .filter(ratings::Column::GameId.eq(game_id))
        .select_only()
        .column_as(
            Expr::expr(Func::avg(Expr::col(ratings::Column::Rating))),
            "rating",
        )
        .into_tuple()
        .one(conn)
        .await?;

    Ok(avg.flatten().unwrap_or(0.0))
}
