//! Catalog access: the full game list and the game of the day.

use chrono::{Datelike as _, NaiveDate};
use entity::games;
use sea_orm::{
    ConnectionTrait, EntityTrait, PaginatorTrait as _, QueryOrder as _, QuerySelect as _,
};

use crate::error::{CatalogError, CatalogResult};
use crate::internal;

/// Returns the index of the game served on the provided date, for a catalog
/// of `count` games.
///
/// The index is the proleptic Gregorian day number of the date modulo the
/// catalog size, so it is stable within a calendar day and cycles through
/// the whole catalog as days pass.
pub fn day_index(date: NaiveDate, count: u64) -> u64 {
    (date.num_days_from_ce() as i64).rem_euclid(count as i64) as u64
}

/// Returns all the games of the catalog, ordered by identifier.
pub async fn get_all_games<C: ConnectionTrait>(conn: &C) -> CatalogResult<Vec<games::Model>> {
    games::Entity::find()
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
        .map_err(Into::into)
}

/// Returns the game served on the provided date.
///
/// The same game is returned for the whole calendar day. Fails with
/// [`CatalogError::NoGamesFound`] when the catalog is empty.
pub async fn game_of_the_day<C: ConnectionTrait>(
    conn: &C,
    date: NaiveDate,
) -> CatalogResult<games::Model> {
    let count = games::Entity::find().count(conn).await?;
    if count == 0 {
        return Err(CatalogError::NoGamesFound);
    }

    let idx = day_index(date, count);

    games::Entity::find()
        .order_by_asc(games::Column::Id)
        .offset(idx)
        .one(conn)
        .await?
        .ok_or_else(|| internal!("game at offset {idx} should exist in database"))
}
