use entity::games;
use sea_orm::{
    ActiveValue::Set, ColumnTrait as _, EntityTrait, PaginatorTrait as _, QueryFilter as _,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The catalog is seeded once. A database restored from a backup may
        // already hold games without this migration being recorded.
        let count = games::Entity::find()
            .count(manager.get_connection())
            .await?;
        if count > 0 {
            return Ok(());
        }

        games::Entity::insert_many([
            games::ActiveModel {
                id: Set("runngun".to_owned()),
                name: Set("Run N Gun".to_owned()),
                d64_path: Set("/games/runngun.d64".to_owned()),
                thumbnail_path: Set("/games/thumbnails/RunNGun.png".to_owned()),
                description: Set("A fast-paced run and gun game for the C64.".to_owned()),
                year: Set(2019),
                publisher: Set("Shallan".to_owned()),
                genre: Set("Run n Gun".to_owned()),
                players: Set("1".to_owned()),
            },
            games::ActiveModel {
                id: Set("showdown".to_owned()),
                name: Set("Showdown".to_owned()),
                d64_path: Set("/games/showdown.d64".to_owned()),
                thumbnail_path: Set("/games/thumbnails/Showdown.png".to_owned()),
                description: Set(
                    "You play a cowboy out to win a fierce gun duel. The first one to outwit \
                     and knock down the opponent 5 times is the winner of the duel."
                        .to_owned(),
                ),
                year: Set(2020),
                publisher: Set("Badgerpunch Games".to_owned()),
                genre: Set("Action".to_owned()),
                players: Set("1-2".to_owned()),
            },
        ])
        // The id is a plain string, so there is no last-insert id to return.
        .exec_without_returning(manager.get_connection())
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        games::Entity::delete_many()
            .filter(games::Column::Id.is_in(["runngun", "showdown"]))
            .exec(manager.get_connection())
            .await?;

        Ok(())
    }
}
