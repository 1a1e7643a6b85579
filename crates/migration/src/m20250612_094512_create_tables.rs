use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .col(
                        ColumnDef::new(Games::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(ColumnDef::new(Games::D64Path).string().not_null())
                    .col(ColumnDef::new(Games::ThumbnailPath).string().not_null())
                    .col(ColumnDef::new(Games::Description).string().not_null())
                    .col(ColumnDef::new(Games::Year).integer().not_null())
                    .col(ColumnDef::new(Games::Publisher).string().not_null())
                    .col(ColumnDef::new(Games::Genre).string().not_null())
                    .col(ColumnDef::new(Games::Players).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .col(ColumnDef::new(Ratings::GameId).string().not_null())
                    .col(ColumnDef::new(Ratings::UserId).string().not_null())
                    .col(
                        ColumnDef::new(Ratings::Rating)
                            .integer()
                            .not_null()
                            .check(Expr::col(Ratings::Rating).between(0, 5)),
                    )
                    .primary_key(Index::create().col(Ratings::GameId).col(Ratings::UserId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Name,
    D64Path,
    ThumbnailPath,
    Description,
    Year,
    Publisher,
    Genre,
    Players,
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    GameId,
    UserId,
    Rating,
}
