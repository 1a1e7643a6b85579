use sea_orm::entity::prelude::*;

/// A C64 game in the catalog.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "games")]
pub struct Model {
    /// The game identifier, a short slug like `runngun`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// The display name of the game.
    pub name: String,
    /// The path to the disk image served to the emulator.
    pub d64_path: String,
    /// The path to the thumbnail shown in the catalog.
    pub thumbnail_path: String,
    /// A short description of the game.
    pub description: String,
    /// The release year.
    pub year: i32,
    /// The publisher of the game.
    pub publisher: String,
    /// The genre of the game.
    pub genre: String,
    /// The player count descriptor, like `1` or `1-2`.
    pub players: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
