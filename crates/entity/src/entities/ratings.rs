use sea_orm::entity::prelude::*;

/// The star rating a user gave to a game.
///
/// The `ratings` table carries no foreign key to `games`: a rating row may
/// reference any game identifier, and rows are never deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    /// The identifier of the rated game.
    #[sea_orm(primary_key, auto_increment = false)]
    pub game_id: String,
    /// The identifier of the user who rates.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// The value of the rating, between 0 and 5.
    pub rating: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
