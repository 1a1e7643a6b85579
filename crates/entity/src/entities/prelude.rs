pub use super::games::Entity as Games;
pub use super::ratings::Entity as Ratings;
