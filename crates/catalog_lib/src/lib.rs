//! The main crate of the C64 Game of the Day backend.
//!
//! This crate contains environment setup functions, the database handle, and
//! the catalog and rating operations the server exposes over HTTP.
//!
//! If you wish to see the crate of the server program itself, take a look
//! at the `gotd-api` package.

#![warn(missing_docs)]

mod env;

pub mod error;
pub mod game;
pub mod rating;

pub use env::*;
use sea_orm::DbConn;

/// Represents a connection to the API database.
#[derive(Clone)]
pub struct Database {
    /// The connection to the SQLite database.
    pub sql_conn: DbConn,
}

impl Database {
    /// Connects to the database at the provided URL.
    pub async fn from_db_url(db_url: &str) -> Result<Self, sea_orm::DbErr> {
        let sql_conn = sea_orm::Database::connect(db_url).await?;
        Ok(Self { sql_conn })
    }
}
