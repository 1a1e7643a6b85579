//! A module containing the [`CatalogError`] enum, which contains various basic error types.

/// Represents any type of error that could happen when using this crate.
#[derive(thiserror::Error, Debug)]
#[rustfmt::skip]
pub enum CatalogError {
    // --------
    // --- Internal server errors
    // --------

    /// An error from the database.
    #[error(transparent)]
    DbError(#[from] sea_orm::DbErr),
    /// An internal error.
    #[error("internal error: {0}")]
    Internal(String),

    // --------
    // --- Logical errors
    // --------

    /// The catalog contains no game.
    #[error("No games found")]
    NoGamesFound,
    /// The provided rating value is out of the accepted range.
    #[error("rating must be between 0 and 5, got `{0}`")]
    InvalidRating(i32),
    /// The provided user identifier is empty or the placeholder value.
    #[error("user_id must be provided and not 'unknown'")]
    InvalidUser(String),
}

/// Shortcut for creating an internal error, by formatting a message.
///
/// See [`CatalogError::Internal`].
#[macro_export]
macro_rules! internal {
    ($($t:tt)*) => {{
        $crate::error::CatalogError::Internal($crate::error::__private::format!($($t)*))
    }};
}

#[doc(hidden)]
pub mod __private {
    pub use std::format;
}

/// Represents the result of a computation that could return a [`CatalogError`].
pub type CatalogResult<T = ()> = Result<T, CatalogError>;
