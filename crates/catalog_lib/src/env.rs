#[cfg(debug_assertions)]
mkenv::make_config! {
    /// The environment used to set up a connection to the SQLite database.
    pub struct DbUrlEnv {
        /// The database URL.
        pub db_url: {
            var_name: "DATABASE_URL",
            layers: [
                or_default_val(|| "sqlite://games.db?mode=rwc".to_owned()),
            ],
            description: "The URL to the SQLite database",
            default_val_fmt: "sqlite://games.db?mode=rwc",
        }
    }
}
#[cfg(not(debug_assertions))]
mkenv::make_config! {
    /// The environment used to set up a connection to the SQLite database.
    pub struct DbUrlEnv {
        /// The path to the file containing the database URL.
        pub db_url: {
            var_name: "DATABASE_URL",
            layers: [
                file_read(),
            ],
            description: "The path to the file containing the URL to the SQLite database",
        }
    }
}

mkenv::make_config! {
    /// The environment used to set up a connection to the database of the API.
    pub struct DbEnv {
        /// The environment for the SQLite database.
        pub db_url: { DbUrlEnv },
    }
}
