use std::time::Duration;

use catalog_lib::DbEnv;
use mkenv::{error::ConfigInitError, prelude::*};
use once_cell::sync::OnceCell;

mkenv::make_config! {
    pub struct ApiEnv {
        pub port: {
            var_name: "GOTD_API_PORT",
            layers: [
                parsed_from_str<u16>(),
                or_default_val(|| 3000),
            ],
            description: "The port used to expose the API",
            default_val_fmt: "3000",
        },

        pub allowed_origin: {
            var_name: "GOTD_API_ALLOWED_ORIGIN",
            layers: [
                or_default_val(|| "http://localhost:3000".to_owned()),
            ],
            description: "The origin allowed to query the API from a browser",
            default_val_fmt: "http://localhost:3000",
        },

        pub rate_limit: {
            var_name: "GOTD_API_RATE_LIMIT",
            layers: [
                parsed_from_str<u32>(),
                or_default_val(|| 10),
            ],
            description: "The maximum amount of requests to the game of the day endpoint, \
                per client and per window",
            default_val_fmt: "10",
        },

        pub rate_limit_period: {
            var_name: "GOTD_API_RATE_LIMIT_PERIOD",
            layers: [
                parsed<Duration>(|input| {
                    input.parse().map(Duration::from_secs).map_err(From::from)
                }),
                or_default_val(|| Duration::from_secs(60)),
            ],
            description: "The duration of the rate limit window, in seconds",
            default_val_fmt: "60",
        },
    }
}

static ENV: OnceCell<ApiEnv> = OnceCell::new();

pub fn env() -> &'static ApiEnv {
    ENV.get().unwrap()
}

/// The part of the environment that is only used once, at startup.
pub struct InitEnvOut {
    pub db_env: DbEnv,
}

pub fn init_env() -> anyhow::Result<InitEnvOut> {
    fn map_err(err: ConfigInitError<'_>) -> anyhow::Error {
        anyhow::anyhow!("{err}")
    }

    let env = ApiEnv::define();
    let db_env = DbEnv::define();
    env.try_init().map_err(map_err)?;
    db_env.try_init().map_err(map_err)?;
    let _ = ENV.set(env);

    Ok(InitEnvOut { db_env })
}
