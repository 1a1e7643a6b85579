//! The C64 Game of the Day API program.
//!
//! The program also includes a [library](gotd_api_lib). Overall, it uses the
//! [`catalog_lib`] crate as a main dependency.

use actix_web::{App, HttpServer};
use anyhow::Context;
use catalog_lib::Database;
use gotd_api_lib::{CustomRootSpanBuilder, configure, cors_layer};
use migration::MigratorTrait;
use mkenv::prelude::*;
use rate_limiter::RateLimit;
use tracing::level_filters::LevelFilter;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// The main entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("retrieving .env files"),
        _ => (),
    }
    let env = gotd_api_lib::init_env()?;

    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let db = Database::from_db_url(&env.db_env.db_url.db_url.get()).await?;

    migration::Migrator::up(&db.sql_conn, None).await?;

    tracing::info!(
        "Serving the catalog on port {}",
        gotd_api_lib::env().port.get()
    );

    let rate_limit = RateLimit::new(
        gotd_api_lib::env().rate_limit.get(),
        gotd_api_lib::env().rate_limit_period.get(),
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors_layer(&gotd_api_lib::env().allowed_origin.get()))
            .wrap(TracingLogger::<CustomRootSpanBuilder>::new())
            .configure(|cfg| configure(cfg, db.clone(), rate_limit.clone()))
    })
    .bind(("0.0.0.0", gotd_api_lib::env().port.get()))
    .context("Cannot bind 0.0.0.0 address")?
    .run()
    .await
    .context("Cannot create actix-web server")?;

    Ok(())
}
