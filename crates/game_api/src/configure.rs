use actix_cors::Cors;
use actix_web::{Responder, web};
use catalog_lib::Database;
use rate_limiter::RateLimit;
use tracing_actix_web::{DefaultRootSpanBuilder, RequestId, RootSpanBuilder};

use crate::{ApiErrorKind, ApiResponse, FitRequestId as _};

/// The actix route handler for the Not Found response.
async fn not_found(req_id: RequestId) -> ApiResponse<impl Responder> {
    Err::<String, _>(ApiErrorKind::EndpointNotFound).fit(req_id)
}

pub struct CustomRootSpanBuilder;

impl RootSpanBuilder for CustomRootSpanBuilder {
    fn on_request_start(request: &actix_web::dev::ServiceRequest) -> tracing::Span {
        let db = request.app_data::<Database>().unwrap();
        let pool = db.sql_conn.get_sqlite_connection_pool();

        tracing_actix_web::root_span!(
            request,
            pool_size = pool.size(),
            pool_num_idle = pool.num_idle(),
        )
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: tracing::Span,
        outcome: &Result<actix_web::dev::ServiceResponse<B>, actix_web::Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

/// The CORS layer of the API, allowing the frontend origin only.
pub fn cors_layer(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .supports_credentials()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["accept", "content-type"])
        .max_age(3600)
}

pub fn configure(cfg: &mut web::ServiceConfig, db: Database, rate_limit: RateLimit) {
    cfg.app_data(db.clone())
        .route("/health", web::get().to(crate::http::health))
        .route("/info", web::get().to(crate::http::info))
        .service(crate::api_route(rate_limit))
        .default_service(web::to(not_found));
}
