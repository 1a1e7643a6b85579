use std::{
    convert::Infallible,
    future::{Ready, ready},
};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use catalog_lib::Database;
use sea_orm::DbConn;
use serde::Serialize;

/// Converts the provided body to a `200 OK` JSON responses.
pub fn json<T: Serialize, E>(obj: T) -> Result<HttpResponse, E> {
    Ok(HttpResponse::Ok().json(obj))
}

/// Extracts a connection to the database from the application data.
pub struct ExtractDbConn(pub DbConn);

impl FromRequest for ExtractDbConn {
    type Error = Infallible;

    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let db = req
            .app_data::<Database>()
            .expect("Database app data should be present");
        ready(Ok(Self(db.sql_conn.clone())))
    }
}
