use actix_web::{App, http::StatusCode, test};
use chrono::{Datelike as _, Utc};
use entity::ratings;
use sea_orm::{EntityTrait as _, PaginatorTrait as _};
use serde_json::{Value, json};
use tracing_actix_web::TracingLogger;

use super::{ErrorResponse, default_rate_limit, get_app, get_db, get_empty_db};
use crate::configure;

const GAME_FIELDS: [&str; 9] = [
    "id",
    "name",
    "d64Path",
    "thumbnailPath",
    "description",
    "year",
    "publisher",
    "genre",
    "players",
];

#[tokio::test]
async fn game_of_the_day_success() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    let req = test::TestRequest::get()
        .uri("/api/game_of_the_day")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    for field in GAME_FIELDS {
        assert!(body.get(field).is_some(), "missing field {field}");
    }

    Ok(())
}

#[tokio::test]
async fn game_of_the_day_is_deterministic() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    // The seeded catalog holds two games, in id order.
    let idx = Utc::now().date_naive().num_days_from_ce() % 2;
    let expected = ["runngun", "showdown"][idx as usize];

    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/api/game_of_the_day")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], expected);
    }

    Ok(())
}

#[tokio::test]
async fn game_of_the_day_not_found_on_empty_catalog() -> anyhow::Result<()> {
    let db = get_empty_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    let req = test::TestRequest::get()
        .uri("/api/game_of_the_day")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(resp).await;
    let err: ErrorResponse = serde_json::from_slice(&body)?;
    assert_eq!(err.r#type, 302);
    assert_eq!(err.message, "No games found");

    Ok(())
}

#[tokio::test]
async fn games_are_listed_in_id_order() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    let req = test::TestRequest::get().uri("/api/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|game| game["id"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(ids, ["runngun", "showdown"]);

    Ok(())
}

#[tokio::test]
async fn rating_can_be_set_and_read_back() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    let req = test::TestRequest::get()
        .uri("/api/games/runngun/rating?user_id=alice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rating"], 0);

    let req = test::TestRequest::post()
        .uri("/api/games/runngun/rating")
        .set_json(json!({"game_id": "runngun", "rating": 4, "user_id": "alice"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["game_id"], "runngun");
    assert_eq!(body["rating"], 4);
    assert_eq!(body["user_id"], "alice");

    let req = test::TestRequest::get()
        .uri("/api/games/runngun/rating?user_id=alice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rating"], 4);

    // Another user still has no rating.
    let req = test::TestRequest::get()
        .uri("/api/games/runngun/rating?user_id=bob")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rating"], 0);

    Ok(())
}

#[tokio::test]
async fn invalid_ratings_are_rejected() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    for body in [
        json!({"game_id": "runngun", "rating": 6, "user_id": "alice"}),
        json!({"game_id": "runngun", "rating": -1, "user_id": "alice"}),
        json!({"game_id": "runngun", "rating": 3, "user_id": ""}),
        json!({"game_id": "runngun", "rating": 3, "user_id": "unknown"}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/games/runngun/rating")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    // None of the rejected requests changed the stored state.
    let req = test::TestRequest::get()
        .uri("/api/games/runngun/rating?user_id=alice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rating"], 0);

    Ok(())
}

#[tokio::test]
async fn average_rating_is_a_rounded_mean() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    for (user_id, rating) in [("alice", 2), ("bob", 4), ("charlie", 3)] {
        let req = test::TestRequest::post()
            .uri("/api/games/showdown/rating")
            .set_json(json!({"game_id": "showdown", "rating": rating, "user_id": user_id}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/games/showdown/average_rating")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["game_id"], "showdown");
    assert_eq!(body["rating"], 3);

    // Overwriting a rating moves the average.
    let req = test::TestRequest::post()
        .uri("/api/games/showdown/rating")
        .set_json(json!({"game_id": "showdown", "rating": 5, "user_id": "alice"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/games/showdown/average_rating")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rating"], 4);

    Ok(())
}

#[tokio::test]
async fn unrated_game_has_average_zero() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    let req = test::TestRequest::get()
        .uri("/api/games/runngun/average_rating")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rating"], 0);

    Ok(())
}

#[tokio::test]
async fn upserting_twice_keeps_a_single_row() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db.clone(), default_rate_limit()).await;

    for rating in [3, 5] {
        let req = test::TestRequest::post()
            .uri("/api/games/runngun/rating")
            .set_json(json!({"game_id": "runngun", "rating": rating, "user_id": "alice"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    assert_eq!(ratings::Entity::find().count(&db.sql_conn).await?, 1);

    let req = test::TestRequest::get()
        .uri("/api/games/runngun/rating?user_id=alice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rating"], 5);

    Ok(())
}

#[tokio::test]
async fn game_of_the_day_is_rate_limited() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    let peer_addr = "127.0.0.1:51234".parse()?;

    for _ in 0..10 {
        let req = test::TestRequest::get()
            .uri("/api/game_of_the_day")
            .peer_addr(peer_addr)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/game_of_the_day")
        .peer_addr(peer_addr)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec())?;
    assert!(text.to_lowercase().contains("rate limit"));

    // The other routes are not limited.
    let req = test::TestRequest::get()
        .uri("/api/games")
        .peer_addr(peer_addr)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn health_endpoint_answers_ok() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");

    Ok(())
}

#[tokio::test]
async fn unknown_routes_answer_not_found() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = get_app(db, default_rate_limit()).await;

    let req = test::TestRequest::get().uri("/api/does_not_exist").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(resp).await;
    let err: ErrorResponse = serde_json::from_slice(&body)?;
    assert_eq!(err.r#type, 301);

    Ok(())
}

#[tokio::test]
async fn cors_preflight_allows_the_frontend_origin() -> anyhow::Result<()> {
    let db = get_db().await?;
    let app = test::init_service(
        App::new()
            .wrap(crate::cors_layer("http://localhost:3000"))
            .wrap(TracingLogger::<configure::CustomRootSpanBuilder>::new())
            .configure(|cfg| configure::configure(cfg, db.clone(), default_rate_limit())),
    )
    .await;

    let req = test::TestRequest::with_uri("/api/game_of_the_day")
        .method(actix_web::http::Method::OPTIONS)
        .insert_header(("Origin", "http://localhost:3000"))
        .insert_header(("Access-Control-Request-Method", "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let allowed = resp
        .headers()
        .get("access-control-allow-origin")
        .and_then(|value| value.to_str().ok());
    assert_eq!(allowed, Some("http://localhost:3000"));

    Ok(())
}
