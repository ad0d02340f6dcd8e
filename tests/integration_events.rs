mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{create_event, get_request, login, register_partner, send, setup_test_app};

#[sqlx::test(migrations = "./migrations")]
async fn test_list_events_is_public(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = send(&app, get_request("/events", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_events_from_every_partner_in_id_order(pool: PgPool) {
    let app = setup_test_app(pool);
    let first = register_partner(&app, "First").await;
    let second = register_partner(&app, "Second").await;
    let first_token = login(&app, &first.email, &first.password).await;
    let second_token = login(&app, &second.email, &second.password).await;

    create_event(&app, &first_token, "One").await;
    create_event(&app, &second_token, "Two").await;
    create_event(&app, &first_token, "Three").await;

    let (status, body) = send(&app, get_request("/events", None)).await;

    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().unwrap();
    let names: Vec<&str> = events.iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["One", "Two", "Three"]);

    let ids: Vec<i64> = events.iter().map(|e| e["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_event_by_id_is_public(pool: PgPool) {
    let app = setup_test_app(pool);
    let partner = register_partner(&app, "Shows & Co").await;
    let token = login(&app, &partner.email, &partner.password).await;
    let event = create_event(&app, &token, "Open Air").await;
    let id = event["id"].as_i64().unwrap();

    let (status, body) = send(&app, get_request(&format!("/events/{}", id), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, event);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_missing_event(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = send(&app, get_request("/events/424242", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Event not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unparsable_event_id_is_not_found(pool: PgPool) {
    let app = setup_test_app(pool);

    for uri in ["/events/abc", "/events/99999999999999999999"] {
        let (status, body) = send(&app, get_request(uri, None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["message"], "Event not found");
    }
}
