mod common;

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};

use common::{offline_pool, send, setup_test_app_with_rate_limit};
use tickets_config::RateLimitConfig;

fn strict_rate_limit_config() -> RateLimitConfig {
    RateLimitConfig {
        enabled: true,
        per_second: 1,
        burst_size: 2,
        trust_forwarded_for: false,
    }
}

/// An empty-object login from `peer`: rejected by validation, so the
/// database is never touched.
fn login_from(peer: [u8; 4], forwarded_for: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(forwarded_for) = forwarded_for {
        builder = builder.header("x-forwarded-for", forwarded_for);
    }

    let mut request = builder.body(Body::from("{}")).unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from((peer, 40000))));
    request
}

#[tokio::test]
async fn test_login_throttled_after_burst() {
    let app = setup_test_app_with_rate_limit(offline_pool(), strict_rate_limit_config());

    let (status, _) = send(&app, login_from([192, 168, 1, 100], None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, login_from([192, 168, 1, 100], None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, login_from([192, 168, 1, 100], None)).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["message"].as_str().unwrap().contains("Too many login attempts"));
}

#[tokio::test]
async fn test_throttle_is_per_peer() {
    let app = setup_test_app_with_rate_limit(offline_pool(), strict_rate_limit_config());

    for _ in 0..3 {
        send(&app, login_from([10, 0, 0, 1], None)).await;
    }

    let (status, _) = send(&app, login_from([10, 0, 0, 2], None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rotating_forwarded_for_is_still_throttled() {
    let app = setup_test_app_with_rate_limit(offline_pool(), strict_rate_limit_config());

    let mut throttled = 0;
    for i in 0..20 {
        let spoofed = format!("203.0.113.{}", i);
        let (status, _) = send(&app, login_from([10, 0, 0, 9], Some(&spoofed))).await;
        if status == StatusCode::TOO_MANY_REQUESTS {
            throttled += 1;
        }
    }

    // Two pass on the burst; at most one more on a refill.
    assert!(throttled >= 17, "only {} of 20 throttled", throttled);
}

#[tokio::test]
async fn test_trusted_proxy_keys_on_forwarded_for() {
    let config = RateLimitConfig {
        trust_forwarded_for: true,
        ..strict_rate_limit_config()
    };
    let app = setup_test_app_with_rate_limit(offline_pool(), config);

    // Every request arrives from the proxy's address.
    for _ in 0..3 {
        send(&app, login_from([10, 0, 0, 254], Some("198.51.100.1"))).await;
    }

    let (status, _) = send(&app, login_from([10, 0, 0, 254], Some("198.51.100.1"))).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (status, _) = send(&app, login_from([10, 0, 0, 254], Some("198.51.100.2"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_disabled_throttle_never_limits() {
    let app = setup_test_app_with_rate_limit(offline_pool(), RateLimitConfig::disabled());

    for _ in 0..10 {
        let (status, _) = send(&app, login_from([10, 0, 0, 3], None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
