//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use shakedown_core::test_utils::{MockLighterpackServer, MOCK_LIST_ID};
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(None, ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
}

// ========== Shakedown API Tests ==========

#[tokio::test]
async fn test_shakedown_returns_report() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "gearList": [
            {"name": "REI Flash 55", "category": "Backpack", "weight_oz": 38},
            {"name": "Big Agnes Copper Spur tent", "category": "Big Three", "weight_oz": 48},
            {"name": "Sawyer Squeeze", "category": "Water", "weight_oz": 3, "price": 40}
        ]
    });
    let response = post_json(app, "/api/shakedown", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_body_json(response).await;
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["summary"]["totalItems"], 3);
    assert_eq!(data["summary"]["totalWeightOz"], 89);
    assert_eq!(data["items"][1]["category"], "Shelter");
    assert!(data["generatedAt"].is_string());

    let recs = &data["recommendations"];
    assert_eq!(recs["weightClass"], "Ultralight");
    let high = recs["highPriority"].as_array().unwrap();
    assert_eq!(high.len(), 2);
    assert_eq!(high[0]["currentItem"]["name"], "Big Agnes Copper Spur tent");
    assert_eq!(high[1]["currentItem"]["name"], "REI Flash 55");
    assert!(recs["mediumPriority"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_shakedown_validation_errors() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "gearList": [
            {"name": "Tent", "category": "Shelter"},
            {"name": "", "category": "Misc", "weight_oz": -1}
        ]
    });
    let response = post_json(app, "/api/shakedown", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Validation errors");
    assert_eq!(
        json["errors"],
        serde_json::json!([
            "Item 1: weight_oz is required",
            "Item 2: name is required",
            "Item 2: weight_oz cannot be negative"
        ])
    );
}

#[tokio::test]
async fn test_shakedown_empty_and_missing_lists() {
    let response = post_json(
        setup_test_app(),
        "/api/shakedown",
        serde_json::json!({"gearList": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["errors"][0], "Gear list cannot be empty");

    let response = post_json(setup_test_app(), "/api/shakedown", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Please provide a valid gear list array");
}

#[tokio::test]
async fn test_shakedown_rejects_oversized_lists() {
    let app = create_router(
        None,
        ServerConfig {
            max_items: 2,
            ..Default::default()
        },
    );

    let item = serde_json::json!({"name": "Spork", "category": "Cooking", "weight_oz": 0.5});
    let body = serde_json::json!({"gearList": [item.clone(), item.clone(), item]});
    let response = post_json(app, "/api/shakedown", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Gear list has 3 items; the limit is 2");
}

// ========== Price Estimate API Tests ==========

#[tokio::test]
async fn test_price_estimate_known_item() {
    let body = serde_json::json!({
        "name": "Zpacks Duplex Tent",
        "category": "Shelter",
        "weight_oz": 19.4
    });
    let response = post_json(setup_test_app(), "/api/price-estimate", body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["estimatedPrice"], 699.0);
    assert_eq!(data["category"], "Shelter");
    assert_eq!(data["basis"]["kind"], "known_item");
    assert!(data["note"].is_string());
}

#[tokio::test]
async fn test_price_estimate_normalizes_category() {
    let body = serde_json::json!({"name": "Mystery Quilt", "category": "Sleep stuff"});
    let response = post_json(setup_test_app(), "/api/price-estimate", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["data"]["category"], "Sleeping Bag");
    assert_eq!(json["data"]["basis"]["kind"], "heuristic");
}

#[tokio::test]
async fn test_price_estimate_requires_name_and_category() {
    let body = serde_json::json!({"name": "Tent"});
    let response = post_json(setup_test_app(), "/api/price-estimate", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Item name and category are required");
}

// ========== Starter List API Tests ==========

#[tokio::test]
async fn test_starter_list() {
    let body = serde_json::json!({
        "tripType": "weekend",
        "season": "summer",
        "terrain": "easy",
        "experience": "expert",
        "budget": "premium"
    });
    let response = post_json(setup_test_app(), "/api/recommendations", body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["profile"]["budget"], "premium");
    let gear = data["gearList"].as_array().unwrap();
    assert!(gear.iter().all(|item| item["category"] != "Cooking"));
    assert_eq!(data["summary"]["totalItems"], gear.len());
}

#[tokio::test]
async fn test_starter_list_missing_and_invalid_fields() {
    let body = serde_json::json!({"tripType": "weekend", "season": "summer"});
    let response = post_json(setup_test_app(), "/api/recommendations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({
        "tripType": "weekend",
        "season": "monsoon",
        "terrain": "easy",
        "experience": "expert",
        "budget": "premium"
    });
    let response = post_json(setup_test_app(), "/api/recommendations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Unknown season: monsoon");
}

// ========== Lighterpack Import API Tests ==========

#[tokio::test]
async fn test_lighterpack_import() {
    let mock = MockLighterpackServer::start().await;
    let app = create_router_with_options(
        None,
        ServerConfig::default(),
        LighterpackClient::with_base_url(&mock.url()),
    );

    let body = serde_json::json!({
        "url": format!("https://lighterpack.com/r/{}", MOCK_LIST_ID)
    });
    let response = post_json(app, "/api/lighterpack/import", body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["data"]["itemCount"], 4);
    assert_eq!(json["data"]["gearList"][0]["category"], "Shelter");
    assert_eq!(json["data"]["gearList"][1]["weight_oz"], 40.0);
}

#[tokio::test]
async fn test_lighterpack_import_errors() {
    let mock = MockLighterpackServer::start().await;
    let app = || {
        create_router_with_options(
            None,
            ServerConfig::default(),
            LighterpackClient::with_base_url(&mock.url()),
        )
    };

    let response = post_json(app(), "/api/lighterpack/import", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Lighterpack URL is required");

    let body = serde_json::json!({"url": "https://example.com/r/abc"});
    let response = post_json(app(), "/api/lighterpack/import", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Please provide a valid Lighterpack URL");

    let body = serde_json::json!({"url": "https://lighterpack.com/r/unknown"});
    let response = post_json(app(), "/api/lighterpack/import", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(
        json["error"],
        "Unable to fetch Lighterpack page. Please check the URL and try again."
    );

    let body = serde_json::json!({"url": "https://lighterpack.com/r/moved"});
    let response = post_json(app(), "/api/lighterpack/import", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Lighterpack answered 300"));
}
