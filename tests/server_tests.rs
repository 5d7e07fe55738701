//! # Server Tests
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot`.
//!
//! ## Test Coverage
//!
//! - **Canvas API** (`/api/business/canvas`): the six operations and the
//!   404 envelope for unknown ids.
//! - **Editor API** (`/api/editor`): prompt submission, block commits,
//!   suggestion previews and the export download.
//! - **Frontend**: index page with the injected board metadata, assets.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use bizcanvas::server::{AppState, ServerConfig, router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn app() -> Router {
    router(Arc::new(AppState::new(ServerConfig::default())))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, _, bytes) = call_raw(app, method, uri, body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, json)
}

async fn call_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

async fn generate(app: &Router, prompt: &str, name: Option<&str>) -> Value {
    let mut body = json!({ "prompt": prompt });
    if let Some(name) = name {
        body["name"] = json!(name);
    }
    let (status, json) = call(app, Method::POST, "/api/business/canvas/generate", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], json!(true));
    json["responseObject"].clone()
}

// ============================================================================
// CANVAS API
// ============================================================================

#[tokio::test]
async fn test_generate_returns_complete_canvas() {
    let app = app();
    let canvas = generate(&app, "20-30대를 위한 구독형 모바일 앱", Some("Nutrition")).await;

    assert_eq!(canvas["name"], json!("Nutrition"));
    assert!(canvas["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(canvas["created_at"].is_string());
    assert_eq!(canvas["customer_segments"]["content"], json!(["20-30대 타겟 고객"]));
    assert_eq!(canvas["revenue_streams"]["content"], json!(["월 구독료", "프리미엄 기능 요금"]));
    assert_eq!(canvas["channels"]["content"], json!(["모바일 앱 스토어", "앱 내 마케팅"]));
    assert_eq!(canvas["key_partners"]["content"], json!(["마케팅 파트너"]));
    assert_eq!(canvas["value_propositions"]["content"], json!(["고객 가치 제안 정의 필요"]));
    assert_eq!(canvas["key_partners"]["id"], json!("key-partners"));
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let app = app();
    let first = generate(&app, "app", Some("first")).await;
    let second = generate(&app, "web", Some("second")).await;

    let (status, json) = call(&app, Method::GET, "/api/business/canvas", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&Value> = json["responseObject"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| &c["id"])
        .collect();
    assert_eq!(ids, vec![&first["id"], &second["id"]]);
}

#[tokio::test]
async fn test_get_update_delete_cycle() {
    let app = app();
    let canvas = generate(&app, "app", None).await;
    let uri = format!("/api/business/canvas/{}", canvas["id"].as_str().unwrap());

    let (status, json) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["responseObject"]["id"], canvas["id"]);

    let patch = json!({
        "name": "renamed",
        "channels": {
            "id": "channels",
            "title": "ignored",
            "content": ["직접 영업"],
            "placeholder": ""
        }
    });
    let (status, json) = call(&app, Method::PUT, &uri, Some(patch)).await;
    assert_eq!(status, StatusCode::OK);
    let updated = &json["responseObject"];
    assert_eq!(updated["name"], json!("renamed"));
    assert_eq!(updated["channels"]["content"], json!(["직접 영업"]));
    assert_eq!(updated["key_activities"], canvas["key_activities"]);
    assert_eq!(updated["created_at"], canvas["created_at"]);

    let (status, json) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], json!(true));
    assert_eq!(json["responseObject"], Value::Null);

    let (status, _) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_gets_new_id_and_copy_name() {
    let app = app();
    let canvas = generate(&app, "광고 app", Some("Ads")).await;
    let uri = format!("/api/business/canvas/{}/duplicate", canvas["id"].as_str().unwrap());

    let (status, json) = call(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let copy = &json["responseObject"];
    assert_ne!(copy["id"], canvas["id"]);
    assert_eq!(copy["name"], json!("Ads (Copy)"));
    assert_eq!(copy["revenue_streams"], canvas["revenue_streams"]);

    let (_, json) = call(&app, Method::GET, "/api/business/canvas", None).await;
    assert_eq!(json["responseObject"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_id_returns_not_found_envelope() {
    let app = app();
    let expected = json!({
        "success": false,
        "message": "Canvas not found",
        "responseObject": null,
        "statusCode": 404
    });

    for (method, uri, body) in [
        (Method::GET, "/api/business/canvas/missing", None),
        (Method::PUT, "/api/business/canvas/missing", Some(json!({ "name": "x" }))),
        (Method::DELETE, "/api/business/canvas/missing", None),
        (Method::POST, "/api/business/canvas/missing/duplicate", None),
    ] {
        let (status, json) = call(&app, method.clone(), uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(json, expected, "{method} {uri}");
    }
}

// ============================================================================
// EDITOR API
// ============================================================================

#[tokio::test]
async fn test_editor_starts_with_initial_canvas() {
    let app = app();
    let (status, json) = call(&app, Method::GET, "/api/editor/state", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["history"], json!([]));
    assert_eq!(json["canvas"]["keyPartners"]["content"], json!([]));
    assert_eq!(json["canvas"]["keyPartners"]["title"], json!("핵심 파트너"));
    assert_eq!(json["softLimit"], json!(500));
    assert_eq!(json["layout"].as_array().unwrap().len(), 9);
    assert_eq!(json["layout"][0]["slot"], json!("keyPartners"));
}

#[tokio::test]
async fn test_editor_prompt_merges_and_records_history() {
    let app = app();
    let (status, json) = call(
        &app,
        Method::POST,
        "/api/editor/prompt",
        Some(json!({ "prompt": "구독형 모바일 앱" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["history"], json!(["구독형 모바일 앱"]));
    assert_eq!(
        json["canvas"]["revenueStreams"]["content"],
        json!(["월 구독료", "프리미엄 기능 요금"])
    );
    // No age range, untouched
    assert_eq!(json["canvas"]["customerSegments"]["content"], json!([]));

    // Blank prompts change nothing
    let (_, again) = call(&app, Method::POST, "/api/editor/prompt", Some(json!({ "prompt": "   " }))).await;
    assert_eq!(again, json);
}

#[tokio::test]
async fn test_editor_suggest_does_not_apply() {
    let app = app();
    let (status, json) = call(
        &app,
        Method::POST,
        "/api/editor/suggest",
        Some(json!({ "prompt": "광고 플랫폼" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["revenueStreams"]["content"], json!(["광고 수익"]));

    let (_, state) = call(&app, Method::GET, "/api/editor/state", None).await;
    assert_eq!(state["canvas"]["revenueStreams"]["content"], json!([]));
}

#[tokio::test]
async fn test_editor_block_commit_normalizes_lines() {
    let app = app();
    let (status, json) = call(
        &app,
        Method::PUT,
        "/api/editor/blocks/channels",
        Some(json!({ "text": "  웹사이트 \n\n직접 영업\n" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["canvas"]["channels"]["content"], json!(["웹사이트", "직접 영업"]));

    // Kebab ids address the same slot
    let (status, json) = call(
        &app,
        Method::PUT,
        "/api/editor/blocks/key-partners",
        Some(json!({ "text": "결제 대행사" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["canvas"]["keyPartners"]["content"], json!(["결제 대행사"]));
}

#[tokio::test]
async fn test_editor_unknown_slot_is_bad_request() {
    let app = app();
    let (status, _) = call(
        &app,
        Method::PUT,
        "/api/editor/blocks/marketing",
        Some(json!({ "text": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_editor_export_is_dated_attachment() {
    let app = app();
    call(&app, Method::POST, "/api/editor/prompt", Some(json!({ "prompt": "광고 앱" }))).await;

    let (status, headers, bytes) = call_raw(&app, Method::GET, "/api/editor/export", None).await;
    assert_eq!(status, StatusCode::OK);

    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"business-canvas-"), "{disposition}");
    assert!(disposition.ends_with(".json\""), "{disposition}");

    let exported: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(exported["revenueStreams"]["content"], json!(["광고 수익"]));
    // Pretty-printed with two-space indentation
    assert!(String::from_utf8_lossy(&bytes).starts_with("{\n  \""));
}

// ============================================================================
// FRONTEND
// ============================================================================

#[tokio::test]
async fn test_index_injects_board_metadata() {
    let app = app();
    let (status, _, bytes) = call_raw(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("window.__BOARD="));
    assert!(html.contains("\"softLimit\":500"));
    assert!(html.contains("/assets/app.js?v="));
}

#[tokio::test]
async fn test_assets_are_served_with_mime_type() {
    let app = app();
    let (status, headers, _) = call_raw(&app, Method::GET, "/assets/app.css", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/css");

    let (status, _, _) = call_raw(&app, Method::GET, "/assets/missing.js", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_info_endpoint() {
    let app = app();
    let (status, json) = call(&app, Method::GET, "/api", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], json!("Business Canvas API"));
}
