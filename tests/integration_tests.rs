//! End-to-end tests against a local mock of the Web UI API.

use axum::extract::RawQuery;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use sdwebui_rs::{
    BodyValue, Client, ClientConfig, InterrogateOptions, Query, RequestOptions, SdOptions,
    SdWebUiClient, SdWebUiError, SdWebUiOptions, Txt2ImgOptions,
};

/// Serves `app` on a random local port and returns the base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn engine(base_url: &str) -> Client {
    Client::new(ClientConfig::new(base_url).unwrap())
}

fn api(base_url: &str) -> SdWebUiClient {
    SdWebUiClient::new(SdWebUiOptions::new().with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn test_get_parses_typed_response() {
    let app = Router::new().route(
        "/sdapi/v1/samplers",
        get(|| async {
            Json(json!([
                {"name": "Euler a", "aliases": ["k_euler_a"], "options": {}},
                {"name": "DPM++ 2M", "aliases": [], "options": {"scheduler": "karras"}}
            ]))
        }),
    );
    let api = api(&serve(app).await);

    let samplers = api.samplers().await.unwrap();
    assert_eq!(samplers.len(), 2);
    assert_eq!(samplers[0].name, "Euler a");
    assert_eq!(samplers[0].aliases, vec!["k_euler_a".to_string()]);
    assert_eq!(samplers[1].options["scheduler"], "karras");
}

#[tokio::test]
async fn test_plain_text_body_deserializes_into_string() {
    let app = Router::new().route("/ping", get(|| async { "pong" }));
    let client = engine(&serve(app).await);

    let body: String = client.get("/ping", None, None).await.unwrap();
    assert_eq!(body, "pong");
}

#[tokio::test]
async fn test_error_status_carries_parsed_json_body() {
    let app = Router::new().route(
        "/sdapi/v1/sd-models",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({"detail": "Not Found"}))) }),
    );
    let api = api(&serve(app).await);

    let err = api.sd_models().await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status code 404");
    assert_eq!(err.status(), Some(404));
    match err {
        SdWebUiError::Status { status, data } => {
            assert_eq!(status, 404);
            assert_eq!(data.into_value(), json!({"detail": "Not Found"}));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_keeps_unparseable_body_as_text() {
    let app = Router::new().route(
        "/sdapi/v1/memory",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "CUDA out of memory") }),
    );
    let api = api(&serve(app).await);

    let err = api.memory().await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status code 500");
    assert_eq!(
        err.data(),
        Some(&BodyValue::Text("CUDA out of memory".into()))
    );
}

#[tokio::test]
async fn test_redirects_surface_as_status_errors() {
    let app = Router::new().route(
        "/sdapi/v1/skip",
        post(|| async { (StatusCode::FOUND, [(header::LOCATION, "/login")], "moved") }),
    );
    let api = api(&serve(app).await);

    let err = api.skip().await.unwrap_err();
    assert_eq!(err.status(), Some(302));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = engine(&format!("http://{addr}"));

    let err = client
        .get::<Value>("/sdapi/v1/progress", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, SdWebUiError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_post_sends_only_set_fields() {
    let app = Router::new().route(
        "/sdapi/v1/txt2img",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "images": ["aGVsbG8="],
                "parameters": body,
                "info": "{\"seed\": 42}"
            }))
        }),
    );
    let api = api(&serve(app).await);

    let options = Txt2ImgOptions {
        prompt: Some("a red fox".into()),
        steps: Some(20),
        ..Default::default()
    };
    let response = api.txt2img(&options).await.unwrap();
    assert_eq!(response.images, vec!["aGVsbG8=".to_string()]);
    // The echoed body parses back into exactly the fields that were set.
    assert_eq!(response.parameters, options);
}

#[tokio::test]
async fn test_post_serializes_exact_json_body() {
    let app = Router::new().route(
        "/echo-raw",
        post(|body: String| async move { Json(json!({"raw": body})) }),
    );
    let client = engine(&serve(app).await);

    let seen: Value = client
        .post("/echo-raw", Some(&json!({"a": 1})), None)
        .await
        .unwrap();
    assert_eq!(seen["raw"], r#"{"a":1}"#);
}

#[tokio::test]
async fn test_request_wire_format_and_header_layers() {
    let app = Router::new().route(
        "/sdapi/v1/interrupt",
        post(|headers: HeaderMap, body: String| async move {
            Json(json!({
                "content_type": headers.get("content-type").and_then(|v| v.to_str().ok()),
                "x_api_key": headers.get("x-api-key").and_then(|v| v.to_str().ok()),
                "x_request_id": headers.get("x-request-id").and_then(|v| v.to_str().ok()),
                "body_len": body.len(),
            }))
        }),
    );
    let base_url = serve(app).await;
    let config = ClientConfig::new(&base_url)
        .unwrap()
        .with_header("X-Api-Key", "abc");
    let client = Client::new(config);

    let call_options = RequestOptions::new().with_header("X-Request-Id", "42");
    let seen: Value = client
        .post("/sdapi/v1/interrupt", None::<&Value>, Some(&call_options))
        .await
        .unwrap();
    assert_eq!(seen["content_type"], "application/json");
    assert_eq!(seen["x_api_key"], "abc");
    assert_eq!(seen["x_request_id"], "42");
    assert_eq!(seen["body_len"], 0);
}

#[tokio::test]
async fn test_per_call_headers_override_configured_ones() {
    let app = Router::new().route(
        "/echo",
        post(|headers: HeaderMap, _body: String| async move {
            Json(json!({
                "x_api_key": headers.get("x-api-key").and_then(|v| v.to_str().ok()),
            }))
        }),
    );
    let base_url = serve(app).await;
    let config = ClientConfig::new(&base_url)
        .unwrap()
        .with_header("X-Api-Key", "configured");
    let client = Client::new(config);

    let call_options = RequestOptions::new().with_header("x-api-key", "per-call");
    let seen: Value = client
        .post("/echo", None::<&Value>, Some(&call_options))
        .await
        .unwrap();
    assert_eq!(seen["x_api_key"], "per-call");
}

#[tokio::test]
async fn test_basic_auth_header_is_transmitted() {
    let app = Router::new().route(
        "/sdapi/v1/progress",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({
                "progress": 0.0,
                "eta_relative": 0.0,
                "state": {"auth": auth},
                "current_image": null,
                "textinfo": null
            }))
        }),
    );
    let base_url = serve(app).await;
    let api = SdWebUiClient::new(
        SdWebUiOptions::new()
            .with_base_url(&base_url)
            .with_username("user")
            .with_password("pass"),
    )
    .unwrap();

    let progress = api.progress().await.unwrap();
    assert_eq!(progress.state["auth"], "Basic dXNlcjpwYXNz");
}

#[tokio::test]
async fn test_query_pairs_keep_insertion_order() {
    let app = Router::new().route(
        "/echo-query",
        get(|RawQuery(query): RawQuery| async move { Json(json!({"query": query})) }),
    );
    let client = engine(&serve(app).await);

    let params = Query::from(vec![
        ("b".to_string(), "2".to_string()),
        ("a".to_string(), "1".to_string()),
    ]);
    let seen: Value = client.get("/echo-query", Some(params), None).await.unwrap();
    assert_eq!(seen["query"], "b=2&a=1");

    let seen: Value = client
        .get("/echo-query", Some(Query::from("raw=as%20is")), None)
        .await
        .unwrap();
    assert_eq!(seen["query"], "raw=as%20is");
}

#[tokio::test]
async fn test_options_reads_on_get_and_writes_on_post() {
    let app = Router::new().route(
        "/sdapi/v1/options",
        get(|| async {
            Json(json!({
                "sd_model_checkpoint": "v1-5-pruned.ckpt",
                "CLIP_stop_at_last_layers": 2.0
            }))
        })
        .post(|Json(body): Json<Value>| async move { Json(body) }),
    );
    let api = api(&serve(app).await);

    let current = api.options(None).await.unwrap();
    assert_eq!(current["sd_model_checkpoint"], "v1-5-pruned.ckpt");

    let typed = api.get_options().await.unwrap();
    assert_eq!(typed.clip_stop_at_last_layers, Some(2.0));

    let write = SdOptions {
        sd_model_checkpoint: Some("v2-1.safetensors".into()),
        ..Default::default()
    };
    let echoed = api.options(Some(&write)).await.unwrap();
    assert_eq!(echoed, json!({"sd_model_checkpoint": "v2-1.safetensors"}));
}

#[tokio::test]
async fn test_png_info_without_image_posts_empty_object() {
    let app = Router::new().route(
        "/sdapi/v1/png-info",
        post(|body: String| async move {
            Json(json!({"info": body, "items": {}, "parameters": {}}))
        }),
    );
    let api = api(&serve(app).await);

    let response = api.png_info(None).await.unwrap();
    assert_eq!(response.info, "{}");

    let response = api.png_info(Some("aGVsbG8=")).await.unwrap();
    assert_eq!(response.info, "{\"image\":\"aGVsbG8=\"}");
}

#[tokio::test]
async fn test_interrogate_returns_caption() {
    let app = Router::new().route(
        "/sdapi/v1/interrogate",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["model"], "clip");
            Json(json!({"caption": "a red fox in the snow"}))
        }),
    );
    let api = api(&serve(app).await);

    let response = api
        .interrogate(&InterrogateOptions {
            image: "aGVsbG8=".into(),
            model: "clip".into(),
        })
        .await
        .unwrap();
    assert_eq!(response.caption, "a red fox in the snow");
}

#[tokio::test]
async fn test_null_responses_deserialize_as_value() {
    let app = Router::new()
        .route("/sdapi/v1/reload-checkpoint", post(|| async { Json(Value::Null) }))
        .route("/sdapi/v1/refresh-checkpoints", post(|| async { Json(Value::Null) }));
    let api = api(&serve(app).await);

    assert_eq!(api.reload_checkpoint().await.unwrap(), Value::Null);
    assert_eq!(api.refresh_checkpoints().await.unwrap(), Value::Null);
}
