//! Stub HTTP của dịch vụ text analytics, ghi lại mọi lời gọi nhận được.

#![allow(dead_code)]

use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;

pub const BASE_PATH: &str = "/text/analytics/v2.0";
pub const TEST_KEY: &str = "test-subscription-key";

/// Phản hồi mà stub trả cho một endpoint
#[derive(Debug, Clone)]
pub enum StubReply {
    Json(Value),
    Raw(&'static str),
    Status(u16, &'static str),
    Delayed(Duration, Value),
}

/// Một lời gọi stub đã nhận
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub subscription_key: Option<String>,
    pub body: String,
}

impl RecordedCall {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body phải là JSON")
    }
}

struct StubState {
    languages: StubReply,
    sentiment: StubReply,
    calls: Mutex<Vec<RecordedCall>>,
}

pub struct StubUpstream {
    pub addr: SocketAddr,
    state: Arc<StubState>,
}

impl StubUpstream {
    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, BASE_PATH)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.path == path)
            .collect()
    }
}

fn record(state: &StubState, path: &str, headers: &HeaderMap, body: String) {
    let subscription_key = headers
        .get("Ocp-Apim-Subscription-Key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.calls.lock().unwrap().push(RecordedCall {
        path: path.to_string(),
        subscription_key,
        body,
    });
}

async fn reply(reply: StubReply) -> Response {
    match reply {
        StubReply::Json(value) => Json(value).into_response(),
        StubReply::Raw(body) => (StatusCode::OK, body).into_response(),
        StubReply::Status(code, body) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, body).into_response()
        }
        StubReply::Delayed(delay, value) => {
            tokio::time::sleep(delay).await;
            Json(value).into_response()
        }
    }
}

async fn languages(State(state): State<Arc<StubState>>, headers: HeaderMap, body: String) -> Response {
    record(&state, "languages", &headers, body);
    reply(state.languages.clone()).await
}

async fn sentiment(State(state): State<Arc<StubState>>, headers: HeaderMap, body: String) -> Response {
    record(&state, "sentiment", &headers, body);
    reply(state.sentiment.clone()).await
}

/// Khởi động stub trên một cổng ngẫu nhiên của 127.0.0.1
pub fn spawn_stub(languages_reply: StubReply, sentiment_reply: StubReply) -> StubUpstream {
    let state = Arc::new(StubState {
        languages: languages_reply,
        sentiment: sentiment_reply,
        calls: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route(&format!("{}/languages", BASE_PATH), post(languages))
        .route(&format!("{}/sentiment", BASE_PATH), post(sentiment))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
    let addr = listener.local_addr().expect("địa chỉ stub");
    let server = axum::Server::from_tcp(listener)
        .expect("stub server")
        .serve(app.into_make_service());
    tokio::spawn(server);

    StubUpstream { addr, state }
}

pub fn english_detected() -> StubReply {
    StubReply::Json(serde_json::json!({
        "documents": [{
            "id": "1",
            "detectedLanguages": [{"name": "English", "iso6391Name": "en", "score": 1.0}]
        }],
        "errors": []
    }))
}

pub fn scored(score: f64) -> StubReply {
    StubReply::Json(serde_json::json!({
        "documents": [{"id": "1", "score": score}],
        "errors": []
    }))
}
