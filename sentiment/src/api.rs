use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use sentiment_common::{Greeting, Sentiment};

use crate::analytics::{classify, TextAnalytics};
use crate::config::Config;
use crate::error_handling::ApiError;

/// Cấu trúc phản hồi API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: "Operation successful".to_string(),
            data: Some(data),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        }
    }
}

pub struct AppState {
    pub config: Config,
    pub analytics: Arc<dyn TextAnalytics>,
    /// Bộ đếm lời chào, thuộc về state chứ không phải biến toàn cục
    pub greeting_counter: AtomicU64,
    pub hostname: String,
}

impl AppState {
    pub fn new(config: Config, analytics: Arc<dyn TextAnalytics>, hostname: impl Into<String>) -> Self {
        Self {
            config,
            analytics,
            greeting_counter: AtomicU64::new(0),
            hostname: hostname.into(),
        }
    }

    /// Tăng bộ đếm và trả về giá trị mới (lần đầu là 1)
    pub fn next_greeting_id(&self) -> u64 {
        self.greeting_counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Các tham số query dạng danh sách, giữ nguyên cả khi một tên lặp lại
pub type QueryParams = Vec<(String, String)>;

/// Giá trị đầu tiên của tham số `key`, nếu có
pub fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: Sentiment,
}

async fn greeting(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Json<Greeting> {
    // Tham số rỗng cũng dùng giá trị mặc định
    let name = first_param(&params, "name")
        .filter(|name| !name.is_empty())
        .unwrap_or("World");
    Json(Greeting::new(state.next_greeting_id(), &state.hostname, name))
}

// Văn bản rỗng hoặc thiếu trả về ERROR mà không gọi dịch vụ ngoài
async fn get_ai_sentiment(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<SentimentResponse>, ApiError> {
    // Chỉ chặn chuỗi rỗng; văn bản toàn khoảng trắng vẫn được gửi đi
    let text = match first_param(&params, "text") {
        Some(text) if !text.is_empty() => text,
        _ => {
            warn!("Tham số text rỗng hoặc không có");
            return Ok(Json(SentimentResponse { sentiment: Sentiment::Error }));
        }
    };

    let sentiment = classify(state.analytics.as_ref(), text).await?;
    Ok(Json(SentimentResponse { sentiment }))
}

async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success("ok".to_string()))
}

/// Router của service, dùng chung cho server thật và test
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(greeting))
        .route("/sentiment", get(get_ai_sentiment))
        .route("/api/health", get(health_check))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO))
        )
        .layer(cors)
        .with_state(app_state)
}

/// Khởi động API server, dừng khi `shutdown` hoàn thành
pub async fn create_api_server<F>(app_state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = app_state.config.socket_addr()?;
    let app = create_router(app_state);

    info!("API server đang lắng nghe ở {}", addr);

    // Khởi động server
    axum::Server::try_bind(&addr)
        .with_context(|| format!("Không thể lắng nghe ở địa chỉ {}", addr))?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .context("API server lỗi")?;

    Ok(())
}
