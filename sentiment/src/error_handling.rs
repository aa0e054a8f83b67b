use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reqwest::Error as ReqwestError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Các lỗi khi gọi dịch vụ text analytics
///
/// Mọi biến thể đều là lỗi không thể phục hồi của request hiện tại:
/// không retry, không có kết quả dự phòng.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Lỗi HTTP request: {0}")]
    RequestError(String),

    #[error("Dịch vụ trả về status {status}: {body}")]
    StatusError { status: u16, body: String },

    #[error("Lỗi timeout: {0}")]
    TimeoutError(String),

    #[error("Lỗi phân tích phản hồi: {0}")]
    ParseError(String),

    #[error("Phản hồi rỗng từ {0}")]
    EmptyResponse(String),

    #[error("Không thể phát hiện ngôn ngữ: {0}")]
    MissingLanguage(String),

    #[error("Không thể lấy điểm cảm xúc: {0}")]
    MissingScore(String),
}

impl From<ReqwestError> for AnalyticsError {
    fn from(err: ReqwestError) -> Self {
        if err.is_timeout() {
            AnalyticsError::TimeoutError(err.to_string())
        } else {
            AnalyticsError::RequestError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::ParseError(err.to_string())
    }
}

/// Cấu trúc lỗi API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: u16,
    pub status: String,
    pub message: String,
}

/// Lỗi trả về từ các handler
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] AnalyticsError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Không phân biệt lỗi mạng, status hay parse với phía gọi
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!("Lỗi khi gọi dịch vụ text analytics: {}", self);

        let body = ApiErrorResponse {
            error: "upstream_error".to_string(),
            code: status.as_u16(),
            status: "error".to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
