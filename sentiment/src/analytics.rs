//! Client cho dịch vụ text analytics: phát hiện ngôn ngữ rồi chấm điểm cảm xúc.

// Standard library imports
use std::time::Duration;

// Third party imports
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

// Internal imports
use sentiment_common::{
    to_sentiment, Documents, LanguageInput, LanguageResult, Sentiment, SentimentInput,
    SentimentScore,
};
use crate::config::{Config, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error_handling::AnalyticsError;

/// Header xác thực của API
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

pub const LANGUAGES_PATH: &str = "languages";
pub const SENTIMENT_PATH: &str = "sentiment";

/// Hai thao tác của dịch vụ text analytics mà service cần
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextAnalytics: Send + Sync {
    /// Trả về mã ISO 639-1 của ngôn ngữ có độ tin cậy cao nhất
    async fn detect_language(&self, text: &str) -> Result<String, AnalyticsError>;

    /// Trả về điểm cảm xúc trong [0, 1]
    async fn score_sentiment(&self, text: &str, language: &str) -> Result<f64, AnalyticsError>;
}

/// Phân loại cảm xúc của `text`
///
/// Hai lời gọi chạy tuần tự vì payload chấm điểm cần ngôn ngữ đã phát hiện.
/// Lỗi ở bước nào cũng kết thúc luôn, không gọi bước sau.
pub async fn classify<A>(analytics: &A, text: &str) -> Result<Sentiment, AnalyticsError>
where
    A: TextAnalytics + ?Sized,
{
    info!("Đang phát hiện ngôn ngữ cho | {}", text);
    let language = analytics.detect_language(text).await?;
    info!("Đã phát hiện ngôn ngữ [{}]", language);

    let score = analytics.score_sentiment(text, &language).await?;
    let sentiment = to_sentiment(score);
    info!("Điểm cảm xúc [{}] | [{}]", score, sentiment);

    Ok(sentiment)
}

/// Gọi trọn luồng với key/endpoint cho trước
pub async fn get_sentiment(key: &str, endpoint: &str, text: &str) -> Result<Sentiment, AnalyticsError> {
    let client = SentimentClient::new(key, endpoint, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    client.get_sentiment(text).await
}

/// Client HTTP tới dịch vụ text analytics
#[derive(Debug, Clone)]
pub struct SentimentClient {
    client: Client,
    endpoint: String,
    key: String,
    timeout: Duration,
}

impl SentimentClient {
    pub fn new(key: impl Into<String>, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self::with_client(Client::new(), key, endpoint, timeout)
    }

    /// Dùng chung một `reqwest::Client` (connection pool) có sẵn
    pub fn with_client(
        client: Client,
        key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            client,
            endpoint,
            key: key.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.textanalytics_key.clone(),
            config.textanalytics_endpoint.clone(),
            config.request_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get_sentiment(&self, text: &str) -> Result<Sentiment, AnalyticsError> {
        classify(self, text).await
    }

    /// POST một batch và đọc batch phản hồi, giới hạn bởi `timeout`
    async fn post_documents<Req, Resp>(
        &self,
        path: &str,
        body: &Documents<Req>,
    ) -> Result<Documents<Resp>, AnalyticsError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        match tokio::time::timeout(self.timeout, self._post_documents_internal(path, body)).await {
            Ok(result) => result,
            Err(_) => Err(AnalyticsError::TimeoutError(format!(
                "/{} không phản hồi sau {:?}",
                path, self.timeout
            ))),
        }
    }

    async fn _post_documents_internal<Req, Resp>(
        &self,
        path: &str,
        body: &Documents<Req>,
    ) -> Result<Documents<Resp>, AnalyticsError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{}", self.endpoint, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Không thể đọc lỗi".to_string());
            return Err(AnalyticsError::StatusError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(AnalyticsError::EmptyResponse(format!("/{}", path)));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl TextAnalytics for SentimentClient {
    async fn detect_language(&self, text: &str) -> Result<String, AnalyticsError> {
        let request = Documents::single(LanguageInput::new(text));
        let response: Documents<LanguageResult> = self.post_documents(LANGUAGES_PATH, &request).await?;

        let summary = response.error_summary();
        let document = response.into_first().ok_or_else(|| {
            AnalyticsError::MissingLanguage(summary.unwrap_or_else(|| "không có document nào".to_string()))
        })?;

        document
            .top_language()
            .map(str::to_string)
            .ok_or_else(|| AnalyticsError::MissingLanguage("danh sách detectedLanguages rỗng".to_string()))
    }

    async fn score_sentiment(&self, text: &str, language: &str) -> Result<f64, AnalyticsError> {
        let request = Documents::single(SentimentInput::new(text, language));
        let response: Documents<SentimentScore> = self.post_documents(SENTIMENT_PATH, &request).await?;

        let summary = response.error_summary();
        let document = response.into_first().ok_or_else(|| {
            AnalyticsError::MissingScore(summary.unwrap_or_else(|| "không có document nào".to_string()))
        })?;

        document
            .score
            .ok_or_else(|| AnalyticsError::MissingScore(format!("document {} không có score", document.id)))
    }
}
