// Third party imports
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Id của document duy nhất trong mỗi batch gửi đi
pub const DOCUMENT_ID: u32 = 1;

/// Phong bì batch của API text analytics: `{"documents": [...]}`
///
/// Dùng chung cho cả request lẫn response, `D` quyết định hình dạng document.
/// `errors` chỉ có ở response và không bao giờ được serialize ra ngoài.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Documents<D> {
    pub documents: Vec<D>,
    #[serde(default, skip_serializing)]
    pub errors: Vec<DocumentError>,
}

impl<D> Documents<D> {
    /// Batch chỉ gồm một document
    pub fn single(document: D) -> Self {
        Self {
            documents: vec![document],
            errors: Vec::new(),
        }
    }

    /// Lấy document đầu tiên (batch luôn có kích thước 1)
    pub fn into_first(self) -> Option<D> {
        self.documents.into_iter().next()
    }

    /// Gộp các lỗi theo document mà dịch vụ trả về, nếu có
    pub fn error_summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }

        Some(
            self.errors
                .iter()
                .map(|e| format!("[{}] {}", e.id, e.message))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// Lỗi dịch vụ báo cho một document cụ thể
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentError {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: u32,
    pub message: String,
}

/// Document gửi tới `/languages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInput {
    pub id: u32,
    pub text: String,
}

impl LanguageInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: DOCUMENT_ID,
            text: text.into(),
        }
    }
}

/// Ngôn ngữ phát hiện được, sắp theo độ tin cậy giảm dần
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub name: String,
    /// Mã ISO 639-1, ví dụ "en"
    #[serde(rename = "iso6391Name")]
    pub iso6391_name: String,
    /// Độ tin cậy; dịch vụ có thể trả `1` hoặc `1.0`
    pub score: f64,
}

/// Document nhận về từ `/languages`
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageResult {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: u32,
    #[serde(default)]
    pub detected_languages: Vec<DetectedLanguage>,
}

impl LanguageResult {
    /// Mã ngôn ngữ có độ tin cậy cao nhất
    pub fn top_language(&self) -> Option<&str> {
        self.detected_languages
            .first()
            .map(|l| l.iso6391_name.as_str())
    }
}

/// Document gửi tới `/sentiment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentInput {
    pub id: u32,
    pub text: String,
    pub language: String,
}

impl SentimentInput {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: DOCUMENT_ID,
            text: text.into(),
            language: language.into(),
        }
    }
}

/// Document nhận về từ `/sentiment`
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: u32,
    #[serde(default)]
    pub score: Option<f64>,
}
