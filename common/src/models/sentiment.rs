// Standard library imports
use std::fmt::{Display, Formatter};

// Third party imports
use serde::{Deserialize, Serialize};

/// Phân loại cảm xúc thô của một đoạn văn bản
///
/// `Error` chỉ dùng khi đầu vào rỗng hoặc thiếu, không bao giờ
/// được sinh ra từ [`to_sentiment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
    Error,
}

impl Sentiment {
    /// Tên dạng SCREAMING_SNAKE_CASE, trùng với giá trị trong JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::VeryNegative => "VERY_NEGATIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Positive => "POSITIVE",
            Sentiment::VeryPositive => "VERY_POSITIVE",
            Sentiment::Error => "ERROR",
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<f64> for Sentiment {
    fn from(score: f64) -> Self {
        to_sentiment(score)
    }
}

/// Chuyển điểm cảm xúc (0.0 = tiêu cực nhất, 1.0 = tích cực nhất) sang phân loại
///
/// Các khoảng là nửa mở `[a, b)`. Giá trị ngoài [0, 1] rơi về hai đầu;
/// NaN không thỏa phép so sánh nào nên thành `VeryPositive`.
pub fn to_sentiment(score: f64) -> Sentiment {
    if score < 0.2 {
        return Sentiment::VeryNegative;
    }
    if score < 0.4 {
        return Sentiment::Negative;
    }
    if score < 0.6 {
        return Sentiment::Neutral;
    }
    if score < 0.8 {
        return Sentiment::Positive;
    }
    Sentiment::VeryPositive
}
