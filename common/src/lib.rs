// Modules paths - tất cả các module trong src
pub mod error;
pub mod logger;
pub mod models;

// Re-export core types
pub use error::{CommonError, CommonResult};
pub use logger::init_logging;
pub use models::{
    to_sentiment,
    DetectedLanguage,
    DocumentError,
    Documents,
    Greeting,
    LanguageInput,
    LanguageResult,
    Sentiment,
    SentimentInput,
    SentimentScore,
    DOCUMENT_ID,
};
