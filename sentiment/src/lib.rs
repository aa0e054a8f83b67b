// Public modules
pub mod analytics;
pub mod api;
pub mod config;
pub mod error_handling;
pub mod utils;

// Re-export core types
pub use analytics::{classify, get_sentiment, SentimentClient, TextAnalytics};
pub use api::{create_api_server, create_router, AppState};
pub use config::Config;
pub use error_handling::{AnalyticsError, ApiError};
pub use sentiment_common::Sentiment;
