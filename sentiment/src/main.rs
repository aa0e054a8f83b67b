use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use sentiment_common::init_logging;
use sentiment_service::{
    create_api_server,
    utils::resolve_hostname,
    AppState, Config, SentimentClient,
};

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Đã nhận tín hiệu tắt, đang dừng API server..."),
        Err(e) => error!("Không thể bắt tín hiệu CTRL+C: {}", e),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Tải cấu hình; thiếu key/endpoint là lỗi khởi động
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Lỗi khi tải cấu hình: {}", e);
            return Err(e.into());
        }
    };

    // Thiết lập logging
    let _guard = init_logging(&config.log_dir)?;

    info!("Khởi động Sentiment Server...");
    info!("Text analytics endpoint: {}", config.textanalytics_endpoint);

    let analytics = Arc::new(SentimentClient::from_config(&config));
    let app_state = Arc::new(AppState::new(config, analytics, resolve_hostname()));

    if let Err(e) = create_api_server(app_state, shutdown_signal()).await {
        error!("API server lỗi: {:#}", e);
        return Err(e);
    }

    info!("Sentiment Server đã tắt thành công");
    Ok(())
}
