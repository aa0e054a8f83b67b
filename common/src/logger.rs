// Standard library imports
use std::path::Path;

// Third party imports
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

// Internal imports
use crate::error::{CommonError, CommonResult};

/// Tên file log (được xoay vòng theo ngày)
pub const LOG_FILE_NAME: &str = "sentiment.log";

/// Thiết lập logging cho toàn bộ process
///
/// Ghi log ra stderr (có màu) và ra file trong `log_dir`, xoay vòng hằng ngày.
/// Mức log lấy từ `RUST_LOG`, mặc định là `info`.
///
/// Giữ lại `WorkerGuard` trả về cho tới khi process kết thúc, nếu không
/// các dòng log còn trong buffer sẽ bị mất.
pub fn init_logging(log_dir: &str) -> CommonResult<WorkerGuard> {
    let dir = Path::new(log_dir);
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| CommonError::Config(format!("không thể tạo thư mục log {}: {}", log_dir, e)))?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into())
        )
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(true)
        )
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
        )
        .try_init()
        .map_err(|e| CommonError::Other(format!("không thể khởi tạo logging: {}", e)))?;

    debug!("Đã khởi tạo logging, ghi file vào {}", log_dir);
    Ok(guard)
}
