// Third party imports
use thiserror::Error;

/// Lỗi chung
#[derive(Debug, Error)]
pub enum CommonError {
    /// Lỗi cấu hình
    #[error("Config error: {0}")]
    Config(String),
    /// Lỗi không hợp lệ
    #[error("Invalid: {0}")]
    Invalid(String),
    /// Lỗi mạng
    #[error("Network error: {0}")]
    Network(String),
    /// Lỗi khác
    #[error("Other error: {0}")]
    Other(String),
}

impl CommonError {
    /// Lỗi thiếu biến cấu hình bắt buộc
    pub fn missing_setting(name: &str) -> Self {
        CommonError::Config(format!("thiếu biến cấu hình bắt buộc {}", name))
    }
}

/// Kiểu kết quả chung
pub type CommonResult<T> = Result<T, CommonError>;
