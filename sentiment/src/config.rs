use dotenv::dotenv;
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use sentiment_common::{CommonError, CommonResult};

pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Clone)]
pub struct Config {
    // Text analytics
    pub textanalytics_key: String,
    pub textanalytics_endpoint: String,

    // API
    pub api_host: String,
    pub api_port: u16,

    /// Thời gian chờ tối đa cho mỗi lời gọi ra ngoài (giây)
    pub request_timeout_secs: u64,

    // Logging
    pub log_dir: String,
}

// Không in subscription key ra log
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("textanalytics_key", &"***")
            .field("textanalytics_endpoint", &self.textanalytics_endpoint)
            .field("api_host", &self.api_host)
            .field("api_port", &self.api_port)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl Config {
    /// Cấu hình với key/endpoint cho trước, các giá trị còn lại mặc định
    pub fn new(key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            textanalytics_key: key.into(),
            textanalytics_endpoint: endpoint.into(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_port: DEFAULT_API_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_dir: DEFAULT_LOG_DIR.to_string(),
        }
    }

    /// Đọc cấu hình từ biến môi trường (có nạp file `.env` nếu tồn tại)
    pub fn from_env() -> CommonResult<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Đọc cấu hình qua một hàm tra cứu tên biến -> giá trị
    pub fn from_lookup<F>(lookup: F) -> CommonResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            textanalytics_key: required(&lookup, "TEXTANALYTICS_KEY")?,
            textanalytics_endpoint: required(&lookup, "TEXTANALYTICS_ENDPOINT")?,
            api_host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            api_port: optional(&lookup, "API_PORT", DEFAULT_API_PORT)?,
            request_timeout_secs: optional(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Địa chỉ lắng nghe của API server
    pub fn socket_addr(&self) -> CommonResult<SocketAddr> {
        format!("{}:{}", self.api_host, self.api_port)
            .parse()
            .map_err(|e| CommonError::Network(format!("địa chỉ API không hợp lệ {}:{}: {}", self.api_host, self.api_port, e)))
    }
}

fn required<F>(lookup: &F, name: &str) -> CommonResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CommonError::missing_setting(name)),
    }
}

fn optional<F, T>(lookup: &F, name: &str, default: T) -> CommonResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| CommonError::Invalid(format!("{}={}: {}", name, raw, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_required_settings_and_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("TEXTANALYTICS_KEY", "secret"),
            ("TEXTANALYTICS_ENDPOINT", "https://westeurope.api.cognitive.microsoft.com/text/analytics/v2.0"),
        ]))
        .unwrap();

        assert_eq!(config.textanalytics_key, "secret");
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert_eq!(config.api_port, DEFAULT_API_PORT);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[("TEXTANALYTICS_ENDPOINT", "http://localhost")]));
        match result {
            Err(CommonError::Config(msg)) => assert!(msg.contains("TEXTANALYTICS_KEY")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_endpoint_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("TEXTANALYTICS_KEY", "secret"),
            ("TEXTANALYTICS_ENDPOINT", "  "),
        ]));
        assert!(matches!(result, Err(CommonError::Config(_))));
    }

    #[test]
    fn test_overrides_and_invalid_number() {
        let config = Config::from_lookup(lookup_from(&[
            ("TEXTANALYTICS_KEY", "secret"),
            ("TEXTANALYTICS_ENDPOINT", "http://localhost"),
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "9090"),
            ("REQUEST_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));

        let result = Config::from_lookup(lookup_from(&[
            ("TEXTANALYTICS_KEY", "secret"),
            ("TEXTANALYTICS_ENDPOINT", "http://localhost"),
            ("API_PORT", "not-a-port"),
        ]));
        assert!(matches!(result, Err(CommonError::Invalid(_))));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = Config::new("super-secret", "http://localhost");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
