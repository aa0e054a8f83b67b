use serde::{Deserialize, Serialize};

/// Phản hồi của endpoint chào
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// Số thứ tự lời chào, tăng dần trong suốt vòng đời process
    pub id: u64,
    /// Nội dung lời chào
    pub content: String,
}

impl Greeting {
    pub fn new(id: u64, hostname: &str, name: &str) -> Self {
        Self {
            id,
            content: format!("Hello from {}, {}", hostname, name),
        }
    }
}
