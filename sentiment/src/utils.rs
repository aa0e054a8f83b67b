use sysinfo::{System, SystemExt};

/// Tên máy hiện tại, dùng trong lời chào
pub fn resolve_hostname() -> String {
    System::new()
        .host_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
