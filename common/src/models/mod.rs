// Internal modules
mod document;
mod greeting;
mod sentiment;

// Re-exports
pub use document::*;
pub use greeting::*;
pub use sentiment::*;
