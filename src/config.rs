/// Application-level constants
pub const APP_NAME: &str = "Symptica";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of disease predictions returned to callers.
pub const DEFAULT_TOP_N: usize = 5;

/// Timeout for the chat-completion service, seconds. No automatic retry.
pub const COMPLETION_TIMEOUT_SECS: u64 = 30;
/// Maximum tokens requested per completion.
pub const COMPLETION_MAX_TOKENS: u32 = 512;
/// Sampling temperature for completion requests.
pub const COMPLETION_TEMPERATURE: f32 = 0.2;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "symptica=info".to_string()
}
