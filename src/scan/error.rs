use redis::RedisError;
use std::fmt::Display;

/// 扫描错误
///
/// Configuration problems are detected locally before any round trip is
/// issued; store errors pass through from the underlying connection
/// unchanged. No retry or recovery happens at this level.
#[derive(Debug)]
pub enum ScanError {
    /// 配置错误 invalid variant/option combination
    Config(String),
    /// 连接或协议错误 surfaced verbatim from the store client
    Store(RedisError),
}

impl ScanError {
    pub(crate) fn config(msg: impl ToString) -> Self {
        ScanError::Config(msg.to_string())
    }

    pub fn is_config(&self) -> bool {
        matches!(self, ScanError::Config(_))
    }
}

impl Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::Config(msg) => {
                write!(f, "scan configuration error: {}", msg)
            }
            ScanError::Store(e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Config(_) => None,
            ScanError::Store(e) => Some(e),
        }
    }
}

impl From<RedisError> for ScanError {
    fn from(e: RedisError) -> Self {
        ScanError::Store(e)
    }
}
