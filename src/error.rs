use thiserror::Error;

/// Custom error types for findbar
#[derive(Debug, Error)]
pub enum FindBarError {
    #[error("Unsupported find bar snapshot version {version} (expected {expected})")]
    UnsupportedSnapshot { version: u32, expected: u32 },

    #[error("Invalid find bar snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
