// Bridge from line-oriented text logging to structured log records.

// Structured logging capability API
pub mod logs;

// Core
pub mod parser;
pub mod bridge;
pub mod conf;
pub mod error;

// Test backend
pub mod recorder;

pub use bridge::LineBridge;
pub use conf::{
    with_diagnostics, with_logger_provider, with_parser, with_schema_url, with_version,
    BridgeOption,
};
pub use error::BridgeError;
