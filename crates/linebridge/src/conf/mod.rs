//! Conf module — construction options, resolution, and file/env settings.

pub mod option;
pub mod model;
pub mod load;

pub use option::{
    with_diagnostics, with_logger_provider, with_parser, with_schema_url, with_version,
    BridgeConfig, BridgeOption, DefaultProvider,
};
pub use model::{BridgeSettings, ConfigError};
