pub mod errors;
pub mod harness;
pub mod logging;
pub mod providers;
pub mod query;
pub mod root;

pub use errors::ConfigError;
pub use harness::{HarnessConfig, SpfConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use providers::{ProviderConfig, ProviderConfigs};
pub use query::QueryConfig;
pub use root::{CliOverrides, Config};
