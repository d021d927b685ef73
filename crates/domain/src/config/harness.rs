use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HarnessConfig {
    #[serde(default = "default_providers_file")]
    pub providers_file: String,

    /// Append a second provider's nameservers to every suite.
    #[serde(default)]
    pub dual_providers: bool,

    /// Verify each case against live DNS after applying corrections.
    #[serde(default)]
    pub verify_live: bool,

    /// TTL of the apex NS records built from provider nameservers.
    #[serde(default = "default_ns_ttl")]
    pub ns_ttl: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            providers_file: default_providers_file(),
            dual_providers: false,
            verify_live: false,
            ns_ttl: default_ns_ttl(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpfConfig {
    /// Domains whose `include:` may be expanded in place.
    #[serde(default)]
    pub whitelist: Vec<String>,

    /// Room left in the first TXT string, for records that prepend data.
    #[serde(default = "default_first_chunk_limit")]
    pub first_chunk_limit: usize,
}

impl Default for SpfConfig {
    fn default() -> Self {
        Self {
            whitelist: Vec::new(),
            first_chunk_limit: default_first_chunk_limit(),
        }
    }
}

fn default_providers_file() -> String {
    "providers.json".to_string()
}

fn default_ns_ttl() -> u32 {
    crate::domain_config::DEFAULT_NS_TTL
}

fn default_first_chunk_limit() -> usize {
    200
}
