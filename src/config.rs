use crate::error::{Error, Result};
use getset::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the `source` field of a `SubSource` is materialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceResolution {
    /// Identity only, no fetch. Any field besides `id` comes back zero valued.
    #[default]
    IdentityOnly,
    /// Identity only until a deeper field is selected, then loaded once per request.
    Lazy,
    /// Full fetch by `source_id` when the field is resolved.
    Full,
}

#[derive(Clone, Debug, Builder, Getters, Deserialize)]
#[getset(get = "pub")]
#[builder(default)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    source_resolution: SourceResolution,
    fetch_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            source_resolution: SourceResolution::default(),
            fetch_timeout_ms: 5000,
        }
    }
}

impl ResolverConfig {
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        if config.fetch_timeout_ms == 0 {
            return Err(Error::ConfigError(
                "fetch_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl From<ResolverConfigBuilderError> for Error {
    fn from(err: ResolverConfigBuilderError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
