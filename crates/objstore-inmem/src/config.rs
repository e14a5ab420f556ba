use objstore::{Bucket, ObjStoreError, ObjStoreResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::memory::InMemBucket;

/// Storage backend selected by a [`BucketConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Provider {
    /// Process-local map, see [`InMemBucket`].
    #[default]
    InMem,
}

/// Bucket configuration, usually read from a TOML file.
///
/// ```toml
/// type = "INMEM"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketConfig {
    #[serde(rename = "type")]
    pub provider: Provider,
}

impl BucketConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> ObjStoreResult<Self> {
        toml::from_str(s).map_err(|e| ObjStoreError::Config(e.to_string()))
    }
}

/// Construct the bucket described by `config`.
pub fn new_bucket(config: &BucketConfig) -> ObjStoreResult<Box<dyn Bucket>> {
    let bkt: Box<dyn Bucket> = match config.provider {
        Provider::InMem => Box::new(InMemBucket::new()),
    };
    info!(provider = ?config.provider, name = bkt.name(), "loading bucket");
    Ok(bkt)
}
