use std::collections::HashMap;

use crate::schema::{KEY_CREATED, KEY_FORMAT_VERSION, KEY_METHOD, TRAJPLOT_FORMAT_VERSION};

/// Descriptive metadata stored in the Parquet footer of a trajectory file
#[derive(Debug, Clone, Default)]
pub struct TrajectoryMetadata {
    /// Integration method or run name, e.g. "Symplectic"
    pub method: Option<String>,
    /// Additional free-form entries
    pub extra: HashMap<String, String>,
}

impl TrajectoryMetadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Create metadata naming the method that produced the trajectory
    pub fn with_method(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            ..Self::default()
        }
    }

    /// Add a free-form key-value entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.insert(key.into(), value.into());
    }

    /// Convert to Parquet footer key-value pairs
    pub fn to_parquet_metadata(&self) -> HashMap<String, String> {
        let mut kv = self.extra.clone();
        kv.insert(
            KEY_FORMAT_VERSION.to_string(),
            TRAJPLOT_FORMAT_VERSION.to_string(),
        );
        kv.insert(KEY_CREATED.to_string(), chrono::Utc::now().to_rfc3339());
        if let Some(method) = &self.method {
            kv.insert(KEY_METHOD.to_string(), method.clone());
        }
        kv
    }
}
