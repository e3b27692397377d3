//! Configuration provider port - where required parameters come from.

use std::collections::HashMap;

/// Source of raw configuration values.
///
/// Implementations:
/// - `EnvConfigProvider`: process environment (optionally seeded from `.env`)
/// - `MapConfigProvider`: fixed in-memory values
pub trait ConfigProvider {
    /// Raw value for `key`, or `None` if it is not set
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory provider, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapConfigProvider {
    values: HashMap<String, String>,
}

impl MapConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for MapConfigProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapConfigProvider {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .fold(Self::new(), |provider, (k, v)| provider.with(k, v))
    }
}
