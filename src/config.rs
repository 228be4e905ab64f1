use std::path::PathBuf;

/// sessionStorage key the result snapshot lives under.
pub const DEFAULT_SNAPSHOT_KEY: &str = "personalBrandScore";

pub const CATALOG_ENV: &str = "BRAND_QUIZ_CATALOG";
pub const SNAPSHOT_KEY_ENV: &str = "BRAND_QUIZ_SNAPSHOT_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// YAML catalog to load instead of the embedded one.
    pub catalog_path: Option<PathBuf>,
    pub snapshot_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_owned(),
        }
    }
}

impl AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        config.catalog_path = non_empty(CATALOG_ENV).map(PathBuf::from);
        if let Some(key) = non_empty(SNAPSHOT_KEY_ENV) {
            config.snapshot_key = key;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.snapshot_key, "personalBrandScore");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = AppConfig::from_lookup(|_| Some("   ".to_owned()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn overrides_are_picked_up() {
        let config = AppConfig::from_lookup(|name| match name {
            CATALOG_ENV => Some("/tmp/catalog.yaml".to_owned()),
            SNAPSHOT_KEY_ENV => Some("otherKey".to_owned()),
            _ => None,
        });
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.yaml")));
        assert_eq!(config.snapshot_key, "otherKey");
    }
}
