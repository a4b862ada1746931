//! Client-side configuration, resolved once at startup and handed to
//! [`AcceptanceLogClient`](crate::AcceptanceLogClient).

use std::time::Duration;

/// How long an active-terms read stays fresh before it is fetched again.
pub const DEFAULT_ACTIVE_TERMS_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    active_terms_ttl: Duration,
    versions_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            active_terms_ttl: DEFAULT_ACTIVE_TERMS_TTL,
            versions_ttl: Duration::ZERO,
        }
    }
}

impl ClientConfig {
    /// Staleness window for `get_active_terms`. Zero disables caching.
    pub fn with_active_terms_ttl(mut self, ttl: Duration) -> Self {
        self.active_terms_ttl = ttl;
        self
    }

    /// Staleness window for `list_terms_versions`. Zero (the default)
    /// disables caching.
    pub fn with_versions_ttl(mut self, ttl: Duration) -> Self {
        self.versions_ttl = ttl;
        self
    }

    pub fn active_terms_ttl(&self) -> Duration {
        self.active_terms_ttl
    }

    pub fn versions_ttl(&self) -> Duration {
        self.versions_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.active_terms_ttl(), Duration::from_secs(3600));
        assert!(config.versions_ttl().is_zero());
    }

    #[test]
    fn setters_override() {
        let config = ClientConfig::default()
            .with_active_terms_ttl(Duration::from_secs(30))
            .with_versions_ttl(Duration::from_secs(5));
        assert_eq!(config.active_terms_ttl(), Duration::from_secs(30));
        assert_eq!(config.versions_ttl(), Duration::from_secs(5));
    }
}
