use std::net::SocketAddr;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Idle minutes before a session is dropped; 0 keeps sessions forever.
    pub session_idle_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            session_idle_minutes: 120,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = lookup("APP_HOST").unwrap_or(defaults.host);
        let port = match lookup("APP_PORT") {
            Some(v) => v.parse::<u16>().with_context(|| format!("APP_PORT={}", v))?,
            None => defaults.port,
        };
        let session_idle_minutes = match lookup("SESSION_IDLE_MINUTES") {
            Some(v) => v
                .parse::<i64>()
                .with_context(|| format!("SESSION_IDLE_MINUTES={}", v))?,
            None => defaults.session_idle_minutes,
        };
        anyhow::ensure!(
            session_idle_minutes >= 0,
            "SESSION_IDLE_MINUTES must not be negative"
        );
        anyhow::ensure!(
            session_idle_minutes <= i64::MAX / 60,
            "SESSION_IDLE_MINUTES={} is too large",
            session_idle_minutes
        );
        Ok(Self {
            host,
            port,
            session_idle_minutes,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    pub fn session_idle_ttl(&self) -> Option<time::Duration> {
        (self.session_idle_minutes > 0).then(|| time::Duration::minutes(self.session_idle_minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(cfg.session_idle_ttl(), Some(time::Duration::minutes(120)));
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
            ("SESSION_IDLE_MINUTES", "0"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(cfg.session_idle_ttl(), None);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(AppConfig::from_lookup(lookup(&[("APP_PORT", "http")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("SESSION_IDLE_MINUTES", "-5")])).is_err());
    }

    #[test]
    fn rejects_idle_minutes_beyond_duration_range() {
        let err = AppConfig::from_lookup(lookup(&[(
            "SESSION_IDLE_MINUTES",
            "999999999999999999",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("too large"));

        let max = (i64::MAX / 60).to_string();
        let cfg = AppConfig::from_lookup(lookup(&[("SESSION_IDLE_MINUTES", &max)])).unwrap();
        assert!(cfg.session_idle_ttl().is_some());
    }
}
