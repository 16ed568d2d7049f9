use crate::config::AppConfig;
use crate::store::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: AppConfig) -> Self {
        let sessions = Arc::new(SessionStore::new(config.session_idle_ttl()));
        Self {
            sessions,
            config: Arc::new(config),
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::from_config(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            session_idle_minutes: 0,
        })
    }
}
