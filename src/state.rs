use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig, started_at: Instant) -> Self {
        Self {
            config: Arc::new(config),
            started_at,
        }
    }

    /// Seconds elapsed since `started_at`, the instant the process entered `main`.
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    pub fn environment(&self) -> Option<String> {
        self.config.environment.clone()
    }
}
