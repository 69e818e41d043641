use std::time::Instant;

use axum::extract::FromRef;

use crate::config::Config;

/// Process-wide immutable state handed to the router.
///
/// No evaluation results live here: every sizing request is independent
/// and recomputed from scratch, so the only shared data is the loaded
/// configuration and the start instant for health reporting.
#[derive(Clone)]
pub struct SharedState {
    pub config: Config,
    pub started_at: Instant,
}

impl SharedState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl FromRef<SharedState> for Config {
    fn from_ref(shared: &SharedState) -> Config {
        shared.config.clone()
    }
}
