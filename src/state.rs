use crate::config::Config;
use axum::extract::FromRef;

/// Shared handler state. Scoring is stateless, so only configuration lives here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
