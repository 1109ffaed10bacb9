use std::sync::Arc;

use crate::domain::repositories::RosterRepository;
use crate::services::{GroupLifecycle, PlayerLifecycle};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub groups: GroupLifecycle,
    pub players: PlayerLifecycle,
}

impl AppState {
    /// Wires both lifecycles to the same storage adapter
    pub fn new(repository: Arc<dyn RosterRepository>) -> Self {
        Self {
            groups: GroupLifecycle::new(repository.clone()),
            players: PlayerLifecycle::new(repository),
        }
    }
}
