use crate::modules::scheduling::adapters::inbound::command_router::{ChatCommands, CommandRouter};
use crate::modules::scheduling::adapters::outbound::event_store::EventStore;
use crate::shared::core::primitives::SystemClock;
use crate::shared::infrastructure::record_store::file_system::FileSystemRecordStore;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub commands: Arc<dyn ChatCommands + Send + Sync>,
}

impl AppState {
    /// Partition files under the configured data directory, real wall clock.
    pub fn wire(config: &AppConfig) -> Self {
        let records = Arc::new(FileSystemRecordStore::new(config.data_dir.clone()));
        let store = Arc::new(EventStore::new(records, Arc::new(SystemClock)));
        Self {
            commands: Arc::new(CommandRouter::new(store, config.command_prefix.clone())),
        }
    }
}
