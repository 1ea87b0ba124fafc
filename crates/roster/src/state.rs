//! Shared application state.
//!
//! The tabular store is constructed once at startup and injected into each
//! repository; handlers never reach for a global store handle.

use std::sync::Arc;

use roster_core::records::{Member, MentoringLog, PitchTeam};
use roster_core::storage::TabularStore;

use crate::config::Config;
use crate::repository::{AttendanceRepository, SheetRepository};

#[cfg(feature = "inmemory")]
use crate::storage::InMemoryWorkbook;
#[cfg(feature = "sqlite")]
use crate::storage::SqliteWorkbook;

/// Shared application state, cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub members: SheetRepository<Member>,
    pub attendance: AttendanceRepository,
    pub mentoring: SheetRepository<MentoringLog>,
    pub pitch_teams: SheetRepository<PitchTeam>,
}

impl AppState {
    /// Builds the state on top of an explicit store handle.
    pub fn new(store: Arc<dyn TabularStore>) -> Self {
        Self {
            members: SheetRepository::new(Arc::clone(&store)),
            attendance: AttendanceRepository::new(Arc::clone(&store)),
            mentoring: SheetRepository::new(Arc::clone(&store)),
            pitch_teams: SheetRepository::new(store),
        }
    }

    /// Builds the state with the storage backend selected at compile time.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(_config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(InMemoryWorkbook::new())))
    }

    /// Builds the state with the storage backend selected at compile time.
    #[cfg(feature = "sqlite")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = SqliteWorkbook::open(&config.sqlite_path).await?;
        Ok(Self::new(Arc::new(store)))
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryWorkbook::new()))
    }
}
