//! List screen view model.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use mahasiswa_core::{Mahasiswa, MahasiswaRepository, Nim, Result};

use crate::scope::{Job, Scope};
use crate::state::{LoadFailed, StateHolder, ViewState};

/// State of the list screen. Failures carry no detail.
pub type ListState = ViewState<Vec<Mahasiswa>, LoadFailed>;

/// Backs the screen that lists every record.
pub struct ListViewModel {
    repository: Arc<dyn MahasiswaRepository>,
    state: StateHolder<Vec<Mahasiswa>, LoadFailed>,
    scope: Scope,
}

impl ListViewModel {
    /// Create the view model and start the first refresh.
    ///
    /// Must be called within a Tokio runtime.
    pub fn new(repository: Arc<dyn MahasiswaRepository>) -> Self {
        let vm = Self {
            repository,
            state: StateHolder::new(ViewState::Loading),
            scope: Scope::new(),
        };
        vm.refresh();
        vm
    }

    pub fn state(&self) -> ListState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    /// Wait for the current call to finish and return the resulting state.
    pub async fn settled(&self) -> ListState {
        self.state.settled().await
    }

    /// Reload the whole list.
    pub fn refresh(&self) -> Job {
        self.state.set(ViewState::Loading);

        let repository = Arc::clone(&self.repository);
        let state = self.state.clone();
        let token = self.scope.token();

        self.scope.launch("list.refresh", async move {
            let next = match repository.list_records().await {
                Ok(records) => {
                    debug!(count = records.len(), "list refreshed");
                    ViewState::Success(records)
                }
                Err(e) => {
                    debug!(error = %e, "list refresh failed");
                    ViewState::Error(LoadFailed)
                }
            };
            state.publish(&token, next);
        })
    }

    /// Delete a record without touching the screen state.
    ///
    /// The displayed list is left as-is; callers refresh afterwards. A failed
    /// delete is logged and returned through the job, never published.
    pub fn remove(&self, nim: Nim) -> Job<Result<()>> {
        let repository = Arc::clone(&self.repository);

        self.scope.launch("list.remove", async move {
            let result = repository.delete_record(&nim).await;
            if let Err(e) = &result {
                warn!(%nim, error = %e, "delete failed");
            }
            result
        })
    }
}
