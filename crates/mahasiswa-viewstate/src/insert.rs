//! Insert screen view model.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use mahasiswa_core::{Mahasiswa, MahasiswaRepository};

use crate::draft::MahasiswaDraft;
use crate::scope::{Job, Scope};
use crate::state::{StateHolder, ViewState};

/// Backs the entry screen for new records.
pub struct InsertViewModel {
    repository: Arc<dyn MahasiswaRepository>,
    state: StateHolder<Mahasiswa>,
    draft: Mutex<MahasiswaDraft>,
    scope: Scope,
}

impl InsertViewModel {
    pub fn new(repository: Arc<dyn MahasiswaRepository>) -> Self {
        Self {
            repository,
            state: StateHolder::new(ViewState::Idle),
            draft: Mutex::new(MahasiswaDraft::default()),
            scope: Scope::new(),
        }
    }

    pub fn state(&self) -> ViewState<Mahasiswa> {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Mahasiswa>> {
        self.state.subscribe()
    }

    pub async fn settled(&self) -> ViewState<Mahasiswa> {
        self.state.settled().await
    }

    pub fn draft(&self) -> MahasiswaDraft {
        self.draft
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn apply_edit(&self, draft: MahasiswaDraft) {
        *self.draft.lock().unwrap_or_else(PoisonError::into_inner) = draft;
    }

    pub fn edit(&self, f: impl FnOnce(&mut MahasiswaDraft)) {
        f(&mut self.draft.lock().unwrap_or_else(PoisonError::into_inner));
    }

    /// Create a record from the draft.
    ///
    /// An invalid NIM fails immediately with no request and returns `None`.
    ///
    /// Must be called within a Tokio runtime.
    pub fn submit(&self) -> Option<Job> {
        let record = match self.draft().to_record() {
            Ok(record) => record,
            Err(e) => {
                self.state
                    .set(ViewState::Error(format!("Failed to insert mahasiswa: {}", e)));
                return None;
            }
        };

        self.state.set(ViewState::Loading);

        let repository = Arc::clone(&self.repository);
        let state = self.state.clone();
        let token = self.scope.token();

        Some(self.scope.launch("insert.submit", async move {
            let next = match repository.create_record(&record).await {
                Ok(()) => {
                    debug!(nim = %record.nim, "insert accepted");
                    ViewState::Success(record)
                }
                Err(e) => ViewState::Error(format!("Failed to insert mahasiswa: {}", e)),
            };
            state.publish(&token, next);
        }))
    }
}
