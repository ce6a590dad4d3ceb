//! Update screen view model.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use mahasiswa_core::{Mahasiswa, MahasiswaRepository, Nim};

use crate::draft::MahasiswaDraft;
use crate::scope::{Job, Scope};
use crate::state::{StateHolder, ViewState};

/// Backs the edit screen: load a record, edit the draft, submit it.
///
/// ```text
/// Idle --load--> Loading --ok--> Success
///                Loading --fail--> Error
/// Success/Error --submit--> Loading
/// ```
pub struct UpdateViewModel {
    repository: Arc<dyn MahasiswaRepository>,
    state: StateHolder<Mahasiswa>,
    draft: Arc<Mutex<Option<MahasiswaDraft>>>,
    scope: Scope,
}

impl UpdateViewModel {
    pub fn new(repository: Arc<dyn MahasiswaRepository>) -> Self {
        Self {
            repository,
            state: StateHolder::new(ViewState::Idle),
            draft: Arc::new(Mutex::new(None)),
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

    /// The current draft, if a record has been loaded.
    pub fn draft(&self) -> Option<MahasiswaDraft> {
        self.draft
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Load `nim` and seed the draft from it.
    ///
    /// Must be called within a Tokio runtime.
    pub fn load(&self, nim: Nim) -> Job {
        self.state.set(ViewState::Loading);

        let repository = Arc::clone(&self.repository);
        let state = self.state.clone();
        let draft = Arc::clone(&self.draft);
        let token = self.scope.token();

        self.scope.launch("update.load", async move {
            match repository.get_record(&nim).await {
                Ok(record) => {
                    if token.is_cancelled() {
                        return;
                    }
                    *draft.lock().unwrap_or_else(PoisonError::into_inner) =
                        Some(MahasiswaDraft::from(&record));
                    state.publish(&token, ViewState::Success(record));
                }
                Err(e) => {
                    state.publish(
                        &token,
                        ViewState::Error(format!("Failed to load mahasiswa data: {}", e)),
                    );
                }
            }
        })
    }

    /// Replace the draft wholesale. No state change, no I/O.
    pub fn apply_edit(&self, draft: MahasiswaDraft) {
        *self.draft.lock().unwrap_or_else(PoisonError::into_inner) = Some(draft);
    }

    /// Mutate the loaded draft in place. Does nothing before a load.
    pub fn edit(&self, f: impl FnOnce(&mut MahasiswaDraft)) {
        if let Some(draft) = self
            .draft
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
        {
            f(draft);
        }
    }

    /// Submit the draft as an update of the record it names.
    ///
    /// Without a draft, or with a draft whose NIM is invalid, the state
    /// becomes `Error` immediately, no request is made and `None` is
    /// returned. On success the submitted values are shown as-is; the record
    /// is not fetched again.
    pub fn submit(&self) -> Option<Job> {
        let Some(draft) = self.draft() else {
            self.state
                .set(ViewState::Error("Form data is not initialized".to_string()));
            return None;
        };

        let record = match draft.to_record() {
            Ok(record) => record,
            Err(e) => {
                self.state
                    .set(ViewState::Error(format!("Failed to update mahasiswa: {}", e)));
                return None;
            }
        };

        self.state.set(ViewState::Loading);

        let repository = Arc::clone(&self.repository);
        let state = self.state.clone();
        let token = self.scope.token();

        Some(self.scope.launch("update.submit", async move {
            let next = match repository.update_record(&record.nim, &record).await {
                Ok(()) => {
                    debug!(nim = %record.nim, "update accepted");
                    ViewState::Success(record)
                }
                Err(e) => ViewState::Error(format!("Failed to update mahasiswa: {}", e)),
            };
            state.publish(&token, next);
        }))
    }
}
