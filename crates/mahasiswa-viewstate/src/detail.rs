//! Detail screen view model.

use std::sync::Arc;

use tokio::sync::watch;

use mahasiswa_core::{Mahasiswa, MahasiswaRepository, Nim};

use crate::scope::{Job, Scope};
use crate::state::{StateHolder, ViewState};

/// Backs the screen showing one record, reached by NIM.
pub struct DetailViewModel {
    repository: Arc<dyn MahasiswaRepository>,
    nim: Nim,
    state: StateHolder<Mahasiswa>,
    scope: Scope,
}

impl DetailViewModel {
    /// Create the view model and start loading `nim`.
    ///
    /// Must be called within a Tokio runtime.
    pub fn new(repository: Arc<dyn MahasiswaRepository>, nim: Nim) -> Self {
        let vm = Self {
            repository,
            nim,
            state: StateHolder::new(ViewState::Loading),
            scope: Scope::new(),
        };
        vm.reload();
        vm
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

    /// Fetch the record again.
    pub fn reload(&self) -> Job {
        self.state.set(ViewState::Loading);

        let repository = Arc::clone(&self.repository);
        let nim = self.nim.clone();
        let state = self.state.clone();
        let token = self.scope.token();

        self.scope.launch("detail.load", async move {
            let next = match repository.get_record(&nim).await {
                Ok(record) => ViewState::Success(record),
                Err(e) => ViewState::Error(format!("Failed to load mahasiswa {}: {}", nim, e)),
            };
            state.publish(&token, next);
        })
    }
}
