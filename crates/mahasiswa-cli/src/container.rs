//! Composition root: builds the repository once and hands it to view models.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use mahasiswa_core::{BaseUrl, MahasiswaRepository, Nim};
use mahasiswa_file::FileRepository;
use mahasiswa_http::{ClientConfig, HttpRepository};
use mahasiswa_viewstate::{DetailViewModel, InsertViewModel, ListViewModel, UpdateViewModel};

use crate::settings::Settings;

/// Long-lived dependencies shared by every screen.
pub struct AppContainer {
    base_url: BaseUrl,
    repository: Arc<dyn MahasiswaRepository>,
}

impl AppContainer {
    pub fn new(settings: &Settings) -> Result<Self> {
        let base_url = settings.base_url.clone();

        let repository: Arc<dyn MahasiswaRepository> = if base_url.is_local() {
            debug!(%base_url, "Using file repository");
            Arc::new(FileRepository::new(base_url.clone()).context("Failed to open file store")?)
        } else {
            debug!(%base_url, "Using HTTP repository");
            let mut config = ClientConfig::new(base_url.clone());
            if let Some(timeout) = settings.timeout {
                config = config.with_timeout(timeout);
            }
            Arc::new(HttpRepository::with_config(config).context("Failed to build HTTP client")?)
        };

        Ok(Self {
            base_url,
            repository,
        })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn list_view_model(&self) -> ListViewModel {
        ListViewModel::new(Arc::clone(&self.repository))
    }

    pub fn detail_view_model(&self, nim: Nim) -> DetailViewModel {
        DetailViewModel::new(Arc::clone(&self.repository), nim)
    }

    pub fn insert_view_model(&self) -> InsertViewModel {
        InsertViewModel::new(Arc::clone(&self.repository))
    }

    pub fn update_view_model(&self) -> UpdateViewModel {
        UpdateViewModel::new(Arc::clone(&self.repository))
    }
}
