//! REST-backed repository implementation.

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};

use mahasiswa_core::repo::Mahasiswa;
use mahasiswa_core::traits::MahasiswaRepository;
use mahasiswa_core::types::{BaseUrl, Nim};
use mahasiswa_core::Result;

use crate::client::RestClient;
use crate::config::ClientConfig;

/// A network-backed repository talking to the REST backend.
///
/// Stateless apart from the shared HTTP client; clone it freely.
#[derive(Debug, Clone)]
pub struct HttpRepository {
    client: RestClient,
}

impl HttpRepository {
    /// Create a repository with default client settings.
    pub fn new(base_url: BaseUrl) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Create a repository from explicit client settings.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(config)?,
        })
    }
}

#[async_trait]
impl MahasiswaRepository for HttpRepository {
    #[instrument(skip(self))]
    async fn list_records(&self) -> Result<Vec<Mahasiswa>> {
        debug!("Listing mahasiswa");
        let url = self.client.base_url().collection_url();
        let records: Vec<Mahasiswa> = self.client.get(url, None).await?;
        debug!(count = records.len(), "Listed mahasiswa");
        Ok(records)
    }

    #[instrument(skip(self), fields(nim = %nim))]
    async fn get_record(&self, nim: &Nim) -> Result<Mahasiswa> {
        debug!("Getting mahasiswa");
        let url = self.client.base_url().record_url(nim);
        self.client.get(url, Some(nim)).await
    }

    #[instrument(skip(self, record), fields(nim = %record.nim))]
    async fn create_record(&self, record: &Mahasiswa) -> Result<()> {
        debug!("Creating mahasiswa");
        let url = self.client.base_url().collection_url();
        // No nim context: a 404 on the collection is a protocol fault.
        self.client.send_json(Method::POST, url, record, None).await
    }

    #[instrument(skip(self, record), fields(nim = %nim))]
    async fn update_record(&self, nim: &Nim, record: &Mahasiswa) -> Result<()> {
        debug!("Updating mahasiswa");
        let url = self.client.base_url().record_url(nim);
        self.client.send_json(Method::PUT, url, record, Some(nim)).await
    }

    #[instrument(skip(self), fields(nim = %nim))]
    async fn delete_record(&self, nim: &Nim) -> Result<()> {
        debug!("Deleting mahasiswa");
        let url = self.client.base_url().record_url(nim);
        self.client.delete(url, Some(nim)).await
    }
}
