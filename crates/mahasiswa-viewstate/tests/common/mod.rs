//! Shared fixtures for view-model tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use mahasiswa_core::error::{Error, NetworkError, ValidationError};
use mahasiswa_core::{Mahasiswa, MahasiswaRepository, Nim, Result};

/// A repository call as observed by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(String),
    Create(Mahasiswa),
    Update(String, Mahasiswa),
    Delete(String),
}

/// Which operation a scripted failure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// In-memory repository with scripted failures and per-NIM latency.
#[derive(Default)]
pub struct FakeRepository {
    records: Mutex<Vec<Mahasiswa>>,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<HashMap<Op, fn() -> Error>>,
    delays: Mutex<HashMap<String, Duration>>,
}

impl FakeRepository {
    pub fn with_records(records: Vec<Mahasiswa>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
            ..Self::default()
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::with_records(Vec::new())
    }

    /// Make every call of `op` fail with the error `make` builds.
    pub fn fail(&self, op: Op, make: fn() -> Error) {
        self.failures.lock().unwrap().insert(op, make);
    }

    pub fn heal(&self, op: Op) {
        self.failures.lock().unwrap().remove(&op);
    }

    /// Delay reads of `nim` by `delay`.
    pub fn delay(&self, nim: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(nim.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn records(&self) -> Vec<Mahasiswa> {
        self.records.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, op: Op) -> Result<()> {
        match self.failures.lock().unwrap().get(&op) {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }

    async fn latency(&self, nim: &str) {
        let delay = self.delays.lock().unwrap().get(nim).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl MahasiswaRepository for FakeRepository {
    async fn list_records(&self) -> Result<Vec<Mahasiswa>> {
        self.record(Call::List);
        self.check(Op::List)?;
        Ok(self.records())
    }

    async fn get_record(&self, nim: &Nim) -> Result<Mahasiswa> {
        self.record(Call::Get(nim.to_string()));
        self.latency(nim.as_str()).await;
        self.check(Op::Get)?;
        self.records()
            .into_iter()
            .find(|r| &r.nim == nim)
            .ok_or_else(|| Error::not_found(nim))
    }

    async fn create_record(&self, record: &Mahasiswa) -> Result<()> {
        self.record(Call::Create(record.clone()));
        self.check(Op::Create)?;
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.nim == record.nim) {
            return Err(ValidationError::new(Some(409), Some("duplicate nim".into())).into());
        }
        records.push(record.clone());
        Ok(())
    }

    async fn update_record(&self, nim: &Nim, record: &Mahasiswa) -> Result<()> {
        self.record(Call::Update(nim.to_string(), record.clone()));
        self.check(Op::Update)?;
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| &r.nim == nim)
            .ok_or_else(|| Error::not_found(nim))?;
        *slot = record.clone();
        Ok(())
    }

    async fn delete_record(&self, nim: &Nim) -> Result<()> {
        self.record(Call::Delete(nim.to_string()));
        self.check(Op::Delete)?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| &r.nim != nim);
        if records.len() == before {
            return Err(Error::not_found(nim));
        }
        Ok(())
    }
}

pub fn network_down() -> Error {
    Error::Network(NetworkError::Connection {
        message: "connection refused".to_string(),
    })
}

pub fn nim(s: &str) -> Nim {
    Nim::new(s).unwrap()
}

pub fn student(nim_str: &str, name: &str) -> Mahasiswa {
    Mahasiswa {
        nim: nim(nim_str),
        name: name.to_string(),
        address: format!("Jl. {}", name),
        gender: "F".to_string(),
        class: "TI-1".to_string(),
        year: "2021".to_string(),
    }
}

pub fn alice() -> Mahasiswa {
    Mahasiswa {
        nim: nim("2021001"),
        name: "Alice".to_string(),
        address: "Jl. A".to_string(),
        gender: "F".to_string(),
        class: "TI-1".to_string(),
        year: "2021".to_string(),
    }
}
