//! Mock backend tests for the REST repository.
//!
//! These tests use wiremock to simulate the records backend and check the
//! request shapes and the status-to-error mapping without network access.

use std::time::Duration;

use mahasiswa_core::{BaseUrl, Error, Mahasiswa, MahasiswaRepository, Nim};
use mahasiswa_http::{ClientConfig, HttpRepository};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a repository pointed at a mock server.
fn repository(server: &MockServer) -> HttpRepository {
    let base = BaseUrl::new(format!("{}/umyTI/", server.uri())).unwrap();
    HttpRepository::new(base).unwrap()
}

fn nim(s: &str) -> Nim {
    Nim::new(s).unwrap()
}

fn alice() -> Mahasiswa {
    Mahasiswa {
        nim: nim("2021001"),
        name: "Alice".to_string(),
        address: "Jl. A".to_string(),
        gender: "F".to_string(),
        class: "TI-1".to_string(),
        year: "2021".to_string(),
    }
}

fn alice_json() -> serde_json::Value {
    json!({
        "nim": "2021001",
        "nama": "Alice",
        "alamat": "Jl. A",
        "jenisKelamin": "F",
        "kelas": "TI-1",
        "angkatan": "2021"
    })
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_list_records_preserves_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "nim": "2021002", "nama": "Budi", "alamat": "Jl. C",
                "jenisKelamin": "M", "kelas": "TI-2", "angkatan": "2021"
            },
            alice_json()
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = repository(&server).list_records().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].nim.as_str(), "2021002");
    assert_eq!(records[1], alice());
}

#[tokio::test]
async fn test_list_records_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let records = repository(&server).list_records().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_list_records_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let err = repository(&server).list_records().await.unwrap_err();
    assert!(matches!(err, Error::Protocol(_)), "got {err:?}");
}

#[tokio::test]
async fn test_get_record_ignores_unknown_fields() {
    let server = MockServer::start().await;

    let mut body = alice_json();
    body["id"] = json!(42);
    body["updated_at"] = json!("2024-01-01");

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa/2021001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let record = repository(&server)
        .get_record(&nim("2021001"))
        .await
        .unwrap();
    assert_eq!(record, alice());
}

#[tokio::test]
async fn test_get_record_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa/9999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Data tidak ditemukan"
        })))
        .mount(&server)
        .await;

    let err = repository(&server)
        .get_record(&nim("9999999"))
        .await
        .unwrap_err();

    match err {
        Error::NotFound { nim } => assert_eq!(nim, "9999999"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_record_encodes_nim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa/TI%2F001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nim": "TI/001", "nama": "Citra", "alamat": "Jl. D",
            "jenisKelamin": "F", "kelas": "TI-3", "angkatan": "2022"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = repository(&server)
        .get_record(&nim("TI/001"))
        .await
        .unwrap();
    assert_eq!(record.name, "Citra");
}

#[tokio::test]
async fn test_backend_nims_are_kept_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            alice_json(),
            {
                "nim": "", "nama": "Tanpa NIM", "alamat": "Jl. E",
                "jenisKelamin": "M", "kelas": "TI-1", "angkatan": "2020"
            },
            {
                "nim": " 2021003", "nama": "Dewi", "alamat": "Jl. F",
                "jenisKelamin": "F", "kelas": "TI-2", "angkatan": "2021"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa/%202021003"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nim": " 2021003", "nama": "Dewi", "alamat": "Jl. F",
            "jenisKelamin": "F", "kelas": "TI-2", "angkatan": "2021"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = repository(&server);
    let records = repo.list_records().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].nim.as_str(), "");
    assert_eq!(records[2].nim.as_str(), " 2021003");

    let record = repo.get_record(&records[2].nim).await.unwrap();
    assert_eq!(record, records[2]);
}

#[tokio::test]
async fn test_server_error_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa/2021001"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let err = repository(&server)
        .get_record(&nim("2021001"))
        .await
        .unwrap_err();

    match err {
        Error::Protocol(e) => {
            assert_eq!(e.status, Some(500));
            assert_eq!(e.message, "database unavailable");
        }
        other => panic!("expected Protocol, got {other:?}"),
    }
}

// ============================================================================
// Write Tests
// ============================================================================

#[tokio::test]
async fn test_create_record_posts_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/umyTI/mahasiswa"))
        .and(body_json(alice_json()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server).create_record(&alice()).await.unwrap();
}

#[tokio::test]
async fn test_create_record_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/umyTI/mahasiswa"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": "nim already registered"
        })))
        .mount(&server)
        .await;

    let err = repository(&server).create_record(&alice()).await.unwrap_err();

    match err {
        Error::Validation(e) => {
            assert_eq!(e.status, Some(422));
            assert_eq!(e.message.as_deref(), Some("nim already registered"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_server_error_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/umyTI/mahasiswa"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = repository(&server).create_record(&alice()).await.unwrap_err();

    match err {
        Error::Protocol(e) => assert_eq!(e.status, Some(503)),
        other => panic!("expected Protocol, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_record_puts_json() {
    let server = MockServer::start().await;

    let mut edited = alice();
    edited.address = "Jl. B".to_string();

    let mut expected = alice_json();
    expected["alamat"] = json!("Jl. B");

    Mock::given(method("PUT"))
        .and(path("/umyTI/mahasiswa/2021001"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server)
        .update_record(&nim("2021001"), &edited)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_record_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/umyTI/mahasiswa/2021001"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = repository(&server)
        .update_record(&nim("2021001"), &alice())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_record() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/umyTI/mahasiswa/2021001"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server)
        .delete_record(&nim("2021001"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_record_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/umyTI/mahasiswa/2021001"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = repository(&server)
        .delete_record(&nim("2021001"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================================
// Transport Tests
// ============================================================================

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Grab a free port and release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let base = BaseUrl::new(format!("http://127.0.0.1:{port}/umyTI")).unwrap();

    let repo = HttpRepository::new(base).unwrap();
    let err = repo.list_records().await.unwrap_err();
    assert!(err.is_network(), "got {err:?}");
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/umyTI/mahasiswa"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let base = BaseUrl::new(format!("{}/umyTI", server.uri())).unwrap();
    let repo =
        HttpRepository::with_config(ClientConfig::new(base).with_timeout(Duration::from_millis(100)))
            .unwrap();

    let err = repo.list_records().await.unwrap_err();
    assert!(err.is_network(), "got {err:?}");
}
