//! Integration tests for the Nova client against a mocked backend
//!
//! **Coverage:**
//! - Case search end to end: token exchange → search request → mapped cases
//! - Document list and file download (raw body passthrough)
//! - Upload → attach flow: the attach body references the uploaded id
//!
//! **Infrastructure:**
//! - WireMock HTTP server standing in for both the Nova API and the auth
//!   realm; no real network access is required.

use std::io::Write;

use nova_client::{CaseSearchQuery, DownloadOptions, NovaClient, NovaDocument};
use nova_domain::{NovaConfig, NovaCredentials};
use wiremock::matchers::{body_partial_json, header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn connect(server: &MockServer) -> NovaClient {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test-token",
            "expires_in": 3600
        })))
        .mount(server)
        .await;

    let config = NovaConfig {
        api_base_url: server.uri(),
        auth_token_url: format!("{}/token", server.uri()),
        timeout_secs: 5,
        ..NovaConfig::default()
    };
    NovaClient::connect(config, NovaCredentials::new("test-client", "test-secret"))
        .await
        .expect("connect")
}

#[tokio::test]
async fn case_search_returns_mapped_cases() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/Case/GetList"))
        .and(query_param("api-version", "1.0-Case"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_partial_json(serde_json::json!({
            "caseAttributes": { "userFriendlyCaseNumber": "S2023-61078" },
            "paging": { "startRow": 1, "numberOfRows": 100 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cases": [{
                "common": { "uuid": "6ff598fc-b8a0-4567-9f2a-e52ff6c2b1ac" },
                "caseAttributes": {
                    "title": "Anmodning om flytning",
                    "userFriendlyCaseNumber": "S2023-61078",
                    "caseDate": "2023-05-01T00:00:00Z"
                },
                "state": { "activeCode": "Aktiv", "progressState": "Behandles" },
                "caseParties": [{
                    "identificationType": "CprNummer",
                    "identification": "0101011234",
                    "partyRole": "Primær"
                }]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let query =
        CaseSearchQuery { case_number: Some("S2023-61078".to_string()), ..Default::default() };
    let cases = client.get_cases(&query).await.expect("case search");

    assert!(!cases.is_empty());
    assert_eq!(cases[0].case_number, "S2023-61078");
    assert_eq!(cases[0].case_parties.len(), 1);
    assert_eq!(cases[0].case_parties[0].name, None);
}

#[tokio::test]
async fn document_list_returns_metadata_only() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/Document/GetList"))
        .and(body_partial_json(
            serde_json::json!({ "caseUuid": "6ff598fc-b8a0-4567-9f2a-e52ff6c2b1ac" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documents": [{
                "documentUuid": "0b8b9c55-2c2a-4c4e-9191-2e8c86f3e829",
                "title": "Afgørelse",
                "sensitivity": "Fortrolige",
                "documentType": "Udgående",
                "description": "Svar til borger",
                "approved": true,
                "documentDate": "2023-06-01",
                "fileExtension": "pdf"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let documents =
        client.get_documents("6ff598fc-b8a0-4567-9f2a-e52ff6c2b1ac").await.expect("documents");

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].uuid, "0b8b9c55-2c2a-4c4e-9191-2e8c86f3e829");
    assert_eq!(documents[0].description.as_deref(), Some("Svar til borger"));
}

#[tokio::test]
async fn download_returns_exact_body_bytes() {
    let server = MockServer::start().await;
    let file_body = vec![0x42u8; 1234];

    Mock::given(method("PUT"))
        .and(path("/api/Document/GetFile"))
        .and(body_partial_json(serde_json::json!({
            "common": { "uuid": "0b8b9c55-2c2a-4c4e-9191-2e8c86f3e829" },
            "checkOutDocument": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(file_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let bytes = client
        .download_document_file(
            "0b8b9c55-2c2a-4c4e-9191-2e8c86f3e829",
            &DownloadOptions::default(),
        )
        .await
        .expect("download");

    assert_eq!(bytes.len(), 1234);
    assert_eq!(bytes, file_body);
}

#[tokio::test]
async fn checkout_download_signals_exclusive_edit() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/Document/GetFile"))
        .and(body_partial_json(serde_json::json!({
            "checkOutDocument": true,
            "checkOutComment": "rettelse af afgørelse"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let options = DownloadOptions {
        checkout: true,
        checkout_comment: Some("rettelse af afgørelse".to_string()),
    };
    let bytes = client
        .download_document_file("0b8b9c55-2c2a-4c4e-9191-2e8c86f3e829", &options)
        .await
        .expect("download");

    assert_eq!(&bytes, b"%PDF-1.7");
}

#[tokio::test]
async fn upload_then_attach_references_the_uploaded_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(
            r"^/api/Document/UploadFile/[0-9a-f-]{36}/[0-9a-f-]{36}$",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;

    let mut file = tempfile::NamedTempFile::with_suffix(".txt").expect("temp file");
    file.write_all(b"kvittering for flytning").expect("write");

    let document_id = client.upload_document(file.path()).await.expect("upload");

    // The attach request must carry exactly the id the upload returned
    Mock::given(method("POST"))
        .and(path("/api/Document/Import"))
        .and(body_partial_json(serde_json::json!({
            "common": { "uuid": document_id },
            "caseUuid": "6ff598fc-b8a0-4567-9f2a-e52ff6c2b1ac",
            "accessToDocuments": true,
            "securityUnit": { "losIdentity": { "administrativeUnitId": 818485 } }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let document = NovaDocument {
        uuid: document_id.clone(),
        title: "Kvittering".to_string(),
        sensitivity: "Fortrolige".to_string(),
        document_type: "Indgående".to_string(),
        description: None,
        approved: true,
        document_date: "2023-06-01".to_string(),
        file_extension: "txt".to_string(),
    };
    client
        .attach_document_to_case("6ff598fc-b8a0-4567-9f2a-e52ff6c2b1ac", &document)
        .await
        .expect("attach");

    let attach_requests: Vec<_> = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path() == "/api/Document/Import")
        .collect();
    assert_eq!(attach_requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&attach_requests[0].body).unwrap();
    assert_eq!(body["common"]["uuid"], document_id.as_str());
}
