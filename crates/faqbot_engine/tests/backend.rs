use std::net::TcpListener;

use faqbot_engine::{
    Backend, BackendSettings, FailureKind, ReqwestBackend, UploadFile, INGEST_JURISDICTION,
    INGEST_POLICY_NAME, INGEST_VERSION,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    ReqwestBackend::new(BackendSettings::with_base_url(server.uri())).expect("client")
}

/// Base URL of a local port that was just released, so connections are refused.
fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn unreachable_backend() -> ReqwestBackend {
    ReqwestBackend::new(BackendSettings::with_base_url(refused_base_url())).expect("client")
}

#[tokio::test]
async fn health_maps_status_to_reachability() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "healthy"
        })))
        .mount(&server)
        .await;
    assert!(backend_for(&server).health().await);

    let failing = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&failing)
        .await;
    assert!(!backend_for(&failing).health().await);
}

#[tokio::test]
async fn health_is_false_on_transport_error() {
    assert!(!unreachable_backend().health().await);
}

#[tokio::test]
async fn query_posts_question_and_decodes_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/query"))
        .and(body_json(serde_json::json!({ "question": "What is AML?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "AML is...",
            "sources": [{ "source": "Policy A" }, { "document_name": "kyc.pdf" }],
            "escalate": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = backend_for(&server)
        .query("What is AML?")
        .await
        .expect("query ok");
    let (answer, sources) = reply.into_parts();
    assert_eq!(answer, "AML is...");
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].source.as_deref(), Some("Policy A"));
    assert_eq!(sources[1].document_name.as_deref(), Some("kyc.pdf"));
}

#[tokio::test]
async fn query_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/query"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "Failed to process query: boom"
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server).query("KYC?").await.unwrap_err();
    assert!(err.is_application_error());
    assert_eq!(
        err.kind,
        FailureKind::HttpStatus {
            status: 500,
            detail: Some("Failed to process query: boom".to_string())
        }
    );
}

#[tokio::test]
async fn query_reports_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = backend_for(&server).query("q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn query_transport_error_is_not_application_error() {
    let err = unreachable_backend().query("q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert!(!err.is_application_error());
}

#[tokio::test]
async fn ingest_transport_error_is_not_application_error() {
    let err = unreachable_backend()
        .ingest(vec![UploadFile::new("a.pdf", b"a".to_vec())])
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn ingest_sends_every_file_and_fixed_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ingest"))
        .and(header_exists("content-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Successfully processed 3 document(s)",
            "documents_processed": 3,
            "chunks_created": 12
        })))
        .expect(1)
        .mount(&server)
        .await;

    let files = vec![
        UploadFile::new("fileA.pdf", b"%PDF-a".to_vec()),
        UploadFile::new("fileB.pdf", b"%PDF-b".to_vec()),
        UploadFile::new("notes.docx", b"docx".to_vec()),
    ];
    let receipt = backend_for(&server).ingest(files).await.expect("ingest ok");
    assert_eq!(receipt.documents_processed, 3);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body).into_owned();
    assert_eq!(body.matches("name=\"files\"").count(), 3);
    assert!(body.contains("filename=\"fileA.pdf\""));
    assert!(body.contains("filename=\"notes.docx\""));
    for (field, value) in [
        ("policy_name", INGEST_POLICY_NAME),
        ("jurisdiction", INGEST_JURISDICTION),
        ("version", INGEST_VERSION),
    ] {
        assert_eq!(body.matches(&format!("name=\"{field}\"")).count(), 1);
        assert!(body.contains(value));
    }
}

#[tokio::test]
async fn ingest_failure_carries_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ingest"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "No documents could be parsed. Errors: []"
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .ingest(vec![UploadFile::new("empty.pdf", Vec::new())])
        .await
        .unwrap_err();
    assert_eq!(err.detail(), Some("No documents could be parsed. Errors: []"));
}

#[tokio::test]
async fn ingest_failure_without_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ingest"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .ingest(vec![UploadFile::new("a.pdf", b"a".to_vec())])
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::HttpStatus {
            status: 502,
            detail: None
        }
    );
}
