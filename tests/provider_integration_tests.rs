use firmdex::api::{Company, DirectoryProvider, FetchError, HttpDirectoryProvider};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// The payload shape the directory endpoint serves.
fn directory_payload() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Acme",
            "industry": "Tech",
            "location": "NY",
            "employees": 120,
            "founded": 2001,
            "description": "Widgets at scale",
            "website": "https://acme.example"
        },
        {
            "id": 2,
            "name": "Beta",
            "industry": "Retail",
            "location": "LA",
            "employees": 40,
            "founded": 1999
        }
    ])
}

// ============================================================================
// HTTP Provider Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_parses_full_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_payload()))
        .mount(&mock_server)
        .await;

    let provider = HttpDirectoryProvider::new(Some(mock_server.uri()));
    let companies = provider.fetch_companies().await.unwrap();

    assert_eq!(companies.len(), 2);
    assert_eq!(companies[0].name, "Acme");
    assert_eq!(companies[0].website.as_deref(), Some("https://acme.example"));
    // Optional fields absent in the payload come back as None
    assert_eq!(companies[1].name, "Beta");
    assert!(companies[1].description.is_none());
}

#[tokio::test]
async fn test_fetch_empty_collection_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let provider = HttpDirectoryProvider::new(Some(mock_server.uri()));
    let companies = provider.fetch_companies().await.unwrap();
    assert!(companies.is_empty());
}

#[tokio::test]
async fn test_fetch_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let provider = HttpDirectoryProvider::new(Some(mock_server.uri()));
    let result = provider.fetch_companies().await;

    assert!(matches!(result, Err(FetchError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_fetch_malformed_payload_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    // An object where an array of companies is expected: contract violation
    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"companies": []})))
        .mount(&mock_server)
        .await;

    let provider = HttpDirectoryProvider::new(Some(mock_server.uri()));
    let result = provider.fetch_companies().await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_connection_failure_is_a_network_error() {
    // Nothing listens on this port
    let provider = HttpDirectoryProvider::new(Some("http://127.0.0.1:9".to_string()));
    let result = provider.fetch_companies().await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn test_fetch_errors_render_human_readable_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let provider = HttpDirectoryProvider::new(Some(mock_server.uri()));
    let message = provider.fetch_companies().await.unwrap_err().to_string();

    // The message is what lands in FetchStatus::Error and the status bar
    assert!(message.contains("503"));
    assert!(message.contains("maintenance"));
}

#[tokio::test]
async fn test_fetch_sends_no_query_parameters() {
    let mock_server = MockServer::start().await;

    // Filtering is client-side: the request must be a bare GET /companies
    Mock::given(method("GET"))
        .and(path("/companies"))
        .and(wiremock::matchers::query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = HttpDirectoryProvider::new(Some(mock_server.uri()));
    let companies: Vec<Company> = provider.fetch_companies().await.unwrap();
    assert_eq!(companies.len(), 2);
}
