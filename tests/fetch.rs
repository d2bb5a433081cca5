use ott_catalog::catalog::config::parse_endpoint;
use ott_catalog::catalog::{build_vocabulary, CatalogClient, CatalogConfig, CatalogError};
use ott_catalog::cli::SnapshotSource;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> CatalogClient {
    let endpoint = parse_endpoint(&format!("{}/movies", server.uri())).unwrap();
    CatalogClient::new(&CatalogConfig::new(endpoint)).unwrap()
}

#[tokio::test]
async fn fetches_record_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Movie A", "platform": "Netflix", "available_on": "Jan 10", "type": "Movie"},
            {"name": "Movie B", "platform": "Amazon Prime Video, Zee5", "imdb_rating": 7.1}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.endpoint().path(), "/movies");
    let records = client.fetch().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].imdb_rating.as_deref(), Some("7.1"));
    assert_eq!(
        build_vocabulary(&records),
        vec!["All", "Netflix", "Prime Video", "ZEE5"]
    );
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(503).set_body_string("waking up"))
        .mount(&server)
        .await;

    match client_for(&server).await.fetch().await {
        Err(CatalogError::Http { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "waking up");
        }
        other => panic!("expected http error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch().await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn remote_source_wraps_errors_with_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let endpoint = parse_endpoint(&format!("{}/movies", server.uri())).unwrap();
    let source = SnapshotSource::Remote(CatalogConfig::new(endpoint));
    let err = source.load().await.unwrap_err();
    assert!(err.to_string().contains("/movies"));
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::Http { status: 404, .. })
    ));
}
