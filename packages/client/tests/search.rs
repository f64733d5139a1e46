//! End-to-end tests for `SearchClient::search` against a mock places
//! service.

use places_search_address::{format_label, resolve_addresses};
use places_search_client::{ClientConfig, SearchClient, SearchError};
use places_search_places_models::{Credentials, SearchParameters};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY_PATH: &str = "/1/places/query";

fn client_for(server: &MockServer, credentials: Credentials) -> SearchClient {
    SearchClient::new(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_credentials(credentials),
    )
}

fn brickell_response() -> serde_json::Value {
    serde_json::json!({
        "hits": [
            {
                "country": { "default": "United States of America" },
                "is_country": false,
                "city": { "default": ["Miami"] },
                "is_highway": true,
                "is_city": false,
                "administrative": ["Florida"],
                "postcode": ["33131"],
                "country_code": "us",
                "_tags": ["highway", "country/us"],
                "locale_names": { "default": ["Brickell Avenue"] },
                "_geoloc": { "lat": 25.7617, "lng": -80.1918 },
                "objectID": "78123_4521"
            },
            {
                "is_city": true,
                "locale_names": { "default": ["Miami", "Miami City"] },
                "administrative": ["Florida"],
                "postcode": ["33101", "33102"],
                "country_code": "us"
            }
        ],
        "nbHits": 2,
        "processingTimeMS": 7,
        "query": "Brickell Avenue, Miami, Florida",
        "params": "query=Brickell%20Avenue%2C%20Miami%2C%20Florida&countries=us"
    })
}

#[tokio::test]
async fn decodes_result_set_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_json(serde_json::json!({
            "query": "Brickell Avenue, Miami, Florida",
            "countries": "us"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(brickell_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::default());
    let params = SearchParameters::new("Brickell Avenue, Miami, Florida").with_countries("us");
    let result = client.search(&params).await.unwrap();

    assert_eq!(result.nb_hits, 2);
    assert_eq!(result.processing_time_ms, 7);
    assert_eq!(result.query, "Brickell Avenue, Miami, Florida");
    assert_eq!(result.hits.len(), 2);
    assert_eq!(result.hits[0].object_id.as_deref(), Some("78123_4521"));

    let labels: Vec<String> = resolve_addresses(&result.hits)
        .iter()
        .map(format_label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "Brickell Avenue, Miami, Florida, 33131".to_string(),
            "Miami, Florida".to_string(),
        ]
    );
}

#[tokio::test]
async fn sends_configured_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(header("X-Algolia-Application-Id", "default-app"))
        .and(header("X-Algolia-API-Key", "default-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brickell_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::new("default-app", "default-key"));
    client.search(&SearchParameters::new("Miami")).await.unwrap();
}

#[tokio::test]
async fn per_call_credentials_take_precedence() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(header("X-Algolia-Application-Id", "default-app"))
        .and(header("X-Algolia-API-Key", "call-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brickell_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::new("default-app", "default-key"));
    let params = SearchParameters::new("Miami").with_credentials(Credentials {
        application_id: None,
        api_key: Some("call-key".to_string()),
    });
    client.search(&params).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].headers.get_all("x-algolia-api-key").iter().count(),
        1
    );
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, serde_json::json!({ "query": "Miami" }));
}

#[tokio::test]
async fn omits_auth_headers_without_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(brickell_response()))
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::default());
    client.search(&SearchParameters::new("")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-algolia-application-id").is_none());
    assert!(requests[0].headers.get("x-algolia-api-key").is_none());
}

#[tokio::test]
async fn surfaces_rejected_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "Invalid Application-ID or API key",
            "status": 403
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::new("bad-app", "bad-key"));
    let err = client
        .search(&SearchParameters::new("Miami"))
        .await
        .unwrap_err();

    match err {
        SearchError::Status { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Invalid Application-ID or API key");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn keeps_raw_body_for_unstructured_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::default());
    let err = client
        .search(&SearchParameters::new("Miami"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SearchError::Status { status: 502, ref message } if message == "Bad Gateway"
    ));
}

#[tokio::test]
async fn surfaces_malformed_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::default());
    let err = client
        .search(&SearchParameters::new("Miami"))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Decode(_)));
}

#[tokio::test]
async fn surfaces_unexpected_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::default());
    let err = client
        .search(&SearchParameters::new("Miami"))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let client = SearchClient::new(ClientConfig::default().with_base_url("http://127.0.0.1:1"));
    let err = client
        .search(&SearchParameters::new("Miami"))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Transport(_)));
}

#[tokio::test]
async fn null_hit_fields_do_not_fail_the_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "hits": [
                {
                    "is_city": null,
                    "suburb": null,
                    "postcode": ["33131"],
                    "locale_names": { "default": ["Brickell Avenue"] }
                },
                { "is_city": true, "locale_names": { "default": ["Miami"] } }
            ],
            "nbHits": 2
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Credentials::default());
    let result = client.search(&SearchParameters::new("Brickell")).await.unwrap();

    let labels: Vec<String> = resolve_addresses(&result.hits)
        .iter()
        .map(format_label)
        .collect();
    assert_eq!(
        labels,
        vec!["Brickell Avenue, 33131".to_string(), "Miami".to_string()]
    );
}
