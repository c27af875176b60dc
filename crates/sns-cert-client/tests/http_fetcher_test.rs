//! HTTP tests for `HttpCertificateFetcher` and a store backed by it.
//!
//! The mock server speaks plain HTTP on localhost. That is fine here: the
//! fetcher does not police schemes or hosts, the trust policy does.

use sns_cert_client::{
    CertificateClientConfig, CertificateError, CertificateFetcher, CertificateStore,
    HttpCertificateFetcher,
};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PEM: &str = include_str!("../../../testdata/signing-cert.pem");
const CERT_PATH: &str = "/SimpleNotificationService-f3ecfb7224c7233fe7bb5f59f96de52f.pem";

fn fetcher() -> HttpCertificateFetcher {
    HttpCertificateFetcher::new(&CertificateClientConfig { timeout_secs: 5 }).unwrap()
}

fn cert_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}{CERT_PATH}", server.uri())).unwrap()
}

// ── fetcher ──────────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_returns_body_on_200() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CERT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(PEM))
        .expect(1)
        .mount(&server)
        .await;

    let body = fetcher().fetch(&cert_url(&server)).await.unwrap();
    assert_eq!(body, PEM);
}

#[tokio::test]
async fn fetch_reports_non_200_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CERT_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such key"))
        .mount(&server)
        .await;

    let err = fetcher().fetch(&cert_url(&server)).await.unwrap_err();
    match err {
        CertificateError::Status { url, status } => {
            assert_eq!(status, 404);
            assert!(url.ends_with(CERT_PATH));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_treats_other_success_codes_as_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CERT_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = fetcher().fetch(&cert_url(&server)).await.unwrap_err();
    assert!(matches!(err, CertificateError::Status { status: 204, .. }));
}

#[tokio::test]
async fn fetch_reports_transport_failure() {
    // Port 9 (discard) on localhost is not listening in test environments.
    let url = Url::parse("http://127.0.0.1:9/cert.pem").unwrap();
    let err = fetcher().fetch(&url).await.unwrap_err();
    assert!(matches!(err, CertificateError::Http { .. }), "{err:?}");
}

// ── store over HTTP ──────────────────────────────────────────────────

#[tokio::test]
async fn store_hits_server_once_for_repeated_fetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CERT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(PEM))
        .expect(1)
        .mount(&server)
        .await;

    let store = CertificateStore::new(fetcher());
    let url = cert_url(&server);
    for _ in 0..3 {
        assert_eq!(&*store.fetch(&url).await.unwrap(), PEM);
    }
}

#[tokio::test]
async fn store_does_not_cache_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CERT_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let store = CertificateStore::new(fetcher());
    let url = cert_url(&server);
    assert!(store.fetch(&url).await.is_err());
    assert!(store.fetch(&url).await.is_err());
    assert!(store.is_empty());
}

#[tokio::test]
async fn pinned_certificate_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("unexpected"))
        .expect(0)
        .mount(&server)
        .await;

    let store = CertificateStore::new(fetcher());
    let url = cert_url(&server);
    store.insert(&url, PEM);
    assert_eq!(&*store.fetch(&url).await.unwrap(), PEM);
}
