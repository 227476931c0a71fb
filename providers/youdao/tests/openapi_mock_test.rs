//! Mock API tests for the `openapi.do` providers
//!
//! A wiremock server stands in for the vendor endpoint; instances are pointed
//! at it through `api_url`.

use std::time::Duration;

use serde_json::json;
use tongues_provider_youdao::{reddwarf, youdao};
use tongues_translator::{
    ProviderConfig, Query, TranslateError, TransportErrorKind, Translator,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ProviderConfig {
    ProviderConfig::new("1361128838", "chrome").with_api_url(format!("{}/openapi.do", server.uri()))
}

#[tokio::test]
async fn translate_sends_credentials_and_normalizes() {
    let server = MockServer::start().await;
    let body = json!({
        "errorCode": 0,
        "basic": { "phonetic": "tɛst", "explains": ["n. test", "v. examine"] },
        "translation": ["测试"]
    });

    Mock::given(method("GET"))
        .and(path("/openapi.do"))
        .and(query_param("key", "1361128838"))
        .and(query_param("keyfrom", "chrome"))
        .and(query_param("type", "data"))
        .and(query_param("doctype", "json"))
        .and(query_param("version", "1.1"))
        .and(query_param("q", "test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let translator = youdao::new(config(&server)).unwrap();
    let result = translator.translate(&Query::new("test")).await.unwrap();

    assert_eq!(result.text, "test");
    assert_eq!(result.response, body);
    assert_eq!(result.result, Some(vec!["测试".to_string()]));
    assert_eq!(result.phonetic.as_deref(), Some("tɛst"));
    assert_eq!(result.link_to_result, "http://fanyi.youdao.com/translate?i=test");
    assert!(result.error.is_none());
}

#[tokio::test]
async fn backend_error_code_resolves_with_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi.do"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "errorCode": 50 })))
        .mount(&server)
        .await;

    let translator = reddwarf::new(config(&server)).unwrap();
    let result = translator.translate(&Query::new("test")).await.unwrap();

    assert_eq!(result.error.as_deref(), Some("The API key has been banned"));
    assert!(result.result.is_none());
}

#[tokio::test]
async fn non_json_body_is_no_valid_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi.do"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let translator = youdao::new(config(&server)).unwrap();
    let result = translator.translate(&Query::new("test")).await.unwrap();

    assert_eq!(
        result.error.as_deref(),
        Some("YouDao Translate returned no valid result; retry later.")
    );
    assert!(result.response.is_null());
}

#[tokio::test]
async fn http_error_status_is_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi.do"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let translator = youdao::new(config(&server)).unwrap();
    match translator.translate(&Query::new("test")).await {
        Err(TranslateError::Transport(err)) => {
            assert_eq!(err.status, Some(500));
            assert_eq!(err.kind(), TransportErrorKind::Server);
        }
        other => panic!("Expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi.do"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "errorCode": 0, "translation": ["late"] }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let translator = youdao::new(config(&server).with_timeout_ms(50)).unwrap();
    match translator.translate(&Query::new("test")).await {
        Err(TranslateError::Transport(err)) => {
            assert_eq!(err.kind(), TransportErrorKind::Timeout);
        }
        other => panic!("Expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let config = ProviderConfig::new("key", "from").with_api_url("http://127.0.0.1:1/openapi.do");
    let translator = youdao::new(config).unwrap();

    match translator.translate(&Query::new("test")).await {
        Err(TranslateError::Transport(err)) => {
            assert!(err.status.is_none());
            assert_eq!(err.kind(), TransportErrorKind::Network);
        }
        other => panic!("Expected network error, got {:?}", other),
    }
}
