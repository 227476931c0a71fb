use std::sync::{Arc, Mutex};
use std::time::Duration;

use tongues_translator::{
    ConfigError, ProviderConfig, Query, Translator, TransportError, TransportErrorKind,
};

use super::scripted::{Behaviour, CallLog, Scripted};
use crate::{DispatchError, Operation, Output, ProviderRegistry, Tongues};

fn log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

fn calls(log: &CallLog) -> Vec<&'static str> {
    log.lock().unwrap().clone()
}

fn tongues_with(provider: &str, instances: Vec<Scripted>) -> Tongues {
    let tongues = Tongues::new(ProviderRegistry::new()).with_default_provider(provider);
    for instance in instances {
        tongues.register(provider, Arc::new(instance));
    }
    tongues
}

fn scripted_factory(
    config: ProviderConfig,
) -> Result<Arc<dyn Translator>, ConfigError> {
    config.key_pair("Scripted")?;
    Ok(Arc::new(Scripted::new("factory", &log())))
}

#[tokio::test]
async fn round_robin_visits_instances_in_order() {
    let log = log();
    let tongues = tongues_with(
        "Mock",
        vec![
            Scripted::new("A", &log),
            Scripted::new("B", &log),
            Scripted::new("C", &log),
        ],
    );

    let mut answered_by = Vec::new();
    for _ in 0..6 {
        let result = tongues.translate(&Query::new("hello")).await.unwrap();
        answered_by.push(result.api.metadata().name);
    }

    assert_eq!(calls(&log), vec!["A", "B", "C", "A", "B", "C"]);
    assert_eq!(answered_by, vec!["A", "B", "C", "A", "B", "C"]);
}

#[tokio::test]
async fn translate_is_stamped_with_the_instance_used() {
    let log = log();
    let tongues = Tongues::new(ProviderRegistry::new()).with_default_provider("Mock");
    let first: Arc<dyn Translator> = Arc::new(Scripted::new("A", &log));
    let second: Arc<dyn Translator> = Arc::new(Scripted::new("B", &log));
    tongues.register("Mock", Arc::clone(&first));
    tongues.register("Mock", Arc::clone(&second));

    let a = tongues.translate(&Query::new("hello")).await.unwrap();
    let b = tongues.translate(&Query::new("hello")).await.unwrap();

    assert!(Arc::ptr_eq(&a.api, &first));
    assert!(Arc::ptr_eq(&b.api, &second));
    assert_eq!(a.text, "hello");
    assert_eq!(a.result, Some(vec!["A".to_string()]));
}

#[tokio::test]
async fn concurrent_calls_rotate_before_awaiting() {
    let log = log();
    let tongues = tongues_with(
        "Mock",
        vec![
            Scripted::new("A", &log).delayed(Duration::from_millis(60)),
            Scripted::new("B", &log).delayed(Duration::from_millis(30)),
            Scripted::new("C", &log),
        ],
    );

    let query = Query::new("hello");
    let (a, b, c) = tokio::join!(
        tongues.translate(&query),
        tongues.translate(&query),
        tongues.translate(&query),
    );

    assert_eq!(calls(&log), vec!["A", "B", "C"]);
    assert_eq!(a.unwrap().api.metadata().name, "A");
    assert_eq!(b.unwrap().api.metadata().name, "B");
    assert_eq!(c.unwrap().api.metadata().name, "C");
}

#[tokio::test]
async fn query_api_overrides_default_provider() {
    let log = log();
    let tongues = tongues_with("Mock", vec![Scripted::new("default", &log)]);
    tongues.register("Other", Arc::new(Scripted::new("other", &log)));

    let result = tongues
        .translate(&Query::new("hello").with_api("Other"))
        .await
        .unwrap();
    assert_eq!(result.api.metadata().name, "other");

    tongues.set_default_provider("Other");
    tongues.translate(&Query::new("hello")).await.unwrap();

    assert_eq!(calls(&log), vec!["other", "other"]);
}

#[tokio::test]
async fn unregistered_provider_is_named_in_the_error() {
    let tongues = Tongues::new(ProviderRegistry::new());

    match tongues.translate(&Query::new("hello").with_api("Bing")).await {
        Err(DispatchError::NotRegistered(name)) => assert_eq!(name, "Bing"),
        other => panic!("Expected NotRegistered, got {:?}", other),
    }

    let err = tongues.detect(&Query::new("hello")).await.unwrap_err();
    assert!(err.to_string().contains(Tongues::DEFAULT_PROVIDER));
    assert!(!err.is_unsupported());
}

#[tokio::test]
async fn unsupported_passes_through_unchanged() {
    let log = log();
    let tongues = tongues_with("Mock", vec![Scripted::new("A", &log)]);

    let err = tongues
        .detect(&Query::new("hello").with_from("xx-unsupported"))
        .await
        .unwrap_err();
    assert!(err.is_unsupported());

    let err = tongues.audio(&Query::new("hello")).await.unwrap_err();
    assert!(err.is_unsupported());
}

#[tokio::test]
async fn detect_echoes_supported_language() {
    let log = log();
    let tongues = tongues_with("Mock", vec![Scripted::new("A", &log)]);

    let lang = tongues
        .detect(&Query::new("こんにちは").with_from("en"))
        .await
        .unwrap();
    assert_eq!(lang, "en");
}

#[tokio::test]
async fn transport_failures_are_classified() {
    let log = log();
    let cases = [
        (TransportError::timed_out("deadline"), TransportErrorKind::Timeout),
        (TransportError::network("refused"), TransportErrorKind::Network),
        (TransportError::server(503, "unavailable"), TransportErrorKind::Server),
    ];

    for (failure, expected) in cases {
        let tongues = tongues_with(
            "Mock",
            vec![Scripted::new("A", &log).behaving(Behaviour::Fail(failure.clone()))],
        );

        match tongues.translate(&Query::new("hello")).await {
            Err(DispatchError::Transport { kind, source }) => {
                assert_eq!(kind, expected);
                assert_eq!(source, failure);
            }
            other => panic!("Expected transport error, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn backend_error_resolves_successfully() {
    let log = log();
    let tongues = tongues_with(
        "Mock",
        vec![Scripted::new("A", &log).behaving(Behaviour::BackendError("text too long"))],
    );

    let result = tongues.translate(&Query::new("hello")).await.unwrap();
    assert_eq!(result.error.as_deref(), Some("text too long"));
    assert!(result.result.is_none());
}

#[tokio::test]
async fn call_dispatches_by_operation() {
    let log = log();
    let tongues = tongues_with("Mock", vec![Scripted::new("A", &log)]);
    let query = Query::new("hello").with_from("ja");

    assert!(matches!(
        tongues.call(Operation::Translate, &query).await,
        Ok(Output::Translation(_))
    ));
    match tongues.call(Operation::Detect, &query).await {
        Ok(Output::Language(lang)) => assert_eq!(lang, "ja"),
        other => panic!("Expected language, got {:?}", other),
    }
    match tongues.call(Operation::Audio, &query).await {
        Ok(Output::Audio(url)) => assert_eq!(url, "https://A.example.com/tts?lang=JA&text=hello"),
        other => panic!("Expected audio url, got {:?}", other),
    }
}

#[test]
fn create_builds_through_the_registry() {
    let tongues = Tongues::new(ProviderRegistry::new().with("Scripted", scripted_factory));

    let instance = tongues
        .create("Scripted", ProviderConfig::new("key", "from"))
        .unwrap();
    assert_eq!(instance.metadata().name, "factory");
    assert_eq!(tongues.pool().len("Scripted"), 1);

    tongues
        .create("Scripted", ProviderConfig::new("key2", "from2"))
        .unwrap();
    assert_eq!(tongues.pool().len("Scripted"), 2);
}

#[test]
fn create_fails_synchronously_on_bad_config() {
    let tongues = Tongues::new(ProviderRegistry::new().with("Scripted", scripted_factory));

    assert!(matches!(
        tongues.create("Scripted", ProviderConfig::default()),
        Err(ConfigError::MissingCredential { .. })
    ));
    assert!(matches!(
        tongues.create("Bing", ProviderConfig::new("key", "from")),
        Err(ConfigError::UnknownProvider(name)) if name == "Bing"
    ));
    assert_eq!(tongues.pool().len("Scripted"), 0);
}

#[test]
fn pool_rotation_wraps_around() {
    let log = log();
    let tongues = tongues_with(
        "Mock",
        vec![Scripted::new("A", &log), Scripted::new("B", &log)],
    );

    let names: Vec<String> = (0..5)
        .filter_map(|_| tongues.pool().next("Mock"))
        .map(|t| t.metadata().name)
        .collect();
    assert_eq!(names, vec!["A", "B", "A", "B", "A"]);
    assert!(tongues.pool().next("Missing").is_none());
    assert_eq!(tongues.pool().len("Mock"), 2);
    assert_eq!(tongues.pool().len("Missing"), 0);
}

#[test]
fn registry_lists_providers_sorted() {
    let tongues = Tongues::new(
        ProviderRegistry::new()
            .with("Scripted", scripted_factory)
            .with("Alpha", scripted_factory),
    );

    assert_eq!(tongues.registry().providers(), vec!["Alpha", "Scripted"]);
    assert_eq!(tongues.pool().len("Alpha"), 0);
}
