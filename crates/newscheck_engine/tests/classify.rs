use std::time::Duration;

use newscheck_engine::{
    ClassifySettings, Classifier, FailureKind, FeatureSet, HealthStatus, Label, PredictionRequest,
    ReqwestClassifier,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> ClassifySettings {
    ClassifySettings::new(Url::parse(&server.uri()).expect("mock server url"))
}

fn article() -> PredictionRequest {
    PredictionRequest {
        title: "SHOCKING cure found".to_string(),
        text: "  Doctors hate this one weird trick.  ".to_string(),
        source: "buzz.example".to_string(),
    }
}

#[tokio::test]
async fn posts_draft_and_decodes_prediction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "title": "SHOCKING cure found",
            "text": "  Doctors hate this one weird trick.  ",
            "source": "buzz.example"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "label": "Fake",
            "probability": 0.873,
            "confidence": "High",
            "explanation": "This article has been classified as FAKE NEWS with 87.3% confidence.",
            "features": {
                "title_length": 19,
                "text_length": 38,
                "word_count": 7,
                "source": "buzz.example",
                "has_sensational_title": true,
                "title_has_caps": false
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(settings(&server));
    let response = classifier.classify(&article()).await.expect("prediction");

    assert_eq!(response.label, Label::Fake);
    assert_eq!(response.probability, 0.873);
    assert_eq!(response.confidence, "High");
    assert_eq!(
        response.features,
        Some(FeatureSet {
            title_length: 19,
            word_count: 7,
            text_length: 38,
            source: "buzz.example".to_string(),
            has_sensational_title: true,
            title_has_caps: false,
        })
    );
}

#[tokio::test]
async fn features_are_optional() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "label": "Real",
            "probability": 0.5,
            "confidence": "Low",
            "explanation": "Borderline."
        })))
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(settings(&server));
    let response = classifier.classify(&article()).await.expect("prediction");

    assert_eq!(response.label, Label::Real);
    assert_eq!(response.features, None);
}

#[tokio::test]
async fn error_status_carries_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Text too short" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(settings(&server));
    let err = classifier.classify(&article()).await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::HttpStatus {
            status: 400,
            detail: Some("Text too short".to_string())
        }
    );
    assert_eq!(err.message, "Text too short");
    assert!(err.is_service_error());
}

#[tokio::test]
async fn error_status_without_detail_has_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(settings(&server));
    let err = classifier.classify(&article()).await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::HttpStatus {
            status: 500,
            detail: None
        }
    );
}

#[tokio::test]
async fn unknown_label_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "label": "Satire",
            "probability": 0.7,
            "confidence": "Medium",
            "explanation": "?"
        })))
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(settings(&server));
    let err = classifier.classify(&article()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
    assert!(!err.is_service_error());
}

#[tokio::test]
async fn non_json_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(settings(&server));
    let err = classifier.classify(&article()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let settings = ClassifySettings {
        request_timeout: Duration::from_millis(50),
        ..settings(&server)
    };
    let classifier = ReqwestClassifier::new(settings);

    let err = classifier.classify(&article()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64)))
        .mount(&server)
        .await;

    let settings = ClassifySettings {
        max_bytes: 16,
        ..settings(&server)
    };
    let classifier = ReqwestClassifier::new(settings);

    let err = classifier.classify(&article()).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 16,
            actual: Some(64)
        }
    );
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    // Nothing listens on port 1.
    let settings = ClassifySettings::new(Url::parse("http://127.0.0.1:1").unwrap());
    let classifier = ReqwestClassifier::new(settings);

    let err = classifier.classify(&article()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn health_reports_model_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "model_status": "loaded"
        })))
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(settings(&server));
    let health = classifier.health().await.expect("health");

    assert_eq!(
        health,
        HealthStatus {
            status: "healthy".to_string(),
            model_status: "loaded".to_string()
        }
    );
}
