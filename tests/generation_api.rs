use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use speech_copilot::domain::wizard::{
    Audience, Command, FieldValue, Language, Occasion, SpeechLength, Step, Template, Tone,
};
use speech_copilot::error::GenerationError;
use speech_copilot::{GenerationClient, WizardSession};
use std::sync::{Arc, Mutex};

/// Bind a mock generation service on an ephemeral port and return its base URL
async fn spawn_service(router: Router) -> String {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "speech_copilot=debug".into()),
        )
        .try_init();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of an address nothing is listening on
async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn session_at_review() -> WizardSession {
    let mut session = WizardSession::new();
    session.apply(Command::Set(FieldValue::Occasion(Some(
        Occasion::PolicyAnnouncement,
    ))));
    session.apply(Command::Set(FieldValue::Audience(Some(
        Audience::GovernmentOfficials,
    ))));
    session.apply(Command::Advance);
    session.apply(Command::Set(FieldValue::Tone(Tone::Formal)));
    session.apply(Command::Advance);
    session.apply(Command::Set(FieldValue::Template(Some(
        Template::PolicyAnnouncement,
    ))));
    session.apply(Command::Advance);
    assert_eq!(session.step(), Step::Review);
    session
}

#[tokio::test]
async fn it_should_return_health_status_from_the_service() {
    let app = Router::new().route(
        "/health",
        get(|| async { Json(json!({"status": "healthy", "claude_api": "connected"})) }),
    );
    let base_url = spawn_service(app).await;
    let client = GenerationClient::new(base_url);

    let status = client.check_health().await.unwrap();

    assert_eq!(
        status.0.get("status").and_then(|v| v.as_str()),
        Some("healthy")
    );
}

#[tokio::test]
async fn it_should_fail_health_check_with_protocol_error_on_non_json_body() {
    let app = Router::new().route("/health", get(|| async { "OK" }));
    let base_url = spawn_service(app).await;
    let client = GenerationClient::new(base_url);

    let err = client.check_health().await.unwrap_err();

    assert!(matches!(err, GenerationError::Protocol(_)));
}

#[tokio::test]
async fn it_should_fail_health_check_with_transport_error_when_unreachable() {
    let client = GenerationClient::new(unreachable_base_url().await);

    let err = client.check_health().await.unwrap_err();

    assert!(matches!(err, GenerationError::Transport(_)));
}

#[tokio::test]
async fn it_should_generate_a_speech_through_the_full_wizard_flow() {
    let app = Router::new().route(
        "/api/generate-speech",
        post(|| async {
            Json(json!({
                "speech": "Hello",
                "structure": {"intro": "i", "body": "b", "conclusion": "c"},
                "suggestions": ["add an anecdote"]
            }))
        }),
    );
    let base_url = spawn_service(app).await;
    let client = GenerationClient::new(base_url);
    let mut session = session_at_review();

    session.submit(&client).await;

    assert_eq!(session.step(), Step::Result);
    let result = session.result().unwrap();
    assert_eq!(result.speech, "Hello");
    assert_eq!(result.metadata.occasion, Some(Occasion::PolicyAnnouncement));
    assert!(session.error().is_none());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn it_should_surface_the_http_status_when_the_service_fails() {
    let app = Router::new().route(
        "/api/generate-speech",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = spawn_service(app).await;
    let client = GenerationClient::new(base_url);
    let mut session = session_at_review();

    session.submit(&client).await;

    assert_eq!(session.step(), Step::Review);
    assert!(session.error().unwrap().contains("500"));
    assert!(session.result().is_none());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn it_should_surface_transport_failures_as_error_text() {
    let client = GenerationClient::new(unreachable_base_url().await);
    let mut session = session_at_review();

    session.submit(&client).await;

    assert_eq!(session.step(), Step::Review);
    let error = session.error().unwrap();
    assert!(error.contains("network error"));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn it_should_post_exactly_the_documented_wire_fields() {
    let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let captured = received.clone();
    let app = Router::new()
        .route(
            "/api/generate-speech",
            post(
                |State(captured): State<Arc<Mutex<Option<Value>>>>, Json(body): Json<Value>| async move {
                    *captured.lock().unwrap() = Some(body);
                    Json(json!({"speech": "ok", "structure": {}, "suggestions": []}))
                },
            ),
        )
        .with_state(captured);
    let base_url = spawn_service(app).await;
    let client = GenerationClient::new(base_url);

    let mut session = session_at_review();
    session.apply(Command::Set(FieldValue::Length(SpeechLength::Min10)));
    session.apply(Command::Set(FieldValue::Language(Language::Dutch)));
    session.apply(Command::Set(FieldValue::Topic("budget outlook".to_string())));
    session.submit(&client).await;
    assert_eq!(session.step(), Step::Result);

    let body = received.lock().unwrap().take().unwrap();
    let body = body.as_object().unwrap();
    assert_eq!(body.len(), 8);
    assert_eq!(body["occasion"], "policy-announcement");
    assert_eq!(body["audience"], "government-officials");
    assert_eq!(body["tone"], "formal");
    assert_eq!(body["length"], "10");
    assert_eq!(body["template"], "policy-announcement");
    assert_eq!(body["topic"], "budget outlook");
    assert_eq!(body["additional_context"], "");
    assert_eq!(body["language"], "dutch");
}
