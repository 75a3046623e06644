//! HTTP contract tests for the ElevenLabs backend.
//!
//! The backend uses a blocking client, so every call runs on a blocking
//! thread while the mock server lives on the async runtime.

use serde_json::json;
use tempfile::TempDir;
use voice_probe::backend::{Backend, BackendError, HttpBackend, SynthesizeRequest};
use voice_probe::config::VoiceEntry;
use voice_probe::output::AudioStore;
use voice_probe::probe::{ProbeOutcome, ProbeRunner};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "sk_contract_test";

fn request() -> SynthesizeRequest {
    SynthesizeRequest::new("Hello there", "eleven_turbo_v2_5")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_voices_sends_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .and(header("xi-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voices": [
                {"voice_id": "EXAVITQu4vr4xnSDxMaL", "name": "Sarah", "category": "premade",
                 "description": "Young adult woman", "labels": {"use_case": "news"}},
                {"voice_id": "cloned1", "name": "Mine", "category": "cloned", "labels": {}}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let voices = tokio::task::spawn_blocking(move || HttpBackend::new(&uri, API_KEY).list_voices())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(voices.voices.len(), 2);
    assert!(voices.voices[0].is_premade());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_voices_non_success_keeps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"detail":{"status":"invalid_api_key"}}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || HttpBackend::new(&uri, "bad").list_voices())
        .await
        .unwrap();

    match result {
        Err(BackendError::RequestFailed { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid_api_key"));
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_synthesize_request_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/EXAVITQu4vr4xnSDxMaL"))
        .and(header("xi-api-key", API_KEY))
        .and(header("accept", "audio/mpeg"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "text": "Hello there",
            "model_id": "eleven_turbo_v2_5",
            "voice_settings": {"stability": 0.5, "similarity_boost": 0.75}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ID3 mpeg bytes".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let audio = tokio::task::spawn_blocking(move || {
        HttpBackend::new(&uri, API_KEY).synthesize("EXAVITQu4vr4xnSDxMaL", &request())
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(audio, b"ID3 mpeg bytes");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_connection_refused_is_connection_failure() {
    // Nothing listens on the discard port.
    let result = tokio::task::spawn_blocking(|| {
        HttpBackend::new("http://127.0.0.1:9", API_KEY).synthesize("abc", &request())
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(BackendError::ConnectionFailed(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_runner_saves_only_successful_samples() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/good"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"good audio".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/locked"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "detail": {"status": "voice_not_allowed", "message": "Upgrade required"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().to_path_buf();
    let uri = mock_server.uri();

    let report = tokio::task::spawn_blocking(move || {
        let runner = ProbeRunner::new(HttpBackend::new(&uri, API_KEY), request())
            .with_store(AudioStore::with_dir(output_dir));
        let voices = vec![
            VoiceEntry::new("Good", "good"),
            VoiceEntry::new("Locked", "locked"),
        ];
        runner.run(&voices, |_| {})
    })
    .await
    .unwrap();

    assert_eq!(report.working(), 1);
    assert_eq!(
        report.results[1].outcome,
        ProbeOutcome::HttpError {
            status: 403,
            message: "voice_not_allowed".to_string(),
        }
    );
    assert_eq!(
        std::fs::read(temp_dir.path().join("test_good.mp3")).unwrap(),
        b"good audio"
    );
    assert!(!temp_dir.path().join("test_locked.mp3").exists());
}
