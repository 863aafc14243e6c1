use crate::helpers::{mocks::MockSynthesisClient, TestContext};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use voicebox::domain::synthesis::{AudioEncoding, Language};

#[tokio::test]
async fn it_should_synthesize_text_to_speech() {
    let audio = b"ID3\x04fake-mp3-bytes".to_vec();
    let ctx = TestContext::with_audio(audio.clone()).await;

    let response = ctx
        .client
        .post(
            "/api/synthesize",
            &json!({
                "text": "Hello world",
                "language": "en-US",
                "voice": "en-US-Wavenet-F",
                "encoding": "MP3"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header("x-character-count", "11")
        .assert_header("x-voice-used", "en-US-Wavenet-F")
        .assert_header_exists("x-request-id");

    // Provider bytes pass through unmodified
    assert_eq!(response.body_bytes, audio);
    assert_eq!(ctx.provider.call_count(), 1);
}

#[tokio::test]
async fn it_should_apply_defaults_when_only_text_is_given() {
    let ctx = TestContext::with_audio(vec![0xaa; 64]).await;

    let response = ctx
        .client
        .post("/api/synthesize", &json!({ "text": "Hello world" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header("x-voice-used", "en-US-Wavenet-F");

    let calls = ctx.provider.recorded_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].language, Language::EnglishUs);
    assert_eq!(calls[0].voice, "en-US-Wavenet-F");
    assert_eq!(calls[0].encoding, AudioEncoding::Mp3);
}

#[tokio::test]
async fn it_should_reject_empty_text_without_calling_provider() {
    let ctx = TestContext::with_audio(vec![1, 2, 3]).await;

    let response = ctx
        .client
        .post("/api/synthesize", &json!({ "text": "" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Please enter some text");

    assert_eq!(ctx.provider.call_count(), 0);
}

#[tokio::test]
async fn it_should_reject_whitespace_only_text_without_calling_provider() {
    let ctx = TestContext::with_audio(vec![1, 2, 3]).await;

    let response = ctx
        .client
        .post("/api/synthesize", &json!({ "text": "   \n\t  " }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(ctx.provider.call_count(), 0);
}

#[tokio::test]
async fn it_should_reject_oversized_text_without_calling_provider() {
    let ctx = TestContext::with_audio(vec![1, 2, 3]).await;

    let response = ctx
        .client
        .post("/api/synthesize", &json!({ "text": "a".repeat(5001) }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("5000 characters or less");

    assert_eq!(ctx.provider.call_count(), 0);
}

#[tokio::test]
async fn it_should_surface_provider_error_message() {
    let ctx = TestContext::with_provider(MockSynthesisClient::failing(
        "The request is missing a valid API key.",
    ))
    .await;

    let response = ctx
        .client
        .post("/api/synthesize", &json!({ "text": "Hello world" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("The request is missing a valid API key.");

    // Failure is terminal for the request, exactly one provider call
    assert_eq!(ctx.provider.call_count(), 1);
    assert!(response.header("content-type").unwrap().contains("json"));
}

#[tokio::test]
async fn it_should_trim_text_before_synthesis() {
    let ctx = TestContext::with_audio(vec![0x01]).await;

    let response = ctx
        .client
        .post("/api/synthesize", &json!({ "text": "  Hello world  " }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let calls = ctx.provider.recorded_calls();
    assert_eq!(calls[0].text, "Hello world");
}

#[tokio::test]
async fn it_should_serve_requested_encoding() {
    let ctx = TestContext::with_audio(b"OggS-opus".to_vec()).await;

    let response = ctx
        .client
        .post(
            "/api/synthesize",
            &json!({ "text": "Hoi", "language": "nl-NL", "encoding": "OGG_OPUS" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/ogg")
        .assert_header("x-voice-used", "nl-NL-Wavenet-F");

    let calls = ctx.provider.recorded_calls();
    assert_eq!(calls[0].encoding, AudioEncoding::OggOpus);
}

#[tokio::test]
async fn it_should_reject_unsupported_language() {
    let ctx = TestContext::with_audio(vec![1]).await;

    let response = ctx
        .client
        .post(
            "/api/synthesize",
            &json!({ "text": "Bonjour", "language": "fr-FR" }),
        )
        .await
        .unwrap();

    // Serde rejects the unknown variant before the handler runs
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ctx.provider.call_count(), 0);
}
