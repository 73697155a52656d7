use crate::e2e::helpers;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use helpers::{TestContext, FAKE_MP3};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_inline_base64_audio(ctx: &TestContext) {
    ctx.mock_speech().await;

    let response = ctx
        .client
        .post(
            "/api/text-to-speech",
            &json!({ "text": "Hola", "languageCode": "es" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    let audio = STANDARD
        .decode(body["audioContent"].as_str().unwrap())
        .unwrap();
    assert_eq!(audio, FAKE_MP3);
    assert!(body.get("audioUrl").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_neutral_mp3_voice_request(ctx: &TestContext) {
    ctx.mock_speech().await;

    ctx.client
        .post(
            "/api/text-to-speech",
            &json!({ "text": "Bonjour", "languageCode": "fr" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let requests = ctx.upstream.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["input"]["text"], "Bonjour");
    assert_eq!(sent["voice"]["languageCode"], "fr-FR");
    assert_eq!(sent["voice"]["ssmlGender"], "NEUTRAL");
    assert_eq!(sent["audioConfig"]["audioEncoding"], "MP3");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_language_code(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/text-to-speech", &json!({ "text": "Hola" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("VALIDATION_ERROR");
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_language_code(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/text-to-speech",
            &json!({ "text": "Hola", "languageCode": "tlh" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("UNSUPPORTED_LANGUAGE");
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_provider_failure_as_upstream_error(ctx: &TestContext) {
    ctx.mock_speech_failure().await;

    let response = ctx
        .client
        .post(
            "/api/text-to-speech",
            &json!({ "text": "Hola", "languageCode": "es" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_code("UPSTREAM_ERROR")
        .assert_error_message("Speech synthesis failed");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_only_accept_post_for_speech(ctx: &TestContext) {
    let response = ctx.client.get("/api/text-to-speech").await.unwrap();

    response
        .assert_status(StatusCode::METHOD_NOT_ALLOWED)
        .assert_error_code("METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn it_should_store_audio_and_serve_it_when_delivering_files() {
    let ctx = TestContext::with_env(&[("SPEECH_DELIVERY", "file")])
        .await
        .unwrap();
    ctx.mock_speech().await;

    let response = ctx
        .client
        .post(
            "/api/text-to-speech",
            &json!({ "text": "Hallo", "languageCode": "de" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert!(body.get("audioContent").is_none());
    let audio_url = body["audioUrl"].as_str().unwrap().to_string();
    assert!(audio_url.starts_with("/audio/"));
    assert!(audio_url.ends_with(".mp3"));

    let file_name = audio_url.trim_start_matches("/audio/");
    assert!(ctx.audio_dir.path().join(file_name).exists());

    let served = ctx.client.get(&audio_url).await.unwrap();
    served.assert_status(StatusCode::OK);
    assert_eq!(served.body_bytes, FAKE_MP3);

    let ready = ctx.client.get("/health/ready").await.unwrap();
    assert_eq!(ready.body.as_ref().unwrap()["delivery"], "file");
}

#[tokio::test]
async fn it_should_give_each_stored_clip_a_unique_name() {
    let ctx = TestContext::with_env(&[("SPEECH_DELIVERY", "file")])
        .await
        .unwrap();
    ctx.mock_speech().await;

    let mut urls = Vec::new();
    for _ in 0..3 {
        let response = ctx
            .client
            .post(
                "/api/text-to-speech",
                &json!({ "text": "Ciao", "languageCode": "it" }),
            )
            .await
            .unwrap();
        response.assert_status(StatusCode::OK);
        urls.push(response.body.as_ref().unwrap()["audioUrl"].as_str().unwrap().to_string());
    }

    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), 3);
}
