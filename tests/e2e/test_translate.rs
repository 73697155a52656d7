use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_translate_english_text(ctx: &TestContext) {
    ctx.mock_translation("es", "Hola").await;

    let response = ctx
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello", "targetLanguage": "es" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["translation"], "Hola");
    assert_eq!(body["from"], "en");
    assert_eq!(body["to"], "es");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_decode_html_entities_from_provider(ctx: &TestContext) {
    ctx.mock_translation("fr", "C&#39;est la vie").await;

    let response = ctx
        .client
        .post(
            "/api/translate",
            &json!({ "text": "That's life", "targetLanguage": "fr" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["translation"], "C'est la vie");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_text_without_calling_provider(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/translate", &json!({ "text": "", "targetLanguage": "es" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("VALIDATION_ERROR")
        .assert_error_message("Text is required");
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_target_language(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/translate", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("VALIDATION_ERROR");
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_over_the_length_limit(ctx: &TestContext) {
    let text = "a".repeat(5001);

    let response = ctx
        .client
        .post("/api/translate", &json!({ "text": text, "targetLanguage": "es" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("VALIDATION_ERROR");
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_target_language(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello", "targetLanguage": "xx" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("UNSUPPORTED_LANGUAGE")
        .assert_error_message("Unsupported target language: xx");
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json(ctx: &TestContext) {
    let response = ctx
        .client
        .post_raw("/api/translate", "{not json", "application/json")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("VALIDATION_ERROR");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_map_provider_quota_to_rate_limit(ctx: &TestContext) {
    ctx.mock_translation_quota_exhausted().await;

    let response = ctx
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello", "targetLanguage": "es" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::TOO_MANY_REQUESTS)
        .assert_error_code("RATE_LIMIT_EXCEEDED")
        .assert_error_message("try again later");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_upstream_failure_with_details(ctx: &TestContext) {
    // No mock mounted: wiremock answers 404
    let response = ctx
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello", "targetLanguage": "es" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_code("UPSTREAM_ERROR")
        .assert_error_message("Translation failed");
    assert!(response.body.as_ref().unwrap().get("details").is_some());
}

#[tokio::test]
async fn it_should_report_missing_google_key_as_configuration_error() {
    let ctx = TestContext::with_env(&[
        ("TRANSLATION_PROVIDER", "google"),
        ("GOOGLE_API_KEY", ""),
    ])
    .await
    .unwrap();

    let response = ctx
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello", "targetLanguage": "de" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_code("CONFIGURATION_ERROR");
    assert_eq!(ctx.upstream_calls().await, 0);
}
