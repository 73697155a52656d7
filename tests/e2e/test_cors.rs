use crate::e2e::helpers;

use helpers::TestContext;
use hyper::{Method, StatusCode};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_preflight_for_every_endpoint(ctx: &TestContext) {
    let endpoints = [
        ("/api/translate", "POST"),
        ("/api/text-to-speech", "POST"),
        ("/api/random-sentence", "GET"),
        ("/api/languages", "GET"),
    ];

    for (path, requested_method) in endpoints {
        let response = ctx
            .client
            .send(
                Method::OPTIONS,
                path,
                &[
                    ("Origin", "http://localhost:3000"),
                    ("Access-Control-Request-Method", requested_method),
                    ("Access-Control-Request-Headers", "content-type"),
                ],
            )
            .await
            .unwrap();

        response.assert_status(StatusCode::OK);
        assert!(
            response.body_bytes.is_empty(),
            "Preflight for {} returned a body: {:?}",
            path,
            String::from_utf8_lossy(&response.body_bytes)
        );
        assert_eq!(
            response
                .header("access-control-allow-origin")
                .map(String::as_str),
            Some("*"),
            "allow-origin for {}",
            path
        );
        let methods = response
            .header("access-control-allow-methods")
            .unwrap_or_else(|| panic!("Missing allow-methods header for {}", path));
        for method in ["GET", "POST", "OPTIONS"] {
            assert!(methods.contains(method), "{} missing {} in {}", path, method, methods);
        }
    }

    // Preflight is answered by the CORS layer, never by a provider
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_allow_cross_origin_reads(ctx: &TestContext) {
    let response = ctx
        .client
        .send(
            Method::GET,
            "/api/languages",
            &[("Origin", "https://learner.example")],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response
            .header("access-control-allow-origin")
            .map(String::as_str),
        Some("*")
    );
}
