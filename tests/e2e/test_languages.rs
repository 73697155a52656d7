use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use polyglot_backend::domain::language::LanguageOption;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_every_target_language(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let languages: Vec<LanguageOption> = response.json().unwrap();
    assert_eq!(languages.len(), 18);
    assert!(languages.iter().all(|l| l.value != "en"));
    assert!(languages
        .iter()
        .any(|l| l.value == "es" && l.label == "Spanish (Español)"));
}
