use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use polyglot_backend::app::build_app;
use polyglot_backend::domain::tips::TipsCatalog;
use polyglot_backend::infrastructure::config::Config;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod api_client;

use api_client::TestClient;

pub const TEST_API_KEY: &str = "test-google-key";
pub const FAKE_MP3: &[u8] = b"ID3-fake-mp3";

pub const CORPUS: &str = "I like to read books.\n\n  Where is the train station?  \nThe weather is nice today.\n";

pub struct TestContext {
    pub client: TestClient,
    pub base_url: String,
    pub upstream: MockServer,
    pub tips: Arc<TipsCatalog>,
    #[allow(dead_code)]
    pub config: Config,
    _data_dir: TempDir,
    pub audio_dir: TempDir,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            TestContext::with_env(&[])
                .await
                .expect("Failed to create test context")
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Temp directories and the mock server are dropped with the context
        }
    }
}

impl TestContext {
    /// Start a server whose providers point at a fresh mock upstream.
    ///
    /// `overrides` replace the test defaults; they are plain environment
    /// variable names, exactly as the binary would read them.
    pub async fn with_env(overrides: &[(&str, &str)]) -> Result<Self> {
        let upstream = MockServer::start().await;
        let data_dir = TempDir::new()?;
        let audio_dir = TempDir::new()?;

        let sentences_file = data_dir.path().join("sentences.txt");
        std::fs::write(&sentences_file, CORPUS)?;

        let mut vars: HashMap<String, String> = HashMap::from([
            ("HOST".to_string(), "127.0.0.1".to_string()),
            ("PORT".to_string(), "0".to_string()),
            ("UPSTREAM_TIMEOUT_SECS".to_string(), "5".to_string()),
            (
                "SENTENCES_FILE".to_string(),
                sentences_file.display().to_string(),
            ),
            ("TRANSLATION_PROVIDER".to_string(), "mymemory".to_string()),
            ("MYMEMORY_BASE_URL".to_string(), upstream.uri()),
            ("GOOGLE_API_KEY".to_string(), TEST_API_KEY.to_string()),
            ("GOOGLE_TRANSLATE_BASE_URL".to_string(), upstream.uri()),
            ("LIBRETRANSLATE_BASE_URL".to_string(), upstream.uri()),
            ("SPEECH_PROVIDER".to_string(), "google".to_string()),
            ("GOOGLE_TTS_BASE_URL".to_string(), upstream.uri()),
            ("GTTS_BASE_URL".to_string(), upstream.uri()),
            (
                "AUDIO_DIR".to_string(),
                audio_dir.path().display().to_string(),
            ),
        ]);
        for (key, value) in overrides {
            vars.insert(key.to_string(), value.to_string());
        }

        let config = Config::from_lookup(|key| vars.get(key).cloned())
            .map_err(|e| anyhow::anyhow!("Invalid test configuration: {}", e))?;

        let app = build_app(Arc::new(config.clone())).await?;
        let tips = app.tips.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app.router).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&base_url),
            base_url,
            upstream,
            tips,
            config,
            _data_dir: data_dir,
            audio_dir,
        })
    }

    /// MyMemory answers `translation` for the `en|<target>` pair
    pub async fn mock_translation(&self, target: &str, translation: &str) {
        Mock::given(method("GET"))
            .and(path("/get"))
            .and(query_param("langpair", format!("en|{}", target)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseData": { "translatedText": translation },
                "responseStatus": 200,
                "responseDetails": ""
            })))
            .mount(&self.upstream)
            .await;
    }

    /// MyMemory reports its daily quota as used up
    pub async fn mock_translation_quota_exhausted(&self) {
        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseData": {
                    "translatedText": "MYMEMORY WARNING: YOU USED ALL AVAILABLE FREE TRANSLATIONS FOR TODAY."
                },
                "responseStatus": 429,
                "quotaFinished": true
            })))
            .mount(&self.upstream)
            .await;
    }

    /// Google Text-to-Speech answers with `FAKE_MP3`
    pub async fn mock_speech(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/text:synthesize"))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "audioContent": STANDARD.encode(FAKE_MP3)
            })))
            .mount(&self.upstream)
            .await;
    }

    /// Google Text-to-Speech fails with a server error
    pub async fn mock_speech_failure(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/text:synthesize"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": { "code": 500, "message": "Internal error", "status": "INTERNAL" }
            })))
            .mount(&self.upstream)
            .await;
    }

    /// Number of calls the mock upstream has received so far
    pub async fn upstream_calls(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

/// Assert the JSON error body shape and its stable code
#[allow(dead_code)]
pub fn assert_error_response(response: &serde_json::Value, expected_code: &str) {
    let code = response.get("error").expect("Missing error field");
    assert_eq!(code.as_str().unwrap(), expected_code);
    assert!(response.get("message").is_some(), "Missing error message");
}
