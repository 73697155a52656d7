// End-to-end tests for the Polyglot Backend API
//
// Each test gets its own server on an ephemeral port, wired through the same
// `build_app` as the binary. Upstream translation and speech providers are a
// per-test wiremock server, and the sentence corpus and audio directory live
// in per-test temp directories, so tests run in parallel without conflicts.

mod helpers;
mod test_cors;
mod test_health;
mod test_languages;
mod test_speech;
mod test_translate;
