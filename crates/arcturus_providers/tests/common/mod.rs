//! Shared test helpers for provider integration tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize environment variables from `.env` file (once).
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

/// Reads the API key the live tests run against.
///
/// # Panics
///
/// Panics when `OPENAI_API_KEY` is not set; these tests are `#[ignore]`d so
/// this only triggers when they are run deliberately.
pub fn api_key() -> String {
    init_env();
    std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set for live tests")
}
