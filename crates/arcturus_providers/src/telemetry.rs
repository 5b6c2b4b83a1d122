//! Client-identity headers attached to outgoing transports.

use std::collections::HashMap;

/// Canonical user agent header name.
pub(crate) const USER_AGENT: &str = "User-Agent";

/// Product token prepended to the user agent of created clients.
pub(crate) const PRODUCT_TOKEN: &str = concat!("arcturus/", env!("CARGO_PKG_VERSION"));

/// Version header carried alongside the user agent token.
const VERSION_HEADER: &str = "X-Arcturus-Version";

/// Environment variable that disables client-identity headers.
const TELEMETRY_OPT_OUT_VAR: &str = "ARCTURUS_TELEMETRY_OPT_OUT";

/// Returns the process-wide app-identity headers, or `None` when the user
/// opted out via `ARCTURUS_TELEMETRY_OPT_OUT`.
pub(crate) fn app_info() -> Option<HashMap<String, String>> {
    if std::env::var_os(TELEMETRY_OPT_OUT_VAR).is_some() {
        return None;
    }
    Some(HashMap::from([(
        VERSION_HEADER.to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    )]))
}

/// Merges caller headers with app-identity headers.
///
/// Caller-supplied values are preserved verbatim; identity headers only fill
/// gaps, and the user agent gets the product token prepended rather than
/// replaced.
pub(crate) fn merge_default_headers(
    extra: Option<&HashMap<String, String>>,
    app_info: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut headers = extra.cloned().unwrap_or_default();
    if let Some(info) = app_info {
        for (key, value) in info {
            headers.entry(key.clone()).or_insert_with(|| value.clone());
        }
        prepend_product_to_user_agent(&mut headers);
    }
    headers
}

/// Prepends the product token to the user agent header, inserting one when
/// none was supplied. Idempotent.
fn prepend_product_to_user_agent(headers: &mut HashMap<String, String>) {
    match headers.get_mut(USER_AGENT) {
        Some(agent) if agent.starts_with(PRODUCT_TOKEN) => {}
        Some(agent) => *agent = format!("{PRODUCT_TOKEN} {agent}"),
        None => {
            headers.insert(USER_AGENT.to_string(), PRODUCT_TOKEN.to_string());
        }
    }
}
