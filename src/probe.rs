use std::time::Duration;

use reqwest::{Client, StatusCode};

/// Issue exactly one GET against `url`, bounded by `timeout`.
///
/// Returns the response status whenever a response arrives (after any
/// default-policy redirects) and the transport failure otherwise. No
/// retries, no backoff.
pub async fn send_probe(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<StatusCode, reqwest::Error> {
    let response = client.get(url).timeout(timeout).send().await?;
    Ok(response.status())
}

/// Short label for a transport failure, logged at debug level before the
/// outcome is folded down to "not exposed".
pub fn failure_kind(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_builder() {
        "invalid-url"
    } else if err.is_redirect() {
        "redirect"
    } else {
        "transport"
    }
}
