use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Serialize;

use crate::config::ScanConfig;
use crate::probe::{failure_kind, send_probe};

/// Well-known metadata directory probed under every target.
const GIT_DIR: &str = ".git";

/// Probe URL for a target: the metadata suffix, with a path separator
/// inserted first when the target does not already end in one. The suffix
/// is appended to the target byte-for-byte; URL parsing has no place here.
pub fn probe_url(target: &str) -> String {
    if target.ends_with('/') {
        format!("{target}{GIT_DIR}")
    } else {
        format!("{target}/{GIT_DIR}")
    }
}

/// Classification for a single target.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub url: String,
    pub exposed: bool,
}

/// Check whether the site at `url` serves an accessible Git metadata
/// directory.
///
/// Exposed means the probe URL answered with a 2xx status. Every transport
/// failure (timeout, refused connection, DNS, TLS, malformed URL) folds to
/// `false`: this function never returns an error, so one bad target can
/// never take down a batch. Responses log at info, transport failures at
/// debug.
pub async fn check(client: &Client, url: &str, timeout: Duration) -> bool {
    let probe = probe_url(url);
    match send_probe(client, &probe, timeout).await {
        Ok(status) => {
            let exposed = status.is_success();
            tracing::info!("{} -> {} (exposed: {})", url, status.as_u16(), exposed);
            exposed
        }
        Err(err) => {
            tracing::debug!("{} -> {} failure: {}", url, failure_kind(&err), err);
            false
        }
    }
}

/// Classify every URL, preserving input order in the output.
///
/// At most `config.concurrency` probes are in flight at once, and each is
/// bounded by its own timeout, so a hanging target delays nothing but
/// itself. Exactly one result per input URL.
pub async fn check_all(client: &Client, urls: &[String], config: &ScanConfig) -> Vec<ProbeResult> {
    let timeout = config.timeout();
    let total = urls.len();
    let started = AtomicUsize::new(0);

    stream::iter(urls.iter().cloned())
        .map(|url| {
            let started = &started;
            async move {
                let idx = started.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::debug!("[{}/{}] probing {}", idx, total, url);
                let exposed = check(client, &url, timeout).await;
                ProbeResult { url, exposed }
            }
        })
        .buffered(config.concurrency.max(1))
        .collect()
        .await
}

/// The exposed subsequence of `urls`, in input order.
pub async fn evaluate(client: &Client, urls: &[String], config: &ScanConfig) -> Vec<String> {
    check_all(client, urls, config)
        .await
        .into_iter()
        .filter(|result| result.exposed)
        .map(|result| result.url)
        .collect()
}
