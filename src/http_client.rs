use reqwest::Client;

/// Shared HTTP client for all probes. The per-probe timeout is attached to
/// each request, so the builder only pins TLS and identification. Redirects
/// stay on reqwest's default policy.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("gitprobe/", env!("CARGO_PKG_VERSION")))
        .use_rustls_tls()
        .build()
}
