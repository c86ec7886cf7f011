// Standard library
use std::net::Ipv4Addr;
use std::time::Duration;

// 3rd party crates
use tracing::{debug, trace};

// Current module imports
use super::errors::FetchError;
use super::functions::{decode_body, extract_ipv4};
use super::types::Fetcher;

impl Fetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Fetches one echo service and extracts the first IPv4 address from
    /// its response body.
    ///
    /// Timeouts and transport failures are expected outcomes when talking
    /// to free third-party services, so they come back as `FetchError`
    /// values rather than being retried or escalated.
    pub async fn fetch(&self, server: &str) -> Result<Ipv4Addr, FetchError> {
        let response = self
            .client
            .get(server)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| classify(server, e))?;

        let bytes = response.bytes().await.map_err(|e| classify(server, e))?;
        let body = decode_body(&bytes);
        trace!(server = %server, bytes = bytes.len(), "echo service replied");

        match extract_ipv4(&body) {
            Some(ip) => {
                debug!(server = %server, %ip, "extracted address");
                Ok(ip)
            }
            None => Err(FetchError::NoMatch {
                server: server.to_owned(),
            }),
        }
    }
}

/// Sorts a transport error into the timeout or network bucket. The
/// per-request timeout covers the whole exchange, body included.
fn classify(server: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            server: server.to_owned(),
        }
    } else {
        FetchError::Network {
            server: server.to_owned(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bind_unresponsive, spawn_echo, spawn_echo_bytes};

    #[tokio::test]
    async fn fetch_extracts_address_from_plain_body() {
        let url = spawn_echo("your ip is 8.8.8.8 today").await;
        let fetcher = Fetcher::new(Duration::from_secs(2));

        let ip = fetcher.fetch(&url).await.expect("fetch should succeed");
        assert_eq!(ip, Ipv4Addr::new(8, 8, 8, 8));
    }

    #[tokio::test]
    async fn fetch_without_address_reports_no_match() {
        let url = spawn_echo("service temporarily unavailable").await;
        let fetcher = Fetcher::new(Duration::from_secs(2));

        let err = fetcher.fetch(&url).await.expect_err("no address in body");
        assert!(matches!(err, FetchError::NoMatch { .. }));
    }

    #[tokio::test]
    async fn fetch_decodes_latin1_body() {
        let url = spawn_echo_bytes(b"caf\xe9 1.2.3.4".to_vec()).await;
        let fetcher = Fetcher::new(Duration::from_secs(2));

        let ip = fetcher.fetch(&url).await.expect("latin-1 body decodes");
        assert_eq!(ip, Ipv4Addr::new(1, 2, 3, 4));
    }

    #[tokio::test]
    async fn unresponsive_server_times_out_instead_of_hanging() {
        // The listener is held open but never accepts, so the request
        // stalls after the connection is queued.
        let (url, _listener) = bind_unresponsive().await;
        let fetcher = Fetcher::new(Duration::from_millis(200));

        let err = fetcher.fetch(&url).await.expect_err("must time out");
        assert!(matches!(err, FetchError::Timeout { .. }));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let (url, listener) = bind_unresponsive().await;
        drop(listener);
        let fetcher = Fetcher::new(Duration::from_secs(2));

        let err = fetcher.fetch(&url).await.expect_err("connection refused");
        assert!(matches!(err, FetchError::Network { .. }));
    }
}
