// Standard library
use std::time::Duration;

/// HTTP fetcher for IP echo services.
///
/// Holds one shared `reqwest::Client` so concurrent fetches reuse the
/// same connection pool, and the timeout applied to every request.
pub struct Fetcher {
    pub client: reqwest::Client,
    pub timeout: Duration,
}
