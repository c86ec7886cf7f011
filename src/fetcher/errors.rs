// 3rd party crates
use thiserror::Error;

/// Why a single echo service produced no usable address.
///
/// None of these variants is fatal: the sequential aggregator collapses
/// all of them to "no answer, try the next server", and the consistency
/// check groups all of them as a broken server. The distinction only
/// matters for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {server} timed out")]
    Timeout { server: String },

    #[error("request to {server} failed: {source}")]
    Network {
        server: String,
        source: reqwest::Error,
    },

    #[error("no IPv4 address found in response from {server}")]
    NoMatch { server: String },
}
