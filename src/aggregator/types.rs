// Standard library
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

// Project imports
use crate::fetcher::errors::FetchError;
use crate::fetcher::types::Fetcher;

/// Queries an ordered list of IP echo services.
pub struct IpGetter {
    pub servers: Vec<String>,
    pub fetcher: Fetcher,
}

/// Outcome of one consistency-check run over the whole server list.
///
/// Never persisted; computed fresh per run and discarded after use.
pub struct ConsistencyReport {
    /// Number of servers queried.
    pub server_count: usize,
    /// Per-server outcomes, in server-list order.
    pub results: Vec<Result<Ipv4Addr, FetchError>>,
    /// Occurrence count per distinct answer. The `None` bucket groups
    /// every failed fetch, regardless of failure kind.
    pub counts: BTreeMap<Option<Ipv4Addr>, usize>,
}
