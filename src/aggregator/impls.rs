// Standard library
use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

// 3rd party crates
use futures::future::join_all;
use tracing::{debug, info, warn};

// Project imports
use crate::fetcher::constants::{REQUEST_TIMEOUT_SECS, SERVER_LIST};
use crate::fetcher::errors::FetchError;
use crate::fetcher::types::Fetcher;

// Current module imports
use super::functions::is_public_candidate;
use super::types::{ConsistencyReport, IpGetter};

impl Default for IpGetter {
    fn default() -> Self {
        Self::new()
    }
}

impl IpGetter {
    /// Getter over the compiled-in server list with the default timeout.
    pub fn new() -> Self {
        Self::with_servers(
            SERVER_LIST.iter().map(|s| s.to_string()).collect(),
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        )
    }

    /// Getter over an explicit server list, for callers that bring
    /// their own endpoints.
    pub fn with_servers(servers: Vec<String>, timeout: Duration) -> Self {
        Self {
            servers,
            fetcher: Fetcher::new(timeout),
        }
    }

    /// Walks the server list in order and returns the first public
    /// address any service reports.
    ///
    /// One fetch is in flight at a time and the walk stops at the first
    /// acceptable answer, so servers past that point are never
    /// contacted. Exhausting the whole list is a normal outcome, not an
    /// error, and yields `None`.
    pub async fn get_external_ip(&self) -> Option<Ipv4Addr> {
        for server in &self.servers {
            match self.fetcher.fetch(server).await {
                Ok(ip) if is_public_candidate(&ip) => {
                    info!(server = %server, %ip, "🌐 public address reported");
                    return Some(ip);
                }
                Ok(ip) => {
                    debug!(server = %server, %ip, "non-public address rejected");
                }
                Err(e) => {
                    debug!(server = %server, "echo service unusable: {}", e);
                }
            }
        }
        warn!("no echo service produced a public address");
        None
    }

    /// Queries every server concurrently and reports how consistent
    /// their answers are.
    ///
    /// All fetches are launched before any result is awaited, and the
    /// report is produced only once the slowest fetch has resolved or
    /// timed out, so the worst-case wall-clock cost is one timeout
    /// period regardless of list length. The summary is printed to
    /// stdout; the report is also returned for programmatic use.
    pub async fn check_consistency(&self) -> ConsistencyReport {
        let fetches = self.servers.iter().map(|server| self.fetcher.fetch(server));
        let results = join_all(fetches).await;

        for (server, outcome) in self.servers.iter().zip(&results) {
            if let Err(e) = outcome {
                debug!(server = %server, "broken server: {}", e);
            }
        }

        let report = ConsistencyReport::from_outcomes(results);
        println!("{report}");
        report
    }
}

impl ConsistencyReport {
    /// Groups per-server outcomes by distinct answer. Pure; the raw
    /// outcome order is preserved alongside the grouping.
    pub fn from_outcomes(results: Vec<Result<Ipv4Addr, FetchError>>) -> Self {
        let mut counts = std::collections::BTreeMap::new();
        for outcome in &results {
            *counts.entry(outcome.as_ref().ok().copied()).or_insert(0) += 1;
        }
        Self {
            server_count: results.len(),
            results,
            counts,
        }
    }

    /// Number of distinct non-failed answers. Anything above one means
    /// the servers disagree.
    pub fn distinct_answers(&self) -> usize {
        self.counts.keys().filter(|answer| answer.is_some()).count()
    }

    /// Number of servers that produced no usable answer.
    pub fn broken_servers(&self) -> usize {
        self.counts.get(&None).copied().unwrap_or(0)
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of servers: {}", self.server_count)?;
        writeln!(
            f,
            "Distinct answers: {} ({} broken)",
            self.distinct_answers(),
            self.broken_servers()
        )?;
        writeln!(f, "IPs:")?;
        for (answer, count) in &self.counts {
            let label = match answer {
                Some(ip) => ip.to_string(),
                None => "broken server".to_owned(),
            };
            let unit = if *count == 1 {
                "occurrence"
            } else {
                "occurrences"
            };
            writeln!(f, "  {label} = {count} {unit}")?;
        }
        write!(f, "Raw results: [")?;
        for (i, outcome) in self.results.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match outcome {
                Ok(ip) => write!(f, "{ip}")?,
                Err(_) => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}
