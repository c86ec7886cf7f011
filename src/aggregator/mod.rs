//! Echo Server Aggregation
//!
//! This module drives the fetcher over the compiled-in server list in
//! one of two ways:
//!
//! - **Sequential** (`get_external_ip`): walk the list in order, one
//!   fetch in flight at a time, and return the first public-looking
//!   address. Servers after the first hit are never contacted.
//! - **Consistency check** (`check_consistency`): query every server
//!   concurrently, wait for all of them, and report how well their
//!   answers agree. Useful for auditing which entries of the list have
//!   gone stale or started echoing garbage.
//!
//! Failures from individual servers never propagate out of either
//! mode; a server that cannot produce a usable address is skipped
//! (sequential) or counted as broken (consistency check).

pub mod functions;
pub mod impls;
pub mod types;
