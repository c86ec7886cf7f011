// Standard library
use std::env;

// 3rd party crates
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod aggregator;
mod fetcher;
#[cfg(test)]
mod test_support;

// Project imports
use crate::aggregator::types::IpGetter;

/// Main entry point.
///
/// With no argument, prints the first public IPv4 address reported by
/// the echo server list (an empty line if every server fails). With
/// the `check` argument, queries every server concurrently and prints
/// a consistency report instead.
#[tokio::main]
async fn main() {
    // setup logging; RUST_LOG overrides the default level.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .from_env_lossy()
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    let getter = IpGetter::new();

    match env::args().nth(1).as_deref() {
        Some("check") => {
            getter.check_consistency().await;
        }
        _ => match getter.get_external_ip().await {
            Some(ip) => println!("{ip}"),
            // Total failure prints an empty line rather than erroring;
            // the per-server problems were already logged on the way.
            None => println!(),
        },
    }
}
