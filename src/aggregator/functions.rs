// Standard library
use std::net::Ipv4Addr;

/// Whether an address reported by an echo service is plausibly our
/// public address.
///
/// Some echo services leak the caller's LAN address instead of the
/// public one. Rejects RFC1918 private ranges, loopback, and
/// link-local; anything else is taken at face value.
pub fn is_public_candidate(ip: &Ipv4Addr) -> bool {
    !(ip.is_private() || ip.is_loopback() || ip.is_link_local())
}
