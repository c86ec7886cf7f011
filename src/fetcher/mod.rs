//! IP Echo Fetcher
//!
//! This module fetches a single IP echo service and extracts the first
//! IPv4 address from whatever body the service returns. Echo services are
//! wildly inconsistent: some answer with a bare dotted quad, some wrap it
//! in HTML, some are not even valid UTF-8. The fetcher tolerates all of
//! that and reduces every response to one of three outcomes: an address,
//! a timeout, or "nothing usable in the body".
//!
//! # Behavior
//!
//! - One HTTP GET per call, bounded by a fixed timeout
//! - Body decoded as UTF-8, with a Latin-1 fallback that cannot fail
//! - First dotted quad with in-range octets wins; no anchoring, so the
//!   address may appear anywhere in a larger text or HTML page
//! - No retries; a slow or broken service is simply reported as such

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;
