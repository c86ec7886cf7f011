/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// IPv4 echo services, queried in order by the sequential mode.
///
/// Every entry returns the caller's apparent address somewhere in a
/// plain-text or HTML body; no entry needs a request body or custom
/// headers. Plain-text endpoints are listed first since they are the
/// cheapest to parse and the least likely to change format.
pub const SERVER_LIST: [&str; 14] = [
    // Plain-text responders (body is the bare address)
    "https://api.ipify.org",
    "https://icanhazip.com",
    "https://ifconfig.me/ip",
    "https://checkip.amazonaws.com",
    "https://ipecho.net/plain",
    "https://ipinfo.io/ip",
    "https://v4.ident.me",
    "https://ip4.seeip.org",
    "https://wtfismyip.com/text",
    "https://ip.tyk.nu",
    "https://myexternalip.com/raw",
    "https://api.ipaddress.com/myip",
    // HTML responders (address embedded in a page)
    "http://checkip.dyndns.org",
    "https://diagnostic.opendns.com/myip",
];
