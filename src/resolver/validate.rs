use url::Url;

/// Hosts the platform serves video links from, including its short-link
/// subdomains.
const SUPPORTED_HOSTS: [&str; 4] = [
    "tiktok.com",
    "www.tiktok.com",
    "vm.tiktok.com",
    "vt.tiktok.com",
];

/// Client-side check that a string is a plausible link for the supported
/// platform. Pure and total: no I/O, never panics.
///
/// Advisory only: a link accepted here may still be unresolvable upstream
/// (private, deleted, malformed path), which the resolver reports separately.
pub fn is_supported_link(input: &str) -> bool {
    let Ok(parsed) = Url::parse(input.trim()) else {
        return false;
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    matches!(parsed.host_str(), Some(host) if SUPPORTED_HOSTS.contains(&host))
}
