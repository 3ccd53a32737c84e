use anyhow::{anyhow, bail, Result};
use url::Url;

const HOSTLESS_SCHEMES: [&str; 3] = ["about", "data", "file"];

/// Turn address-bar input into a loadable URL, defaulting to `https://`.
pub fn normalize_address(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("Enter a valid URL to continue.");
    }

    if let Ok(url) = Url::parse(trimmed) {
        if url.has_host() || HOSTLESS_SCHEMES.contains(&url.scheme()) {
            return Ok(url);
        }
    }

    Url::parse(&format!("https://{trimmed}"))
        .ok()
        .filter(Url::has_host)
        .ok_or_else(|| anyhow!("Invalid URL: {trimmed}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_full_urls() {
        let url = normalize_address(" https://example.com/watch?v=1 ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/watch?v=1");
        assert_eq!(normalize_address("about:blank").unwrap().as_str(), "about:blank");
    }

    #[test]
    fn adds_https_to_bare_hosts() {
        assert_eq!(
            normalize_address("example.com").unwrap().as_str(),
            "https://example.com/"
        );
        assert_eq!(
            normalize_address("localhost:8080/live").unwrap().as_str(),
            "https://localhost:8080/live"
        );
    }

    #[test]
    fn only_listed_schemes_load_without_a_host() {
        assert_eq!(
            normalize_address("file:///tmp/clip.mp4").unwrap().scheme(),
            "file"
        );
        assert_eq!(
            normalize_address("data:text/plain,hi").unwrap().as_str(),
            "data:text/plain,hi"
        );
        // Parses with scheme `javascript` but no host; prefixing cannot rescue it.
        assert!(normalize_address("javascript:alert(1)").is_err());
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert!(normalize_address("   ").is_err());
        assert!(normalize_address("exa mple.com").is_err());
    }
}
