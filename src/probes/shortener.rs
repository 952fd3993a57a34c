//! URL shortener detection.
//!
//! Pure host membership test against the configured shortener-domain list.
//! No I/O; this collector never fails and never degrades.

/// Returns true if `host` is (or is a subdomain of) a known shortener domain.
pub fn is_shortened_host(host: &str, shortener_domains: &[String]) -> bool {
    let host = host.to_lowercase();
    shortener_domains.iter().any(|shortener| {
        let shortener = shortener.to_lowercase();
        host == shortener || host.ends_with(&format!(".{shortener}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shorteners() -> Vec<String> {
        vec!["bit.ly".to_string(), "tinyurl.com".to_string(), "t.co".to_string()]
    }

    #[test]
    fn test_known_shortener_matches() {
        assert!(is_shortened_host("bit.ly", &shorteners()));
        assert!(is_shortened_host("tinyurl.com", &shorteners()));
    }

    #[test]
    fn test_subdomain_of_shortener_matches() {
        assert!(is_shortened_host("en.bit.ly", &shorteners()));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_shortened_host("Bit.LY", &shorteners()));
    }

    #[test]
    fn test_ordinary_host_does_not_match() {
        assert!(!is_shortened_host("example.com", &shorteners()));
    }

    #[test]
    fn test_lookalike_does_not_match() {
        // "t.co" must not match hosts that merely end in those characters
        assert!(!is_shortened_host("notbit.ly.example.com", &shorteners()));
        assert!(!is_shortened_host("att.co", &shorteners()));
    }
}
