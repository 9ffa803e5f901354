//! Cache key derivation for incoming requests
//!
//! The key is the literal request path plus query string, verbatim. Two
//! requests with identical path+query always share a key; nothing is
//! canonicalized, so `/x` and `/x/` (or `a=1` and `a=2`) are distinct.

/// Derives the cache key for a request from its path and query string.
///
/// Pure and infallible: a degenerate input (empty path, empty query) still
/// yields a stable key.
pub fn request_cache_key(path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_only() {
        assert_eq!(request_cache_key("/btc-exchange-rate/", None), "/btc-exchange-rate/");
    }

    #[test]
    fn test_path_with_query() {
        assert_eq!(request_cache_key("/x", Some("a=1")), "/x?a=1");
    }

    #[test]
    fn test_query_values_produce_distinct_keys() {
        let a = request_cache_key("/x", Some("a=1"));
        let b = request_cache_key("/x", Some("a=2"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_no_trailing_slash_normalization() {
        let a = request_cache_key("/x", None);
        let b = request_cache_key("/x/", None);
        assert_ne!(a, b);
    }

    #[test]
    fn test_query_order_is_preserved() {
        // No canonicalization: semantically equal queries stay distinct keys
        let a = request_cache_key("/x", Some("a=1&b=2"));
        let b = request_cache_key("/x", Some("b=2&a=1"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_degenerate_inputs_are_stable() {
        assert_eq!(request_cache_key("", None), "");
        assert_eq!(request_cache_key("", Some("")), "?");
        // Deterministic across calls
        assert_eq!(request_cache_key("", None), request_cache_key("", None));
    }
}
