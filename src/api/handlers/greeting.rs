//! Root greeting endpoint

/// GET /
pub async fn greeting() -> &'static str {
    "Hello, World!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greeting() {
        assert_eq!(greeting().await, "Hello, World!");
    }
}
