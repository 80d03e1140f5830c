/// Base URL of the ClimateLens API, without a trailing slash.
///
/// Baked in at build time: set `CLIMATELENS_BACKEND_URL` in the environment
/// when compiling to point at a deployed backend. Defaults to the local dev
/// server.
pub fn backend_url() -> &'static str {
    option_env!("CLIMATELENS_BACKEND_URL").unwrap_or("http://127.0.0.1:8000")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_has_no_trailing_slash() {
        // Endpoint paths all start with '/', so a trailing slash here would
        // produce double-slash URLs.
        assert!(!backend_url().is_empty());
        assert!(!backend_url().ends_with('/'));
    }
}
