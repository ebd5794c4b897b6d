use std::time::Duration;

/// Options of a [`DocumentFetcher`](crate::DocumentFetcher).
///
/// ```
/// use oxfetch::FetchConfig;
/// use std::time::Duration;
///
/// let config = FetchConfig::new()
///     .with_authorization("Bearer secret")
///     .with_connection_timeout(Duration::from_secs(5))
///     .with_retries(3);
/// assert_eq!(config.authorization(), Some("Bearer secret"));
/// assert!(config.follows_redirects());
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct FetchConfig {
    authorization: Option<String>,
    accept_http_compression: bool,
    connection_timeout: Duration,
    retries: u32,
    follow_redirects: bool,
    user_agent: String,
}

impl FetchConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of the `Authorization` header. An empty value sends no header.
    #[inline]
    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        let authorization = authorization.into();
        self.authorization = (!authorization.is_empty()).then_some(authorization);
        self
    }

    /// Does not send `Accept-Encoding`: servers answer with uncompressed content.
    #[inline]
    pub fn without_http_compression(mut self) -> Self {
        self.accept_http_compression = false;
        self
    }

    /// Sets the timeout of the first attempt. Each retry waits one more time this duration.
    #[inline]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Sets how many attempts are made when connecting times out. Zero behaves like one.
    #[inline]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Fails on redirection responses instead of following them.
    #[inline]
    pub fn without_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }

    #[inline]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[inline]
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    #[inline]
    pub fn accepts_http_compression(&self) -> bool {
        self.accept_http_compression
    }

    #[inline]
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    #[inline]
    pub fn retries(&self) -> u32 {
        self.retries
    }

    #[inline]
    pub fn follows_redirects(&self) -> bool {
        self.follow_redirects
    }

    #[inline]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for FetchConfig {
    #[inline]
    fn default() -> Self {
        Self {
            authorization: None,
            accept_http_compression: true,
            connection_timeout: Duration::from_secs(20),
            retries: 5,
            follow_redirects: true,
            user_agent: concat!("oxfetch/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.authorization(), None);
        assert!(config.accepts_http_compression());
        assert_eq!(config.connection_timeout(), Duration::from_secs(20));
        assert_eq!(config.retries(), 5);
        assert!(config.follows_redirects());
        assert!(config.user_agent().starts_with("oxfetch/"));
    }

    #[test]
    fn test_empty_authorization_is_ignored() {
        assert_eq!(FetchConfig::new().with_authorization("").authorization(), None);
    }
}
