use crate::accept::{ACCEPTED_CONTENT_ENCODINGS, DEFAULT_ACCEPT, with_fallbacks};
use crate::config::FetchConfig;
use crate::locator::DocumentLocator;
use std::time::Duration;

/// Everything needed to retrieve a document, fixed once per fetch.
#[derive(Debug, Clone)]
pub struct RetrievalRequest {
    locator: DocumentLocator,
    accept: String,
    authorization: Option<String>,
    accept_encoding: Option<&'static str>,
    connection_timeout: Duration,
    retries: u32,
    follow_redirects: bool,
    user_agent: String,
}

impl RetrievalRequest {
    /// Builds a request. The `Accept` value gets its fallback clauses appended.
    pub fn new(locator: DocumentLocator, accept: Option<&str>, config: &FetchConfig) -> Self {
        Self {
            locator,
            accept: with_fallbacks(accept.unwrap_or(DEFAULT_ACCEPT)),
            authorization: config.authorization().map(ToOwned::to_owned),
            accept_encoding: config
                .accepts_http_compression()
                .then_some(ACCEPTED_CONTENT_ENCODINGS),
            connection_timeout: config.connection_timeout(),
            retries: config.retries(),
            follow_redirects: config.follows_redirects(),
            user_agent: config.user_agent().to_owned(),
        }
    }

    #[inline]
    pub fn locator(&self) -> &DocumentLocator {
        &self.locator
    }

    #[inline]
    pub fn accept(&self) -> &str {
        &self.accept
    }

    /// The number of attempts, at least one.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.retries.max(1)
    }

    /// The timeout of the given attempt, starting from 0.
    #[inline]
    pub fn timeout(&self, attempt: u32) -> Duration {
        self.connection_timeout
            .saturating_add(self.connection_timeout.saturating_mul(attempt))
    }

    #[inline]
    pub fn follows_redirects(&self) -> bool {
        self.follow_redirects
    }

    /// The request sent for one hop of the redirection chain.
    pub fn for_hop<'a>(
        &'a self,
        locator: &'a DocumentLocator,
        timeout: Duration,
    ) -> TransportRequest<'a> {
        TransportRequest {
            locator,
            accept: &self.accept,
            authorization: self.authorization.as_deref(),
            accept_encoding: self.accept_encoding,
            user_agent: &self.user_agent,
            timeout,
        }
    }
}

/// A single request sent by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, Copy)]
pub struct TransportRequest<'a> {
    pub locator: &'a DocumentLocator,
    /// `Accept` header value
    pub accept: &'a str,
    /// `Authorization` header value
    pub authorization: Option<&'a str>,
    /// `Accept-Encoding` header value
    pub accept_encoding: Option<&'static str>,
    /// `User-Agent` header value
    pub user_agent: &'a str,
    /// Global timeout of the request
    pub timeout: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchError;

    #[test]
    fn test_linear_timeouts() -> Result<(), FetchError> {
        let request = RetrievalRequest::new(
            DocumentLocator::parse("http://example.com/")?,
            None,
            &FetchConfig::new().with_connection_timeout(Duration::from_millis(100)),
        );
        assert_eq!(request.timeout(0), Duration::from_millis(100));
        assert_eq!(request.timeout(2), Duration::from_millis(300));
        assert_eq!(request.attempts(), 5);
        Ok(())
    }

    #[test]
    fn test_at_least_one_attempt() -> Result<(), FetchError> {
        let request = RetrievalRequest::new(
            DocumentLocator::parse("http://example.com/")?,
            Some("text/turtle"),
            &FetchConfig::new().with_retries(0).without_http_compression(),
        );
        assert_eq!(request.attempts(), 1);
        assert_eq!(request.accept(), "text/turtle, text/plain; q=0.1, */*; q=0.09");
        let locator = request.locator().clone();
        assert_eq!(request.for_hop(&locator, Duration::ZERO).accept_encoding, None);
        Ok(())
    }
}
