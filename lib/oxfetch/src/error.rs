use crate::locator::DocumentLocator;
use std::io;
use thiserror::Error;
use zip::result::ZipError;

/// Error returned while retrieving a document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The connection failed, or the server answered with an error status.
    #[error("cannot retrieve {locator}: {source}")]
    Transport {
        locator: DocumentLocator,
        source: io::Error,
    },
    /// Every attempt timed out.
    #[error("cannot connect to {locator}; retry limit exhausted after {attempts} attempts")]
    RetryLimitExhausted {
        locator: DocumentLocator,
        attempts: u32,
    },
    /// A redirection targets an already visited locator.
    #[error("infinite loop: redirect cycle detected through {}", join_locators(.visited))]
    RedirectCycle {
        /// The locators of the chain, sorted.
        visited: Vec<DocumentLocator>,
    },
    /// The locator cannot be turned into a connectable address.
    #[error("malformed document locator {locator}: {message}")]
    MalformedLocator { locator: String, message: String },
    /// The retrieved archive is invalid or empty.
    #[error("invalid archive retrieved from {locator}: {source}")]
    Archive {
        locator: DocumentLocator,
        source: ZipError,
    },
}

fn join_locators(visited: &[DocumentLocator]) -> String {
    visited
        .iter()
        .map(DocumentLocator::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<FetchError> for io::Error {
    #[inline]
    fn from(error: FetchError) -> Self {
        let kind = match &error {
            FetchError::Transport { source, .. } => source.kind(),
            FetchError::RetryLimitExhausted { .. } => io::ErrorKind::TimedOut,
            FetchError::RedirectCycle { .. } => io::ErrorKind::Other,
            FetchError::MalformedLocator { .. } => io::ErrorKind::InvalidInput,
            FetchError::Archive { .. } => io::ErrorKind::InvalidData,
        };
        Self::new(kind, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_kind() -> Result<(), FetchError> {
        let locator = DocumentLocator::parse("http://example.com/")?;
        let error = io::Error::from(FetchError::Transport {
            locator: locator.clone(),
            source: io::ErrorKind::ConnectionRefused.into(),
        });
        assert_eq!(error.kind(), io::ErrorKind::ConnectionRefused);
        let error = io::Error::from(FetchError::RetryLimitExhausted {
            locator,
            attempts: 5,
        });
        assert_eq!(error.kind(), io::ErrorKind::TimedOut);
        Ok(())
    }

    #[test]
    fn test_cycle_message_lists_visited_locators() -> Result<(), FetchError> {
        let error = FetchError::RedirectCycle {
            visited: vec![
                DocumentLocator::parse("http://a.example/")?,
                DocumentLocator::parse("http://b.example/")?,
            ],
        };
        assert_eq!(
            error.to_string(),
            "infinite loop: redirect cycle detected through http://a.example/, http://b.example/"
        );
        Ok(())
    }
}
