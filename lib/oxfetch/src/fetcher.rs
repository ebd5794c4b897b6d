use crate::accept::ContentEncoding;
use crate::config::FetchConfig;
use crate::decode::{decode_content, decode_file, infer_file_name};
use crate::error::FetchError;
use crate::locator::DocumentLocator;
use crate::request::RetrievalRequest;
use crate::transport::{DefaultTransport, Transport};
use std::collections::BTreeSet;
use std::io::{self, BufRead, BufReader, Error, ErrorKind, Read};
use std::time::Duration;

/// Retrieves documents, following redirections and undoing compressions.
///
/// ```no_run
/// use oxfetch::{DocumentFetcher, DocumentLocator, FetchConfig};
/// use std::io::Read;
///
/// let fetcher = DocumentFetcher::new(FetchConfig::new());
/// let mut document = fetcher.fetch(
///     &DocumentLocator::parse("http://www.w3.org/2002/07/owl")?,
///     Some("text/turtle"),
/// )?;
/// let mut content = String::new();
/// document.read_to_string(&mut content)?;
/// println!("{} retrieved from {}", document.file_name(), document.system_id());
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct DocumentFetcher<T: Transport = DefaultTransport> {
    transport: T,
    config: FetchConfig,
}

impl DocumentFetcher {
    /// Builds a fetcher opening `http:`, `https:` and `file:` locators.
    #[inline]
    pub fn new(config: FetchConfig) -> Self {
        Self::with_transport(DefaultTransport::default(), config)
    }
}

impl Default for DocumentFetcher {
    #[inline]
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

impl<T: Transport> DocumentFetcher<T> {
    #[inline]
    pub fn with_transport(transport: T, config: FetchConfig) -> Self {
        Self { transport, config }
    }

    #[inline]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Retrieves a document.
    ///
    /// `accept` is the `Accept` header value, [`DEFAULT_ACCEPT`](crate::DEFAULT_ACCEPT) if `None`.
    /// Attempts that time out are retried with a longer timeout, each one from the original
    /// locator.
    pub fn fetch(
        &self,
        locator: &DocumentLocator,
        accept: Option<&str>,
    ) -> Result<DecodedStream, FetchError> {
        if !self.transport.accepts(locator) {
            return Err(FetchError::MalformedLocator {
                locator: locator.to_string(),
                message: format!("the {} scheme is not supported", locator.scheme()),
            });
        }
        let request = RetrievalRequest::new(locator.clone(), accept, &self.config);
        let attempts = request.attempts();
        for attempt in 0..attempts {
            let timeout = request.timeout(attempt);
            match self.attempt(&request, timeout) {
                Err(FetchError::Transport {
                    locator: failed,
                    source,
                }) if is_timeout(&source) => {
                    tracing::warn!(
                        locator = %failed,
                        attempt,
                        timeout = ?timeout,
                        error = %source,
                        "Retrieval timed out"
                    );
                }
                result => return result,
            }
        }
        Err(FetchError::RetryLimitExhausted {
            locator: locator.clone(),
            attempts,
        })
    }

    /// Follows the redirection chain from the requested locator and decodes the final response.
    fn attempt(
        &self,
        request: &RetrievalRequest,
        timeout: Duration,
    ) -> Result<DecodedStream, FetchError> {
        let mut current = request.locator().clone();
        let mut visited = BTreeSet::from([current.clone()]);
        loop {
            let transport_error = |locator: &DocumentLocator, source: io::Error| {
                FetchError::Transport {
                    locator: locator.clone(),
                    source,
                }
            };
            let response = self
                .transport
                .open(&request.for_hop(&current, timeout))
                .map_err(|e| transport_error(&current, e))?;
            if response.is_redirect() {
                if !request.follows_redirects() || !self.transport.supports_redirects(&current) {
                    return Err(transport_error(
                        &current,
                        Error::other(format!(
                            "redirection status {} while redirections are disabled",
                            response.status()
                        )),
                    ));
                }
                let location = response.header("Location").ok_or_else(|| {
                    transport_error(
                        &current,
                        Error::new(
                            ErrorKind::InvalidData,
                            format!("redirection status {} without Location", response.status()),
                        ),
                    )
                })?;
                let target = current.join(location)?;
                if !visited.insert(target.clone()) {
                    return Err(FetchError::RedirectCycle {
                        visited: visited.into_iter().collect(),
                    });
                }
                tracing::debug!(from = %current, to = %target, "Following redirection");
                current = target;
                continue;
            }
            if !response.is_success() {
                return Err(transport_error(
                    &current,
                    Error::other(format!("unexpected HTTP status {}", response.status())),
                ));
            }

            let content_encoding = response
                .header("Content-Encoding")
                .and_then(ContentEncoding::from_header);
            if let Some(encoding) = content_encoding {
                tracing::info!(
                    encoding = encoding.as_str(),
                    "Response body is compressed"
                );
            }
            let file_name = infer_file_name(response.header("Content-Disposition"), &current);
            let body = decode_content(response.into_body(), content_encoding);
            let body = decode_file(body, &file_name, &current)?;
            return Ok(DecodedStream {
                inner: BufReader::new(body),
                file_name,
                locator: current,
            });
        }
    }
}

fn is_timeout(error: &io::Error) -> bool {
    matches!(error.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock)
}

/// A retrieved document, decompressed and buffered.
///
/// The stream owns the underlying connection or file: dropping it releases them.
pub struct DecodedStream {
    inner: BufReader<Box<dyn Read>>,
    file_name: String,
    locator: DocumentLocator,
}

impl DecodedStream {
    /// The name used to pick a decompression: the `Content-Disposition` file name or the
    /// final locator.
    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The locator the document was actually retrieved from, after redirections.
    #[inline]
    pub fn locator(&self) -> &DocumentLocator {
        &self.locator
    }

    /// The identifier to give to parsers to resolve relative IRIs.
    #[inline]
    pub fn system_id(&self) -> &str {
        self.locator.as_str()
    }
}

impl Read for DecodedStream {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for DecodedStream {
    #[inline]
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    #[inline]
    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
    }
}

impl std::fmt::Debug for DecodedStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedStream")
            .field("file_name", &self.file_name)
            .field("locator", &self.locator)
            .finish_non_exhaustive()
    }
}
