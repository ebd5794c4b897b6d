use crate::locator::DocumentLocator;
use crate::request::TransportRequest;
use oxhttp::Client;
use oxhttp::model::header::{ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, USER_AGENT};
use oxhttp::model::Request;
use std::fmt;
use std::fs::File;
use std::io::{self, Error, ErrorKind, Read};

/// A way to open documents.
///
/// The fetcher owns redirection handling: implementations must not follow redirects themselves.
pub trait Transport {
    /// Returns whether this transport is able to open the locator.
    fn accepts(&self, locator: &DocumentLocator) -> bool;

    /// Returns whether responses for this locator may be redirections.
    fn supports_redirects(&self, locator: &DocumentLocator) -> bool;

    /// Sends the request and returns the response, whatever its status.
    fn open(&self, request: &TransportRequest<'_>) -> io::Result<TransportResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    #[inline]
    fn accepts(&self, locator: &DocumentLocator) -> bool {
        (**self).accepts(locator)
    }

    #[inline]
    fn supports_redirects(&self, locator: &DocumentLocator) -> bool {
        (**self).supports_redirects(locator)
    }

    #[inline]
    fn open(&self, request: &TransportRequest<'_>) -> io::Result<TransportResponse> {
        (**self).open(request)
    }
}

/// The status, headers and body returned by a [`Transport`].
pub struct TransportResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Box<dyn Read>,
}

impl TransportResponse {
    pub fn new(
        status: u16,
        headers: impl IntoIterator<Item = (String, String)>,
        body: impl Read + 'static,
    ) -> Self {
        Self {
            status,
            headers: headers.into_iter().collect(),
            body: Box::new(body),
        }
    }

    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the first value of a header. Header names are case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns whether the status is 301, 302, 303, 307 or 308.
    #[inline]
    pub fn is_redirect(&self) -> bool {
        matches!(self.status, 301 | 302 | 303 | 307 | 308)
    }

    #[inline]
    pub fn into_body(self) -> Box<dyn Read> {
        self.body
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Opens `http:` and `https:` locators.
///
/// `https:` requires one of the TLS features of this crate.
/// Redirections are not followed: they are returned as `302` responses carrying the resolved
/// `Location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    fn accepts(&self, locator: &DocumentLocator) -> bool {
        matches!(locator.scheme(), "http" | "https")
    }

    fn supports_redirects(&self, _: &DocumentLocator) -> bool {
        true
    }

    fn open(&self, request: &TransportRequest<'_>) -> io::Result<TransportResponse> {
        let client = Client::new()
            .with_redirection_limit(0)
            .with_global_timeout(request.timeout);
        let mut builder = Request::builder()
            .uri(request.locator.as_str())
            .header(ACCEPT, request.accept)
            .header(USER_AGENT, request.user_agent);
        if let Some(authorization) = request.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(accept_encoding) = request.accept_encoding {
            builder = builder.header(ACCEPT_ENCODING, accept_encoding);
        }
        let response = match client.request(builder.body(()).map_err(invalid_input_error)?) {
            Ok(response) => response,
            Err(error) => {
                // The redirection is handed back to the fetcher, which owns cycle detection
                return match redirection_target(&error) {
                    Some(target) => Ok(TransportResponse::new(
                        302,
                        [("Location".to_owned(), target)],
                        io::empty(),
                    )),
                    None => Err(error),
                };
            }
        };
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                Some((name.as_str().to_owned(), value.to_str().ok()?.to_owned()))
            })
            .collect::<Vec<_>>();
        Ok(TransportResponse::new(
            response.status().as_u16(),
            headers,
            response.into_body(),
        ))
    }
}

/// Opens `file:` locators. Files never redirect.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTransport;

impl Transport for FileTransport {
    fn accepts(&self, locator: &DocumentLocator) -> bool {
        locator.scheme() == "file"
    }

    fn supports_redirects(&self, _: &DocumentLocator) -> bool {
        false
    }

    fn open(&self, request: &TransportRequest<'_>) -> io::Result<TransportResponse> {
        let path = request.locator.to_file_path().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("{} is not a local file", request.locator),
            )
        })?;
        Ok(TransportResponse::new(200, Vec::new(), File::open(path)?))
    }
}

/// Dispatches on the locator scheme between [`HttpTransport`] and [`FileTransport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTransport {
    http: HttpTransport,
    file: FileTransport,
}

impl Transport for DefaultTransport {
    fn accepts(&self, locator: &DocumentLocator) -> bool {
        self.http.accepts(locator) || self.file.accepts(locator)
    }

    fn supports_redirects(&self, locator: &DocumentLocator) -> bool {
        self.http.accepts(locator)
    }

    fn open(&self, request: &TransportRequest<'_>) -> io::Result<TransportResponse> {
        if self.file.accepts(request.locator) {
            self.file.open(request)
        } else if self.http.accepts(request.locator) {
            self.http.open(request)
        } else {
            Err(Error::new(
                ErrorKind::Unsupported,
                format!("unsupported scheme {}", request.locator.scheme()),
            ))
        }
    }
}

/// With a redirection limit of 0, `Client::request` reports any `Location` carrying redirection
/// as an error ending with the resolved target.
const REDIRECTION_TARGET_MARKER: &str = "The latest redirection target is ";

fn redirection_target(error: &Error) -> Option<String> {
    if error.kind() != ErrorKind::Other {
        return None;
    }
    let message = error.to_string();
    let (_, target) = message.split_once(REDIRECTION_TARGET_MARKER)?;
    let target = target.trim();
    (!target.is_empty()).then(|| target.to_owned())
}

fn invalid_input_error(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
    Error::new(ErrorKind::InvalidInput, error)
}
