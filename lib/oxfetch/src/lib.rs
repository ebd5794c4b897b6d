#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod accept;
mod config;
mod decode;
mod error;
mod fetcher;
mod locator;
mod request;
mod transport;

pub use accept::{ACCEPTED_CONTENT_ENCODINGS, DEFAULT_ACCEPT};
pub use config::FetchConfig;
pub use error::FetchError;
pub use fetcher::{DecodedStream, DocumentFetcher};
pub use locator::DocumentLocator;
pub use request::{RetrievalRequest, TransportRequest};
pub use transport::{DefaultTransport, FileTransport, HttpTransport, Transport, TransportResponse};
