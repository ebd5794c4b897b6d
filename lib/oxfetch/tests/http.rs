#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use oxfetch::{DocumentFetcher, DocumentLocator, FetchConfig, FetchError};
use std::error::Error;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{Ipv4Addr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{sleep, spawn};
use std::time::Duration;

const DOCUMENT: &[u8] = b"Ontology: <http://example.com/pizza>\n";

enum Reply {
    Status {
        status: u16,
        headers: Vec<(&'static str, String)>,
        body: &'static [u8],
    },
    /// Keeps the connection open without answering
    Stall(Duration),
}

fn ok(body: &'static [u8]) -> Reply {
    Reply::Status {
        status: 200,
        headers: Vec::new(),
        body,
    }
}

fn found(location: impl Into<String>) -> Reply {
    Reply::Status {
        status: 302,
        headers: vec![("Location", location.into())],
        body: b"",
    }
}

/// A plain HTTP/1.1 server on a loopback port picked by the OS.
///
/// The handler gets the request path and the number of requests served before this one.
struct LoopbackServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl LoopbackServer {
    fn start(
        handler: impl Fn(&str, usize) -> Reply + Send + Sync + 'static,
    ) -> io::Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))?;
        let base = format!("http://{}", listener.local_addr()?);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler = Arc::new(handler);
        let recorded = Arc::clone(&requests);
        spawn(move || {
            for stream in listener.incoming().flatten() {
                let handler = Arc::clone(&handler);
                let recorded = Arc::clone(&recorded);
                spawn(move || {
                    let _: io::Result<()> = answer(stream, &*handler, &recorded);
                });
            }
        });
        Ok(Self { base, requests })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn locator(&self, path: &str) -> Result<DocumentLocator, FetchError> {
        DocumentLocator::parse(&self.url(path))
    }

    /// The lowercased heads of the requests received so far.
    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn answer(
    stream: TcpStream,
    handler: &dyn Fn(&str, usize) -> Reply,
    recorded: &Mutex<Vec<String>>,
) -> io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut head = String::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 || line == "\r\n" || line == "\n" {
            break;
        }
        head.push_str(&line);
    }
    let path = head
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_owned();
    let index = {
        let mut recorded = recorded.lock().unwrap();
        recorded.push(head.to_ascii_lowercase());
        recorded.len() - 1
    };
    match handler(&path, index) {
        Reply::Status {
            status,
            headers,
            body,
        } => {
            let mut stream = stream;
            write!(stream, "HTTP/1.1 {status} Status\r\n")?;
            for (name, value) in headers {
                write!(stream, "{name}: {value}\r\n")?;
            }
            write!(
                stream,
                "content-length: {}\r\nconnection: close\r\n\r\n",
                body.len()
            )?;
            stream.write_all(body)?;
            stream.flush()
        }
        Reply::Stall(duration) => {
            sleep(duration);
            Ok(())
        }
    }
}

fn read_all(mut stream: impl Read) -> io::Result<Vec<u8>> {
    let mut content = Vec::new();
    stream.read_to_end(&mut content)?;
    Ok(content)
}

#[test]
fn test_redirect_chain_over_http() -> Result<(), Box<dyn Error>> {
    let base = Arc::new(Mutex::new(String::new()));
    let absolute = Arc::clone(&base);
    let server = LoopbackServer::start(move |path, _| match path {
        "/a" => found("/b"),
        "/b" => found(format!("{}/c", absolute.lock().unwrap())),
        "/c" => ok(DOCUMENT),
        _ => Reply::Status {
            status: 404,
            headers: Vec::new(),
            body: b"",
        },
    })?;
    base.lock().unwrap().clone_from(&server.base);

    let stream = DocumentFetcher::new(FetchConfig::new()).fetch(&server.locator("/a")?, None)?;
    assert_eq!(stream.system_id(), server.url("/c"));
    assert_eq!(read_all(stream)?, DOCUMENT);
    assert_eq!(server.requests().len(), 3);
    Ok(())
}

#[test]
fn test_redirect_cycle_over_http() -> Result<(), Box<dyn Error>> {
    let server = LoopbackServer::start(|path, _| match path {
        "/a" => found("/b"),
        _ => found("/a"),
    })?;
    let result = DocumentFetcher::new(FetchConfig::new()).fetch(&server.locator("/a")?, None);
    let visited = match result {
        Err(FetchError::RedirectCycle { visited }) => visited,
        other => panic!("expected a redirect cycle, got {other:?}"),
    };
    assert_eq!(visited, [server.locator("/a")?, server.locator("/b")?]);
    assert_eq!(server.requests().len(), 2);
    Ok(())
}

#[test]
fn test_request_headers_over_http() -> Result<(), Box<dyn Error>> {
    let server = LoopbackServer::start(|path, _| match path {
        "/a" => found("/b"),
        _ => ok(DOCUMENT),
    })?;
    let fetcher =
        DocumentFetcher::new(FetchConfig::new().with_authorization("Bearer secret"));
    let stream = fetcher.fetch(&server.locator("/a")?, Some("text/turtle"))?;
    assert_eq!(read_all(stream)?, DOCUMENT);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    for head in requests {
        assert!(
            head.contains("accept: text/turtle, text/plain; q=0.1, */*; q=0.09\r\n"),
            "{head}"
        );
        assert!(head.contains("authorization: bearer secret\r\n"), "{head}");
        assert!(head.contains("accept-encoding: xz,gzip,deflate\r\n"), "{head}");
    }
    Ok(())
}

#[test]
fn test_redirection_disabled_over_http() -> Result<(), Box<dyn Error>> {
    let server = LoopbackServer::start(|_, _| found("/b"))?;
    let result = DocumentFetcher::new(FetchConfig::new().without_redirects())
        .fetch(&server.locator("/a")?, None);
    assert!(matches!(result, Err(FetchError::Transport { .. })));
    assert_eq!(server.requests().len(), 1);
    Ok(())
}

#[test]
fn test_read_timeout_is_retried_over_http() -> Result<(), Box<dyn Error>> {
    let server = LoopbackServer::start(|_, index| {
        if index == 0 {
            Reply::Stall(Duration::from_secs(2))
        } else {
            ok(DOCUMENT)
        }
    })?;
    let fetcher = DocumentFetcher::new(
        FetchConfig::new()
            .with_connection_timeout(Duration::from_millis(200))
            .with_retries(3),
    );
    let stream = fetcher.fetch(&server.locator("/pizza.owl")?, None)?;
    assert_eq!(read_all(stream)?, DOCUMENT);
    assert_eq!(server.requests().len(), 2);
    Ok(())
}

#[test]
fn test_read_timeouts_exhaust_retries_over_http() -> Result<(), Box<dyn Error>> {
    let server = LoopbackServer::start(|_, _| Reply::Stall(Duration::from_secs(2)))?;
    let fetcher = DocumentFetcher::new(
        FetchConfig::new()
            .with_connection_timeout(Duration::from_millis(100))
            .with_retries(2),
    );
    let result = fetcher.fetch(&server.locator("/pizza.owl")?, None);
    assert!(matches!(
        result,
        Err(FetchError::RetryLimitExhausted { attempts: 2, .. })
    ));
    assert_eq!(server.requests().len(), 2);
    Ok(())
}
