//! The decompression cascade: the transport `Content-Encoding` first, then the file name.

use crate::accept::ContentEncoding;
use crate::error::FetchError;
use crate::locator::DocumentLocator;
use flate2::read::{DeflateDecoder, MultiGzDecoder};
use regex::Regex;
use std::io::{Cursor, Read};
use std::sync::LazyLock;
use xz2::read::XzDecoder;
use zip::{CompressionMethod, ZipArchive};
use zip::result::ZipError;

type Body = Box<dyn Read>;

#[expect(clippy::expect_used)]
static CONTENT_DISPOSITION_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"filename="([^\s;]*)""#).expect("the file name pattern is valid")
});

/// Extensions of the archive entries that may contain an ontology.
const ONTOLOGY_EXTENSIONS: [&str; 8] = ["owl", "rdf", "xml", "mos", "ttl", "omn", "ofn", "obo"];

/// Picks the name used to choose a decompression: the `Content-Disposition` file name if any,
/// else the locator.
pub(crate) fn infer_file_name(
    content_disposition: Option<&str>,
    locator: &DocumentLocator,
) -> String {
    content_disposition
        .and_then(|value| CONTENT_DISPOSITION_FILE_NAME.captures(value))
        .and_then(|captures| captures.get(1))
        .map_or_else(|| locator.as_str().to_owned(), |m| m.as_str().to_owned())
}

/// Undoes the transport level compression.
pub(crate) fn decode_content(body: Body, encoding: Option<ContentEncoding>) -> Body {
    match encoding {
        Some(ContentEncoding::Xz) => Box::new(XzDecoder::new(body)),
        Some(ContentEncoding::Gzip) => Box::new(MultiGzDecoder::new(body)),
        // Raw deflate stream, without zlib header
        Some(ContentEncoding::Deflate) => Box::new(DeflateDecoder::new(body)),
        None => body,
    }
}

/// Decompresses or extracts the document according to its file name extension.
pub(crate) fn decode_file(
    body: Body,
    file_name: &str,
    locator: &DocumentLocator,
) -> Result<Body, FetchError> {
    if has_extension(file_name, "zip") {
        tracing::debug!(file_name, "Extracting the ontology from a zip archive");
        extract_archive(body, locator)
    } else if has_extension(file_name, "gz") {
        Ok(Box::new(MultiGzDecoder::new(body)))
    } else if has_extension(file_name, "xz") {
        Ok(Box::new(XzDecoder::new(body)))
    } else {
        Ok(body)
    }
}

/// Streams the selected archive entry straight from the buffered archive.
fn extract_archive(mut body: Body, locator: &DocumentLocator) -> Result<Body, FetchError> {
    let archive_error = |source: ZipError| FetchError::Archive {
        locator: locator.clone(),
        source,
    };
    let mut buffer = Vec::new();
    body.read_to_end(&mut buffer)
        .map_err(|e| archive_error(e.into()))?;
    let mut archive = ZipArchive::new(Cursor::new(buffer)).map_err(archive_error)?;
    if archive.is_empty() {
        return Err(archive_error(ZipError::FileNotFound));
    }
    // The last plausible entry wins, the first one is the fallback
    let mut selected = 0;
    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index).map_err(archive_error)?;
        if is_plausible_ontology(entry.name()) {
            selected = index;
        }
    }
    let (data_start, compressed_size, compression) = {
        let entry = archive.by_index_raw(selected).map_err(archive_error)?;
        tracing::debug!(entry = entry.name(), "Selected archive entry");
        (entry.data_start(), entry.compressed_size(), entry.compression())
    };
    let mut raw = archive.into_inner();
    raw.set_position(data_start);
    let raw = raw.take(compressed_size);
    match compression {
        CompressionMethod::Stored => Ok(Box::new(raw)),
        CompressionMethod::Deflated => Ok(Box::new(DeflateDecoder::new(raw))),
        _ => Err(archive_error(ZipError::UnsupportedArchive(
            "only stored and deflated entries are supported",
        ))),
    }
}

fn is_plausible_ontology(entry_name: &str) -> bool {
    ONTOLOGY_EXTENSIONS
        .iter()
        .any(|extension| has_extension(entry_name, extension))
}

fn has_extension(file_name: &str, extension: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, e)| e.eq_ignore_ascii_case(extension))
}
