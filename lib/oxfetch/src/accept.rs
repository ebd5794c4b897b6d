/// The `Accept` header sent when the caller does not provide one.
pub const DEFAULT_ACCEPT: &str = "application/rdf+xml, application/xml; q=0.7, text/xml; q=0.6, text/plain; q=0.1, */*; q=0.09";

/// The `Accept-Encoding` header sent when HTTP compression is accepted.
pub const ACCEPTED_CONTENT_ENCODINGS: &str = "xz,gzip,deflate";

const TEXT_PLAIN_CLAUSE: &str = ", text/plain; q=0.1";
const ANY_CLAUSE: &str = ", */*; q=0.09";

/// Appends the low priority `text/plain` and `*/*` clauses when they are missing.
pub(crate) fn with_fallbacks(accept: &str) -> String {
    let mut accept = accept.to_owned();
    if !accept.contains("text/plain") {
        accept.push_str(TEXT_PLAIN_CLAUSE);
    }
    if !accept.contains("*/*") {
        accept.push_str(ANY_CLAUSE);
    }
    accept
}

/// A `Content-Encoding` the fetcher decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentEncoding {
    Xz,
    Gzip,
    Deflate,
}

impl ContentEncoding {
    /// Returns `None` for `identity` and the encodings that are not supported.
    pub(crate) fn from_header(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("xz") {
            Some(Self::Xz)
        } else if value.eq_ignore_ascii_case("gzip") || value.eq_ignore_ascii_case("x-gzip") {
            Some(Self::Gzip)
        } else if value.eq_ignore_ascii_case("deflate") {
            Some(Self::Deflate)
        } else {
            None
        }
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Xz => "xz",
            Self::Gzip => "gzip",
            Self::Deflate => "deflate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_are_appended() {
        assert_eq!(
            with_fallbacks("text/turtle"),
            "text/turtle, text/plain; q=0.1, */*; q=0.09"
        );
    }

    #[test]
    fn test_fallbacks_are_not_duplicated() {
        assert_eq!(with_fallbacks(DEFAULT_ACCEPT), DEFAULT_ACCEPT);
        assert_eq!(
            with_fallbacks("text/plain, text/turtle"),
            "text/plain, text/turtle, */*; q=0.09"
        );
    }

    #[test]
    fn test_content_encodings() {
        assert_eq!(ContentEncoding::from_header("GZIP"), Some(ContentEncoding::Gzip));
        assert_eq!(ContentEncoding::from_header("x-gzip"), Some(ContentEncoding::Gzip));
        assert_eq!(ContentEncoding::from_header(" xz "), Some(ContentEncoding::Xz));
        assert_eq!(
            ContentEncoding::from_header("deflate"),
            Some(ContentEncoding::Deflate)
        );
        assert_eq!(ContentEncoding::from_header("identity"), None);
        assert_eq!(ContentEncoding::from_header("br"), None);
    }
}
