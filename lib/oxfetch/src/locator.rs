use crate::error::FetchError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use url::Url;

/// The absolute location of a document, on the network or on the local file system.
///
/// ```
/// use oxfetch::DocumentLocator;
///
/// let locator = DocumentLocator::parse("http://example.com/ontologies/pizza.owl")?;
/// assert_eq!(locator.scheme(), "http");
/// assert_eq!(
///     locator.join("../other.owl")?.as_str(),
///     "http://example.com/other.owl"
/// );
/// # Result::<_, oxfetch::FetchError>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentLocator {
    url: Url,
}

impl DocumentLocator {
    /// Parses an absolute locator.
    pub fn parse(locator: &str) -> Result<Self, FetchError> {
        Url::parse(locator)
            .map(|url| Self { url })
            .map_err(|e| FetchError::MalformedLocator {
                locator: locator.into(),
                message: e.to_string(),
            })
    }

    /// Builds a `file:` locator from an absolute path.
    pub fn from_file_path(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        Url::from_file_path(path)
            .map(|url| Self { url })
            .map_err(|()| FetchError::MalformedLocator {
                locator: path.display().to_string(),
                message: "the path is not absolute".into(),
            })
    }

    /// Resolves a possibly relative reference, e.g. the value of a `Location` header.
    pub fn join(&self, reference: &str) -> Result<Self, FetchError> {
        self.url
            .join(reference)
            .map(|url| Self { url })
            .map_err(|e| FetchError::MalformedLocator {
                locator: reference.into(),
                message: e.to_string(),
            })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    #[inline]
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    #[inline]
    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// The local path of a `file:` locator.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.scheme() != "file" {
            return None;
        }
        self.url.to_file_path().ok()
    }
}

impl fmt::Display for DocumentLocator {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.url.fmt(f)
    }
}

impl FromStr for DocumentLocator {
    type Err = FetchError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Url> for DocumentLocator {
    #[inline]
    fn from(url: Url) -> Self {
        Self { url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_locator_is_malformed() {
        assert!(matches!(
            DocumentLocator::parse("pizza.owl"),
            Err(FetchError::MalformedLocator { .. })
        ));
    }

    #[test]
    fn test_join_absolute_path() -> Result<(), FetchError> {
        let locator = DocumentLocator::parse("https://example.com/a/b?c=d")?;
        assert_eq!(locator.join("/e")?.as_str(), "https://example.com/e");
        assert_eq!(
            locator.join("http://other.example/f")?.as_str(),
            "http://other.example/f"
        );
        Ok(())
    }

    #[test]
    fn test_only_file_locators_have_paths() -> Result<(), FetchError> {
        assert_eq!(
            DocumentLocator::parse("http://example.com/a")?.to_file_path(),
            None
        );
        Ok(())
    }
}
