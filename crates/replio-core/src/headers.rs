// Rust guideline compliant 2026-10-16

//! Custom response headers.

/// Name of the header whose presence suppresses the default content type.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type emitted when the caller did not supply one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Ordered collection of response headers.
///
/// Names are kept exactly as supplied and compared exactly when merging, so
/// `X-Trace` and `x-trace` are two entries. Only the content-type lookup
/// ignores case. Entries are emitted in insertion order; overwriting an
/// existing name keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    /// Creates an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, overwriting the value of an entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Merges a batch of headers; later entries win on duplicate names.
    pub fn merge<I, K, V>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.insert(name, value);
        }
    }

    /// Returns the value stored under exactly this name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns whether any entry is named `content-type`, ignoring case.
    #[must_use]
    pub fn has_content_type(&self) -> bool {
        self.entries
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE))
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no headers were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        headers.merge(iter);
        headers
    }
}

/// Checks that a header name is an RFC 9110 token.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}

/// Checks that a header value cannot split the header block.
pub(crate) fn is_valid_value(value: &str) -> bool {
    !value.bytes().any(|b| b == b'\r' || b == b'\n' || b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut headers = HeaderMap::new();
        headers.insert("X-A", "1");
        headers.insert("X-B", "2");
        headers.insert("X-A", "3");

        let collected: Vec<_> = headers.iter().collect();
        assert_eq!(collected, vec![("X-A", "3"), ("X-B", "2")]);
    }

    #[test]
    fn test_names_are_case_sensitive_for_merge() {
        let headers: HeaderMap = [("X-Trace", "a"), ("x-trace", "b")].into_iter().collect();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X-Trace"), Some("a"));
        assert_eq!(headers.get("x-trace"), Some("b"));
    }

    #[test]
    fn test_content_type_lookup_ignores_case() {
        let mut headers = HeaderMap::new();
        assert!(!headers.has_content_type());
        headers.insert("CONTENT-type", "text/plain");
        assert!(headers.has_content_type());
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("X-Request-Id"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Bad Name"));
        assert!(!is_valid_name("Bad:Name"));
    }

    #[test]
    fn test_value_validation() {
        assert!(is_valid_value("text/plain; charset=utf-8"));
        assert!(is_valid_value(""));
        assert!(!is_valid_value("a\r\nSet-Cookie: x"));
    }
}
