//! Reference destinations.
//!
//! Reference nodes carry their destination as a raw `refuri` string. It is
//! parsed on demand with [`Link::parse`] when the translator decides which
//! wrapper, if any, to put around the reference text.

/// URI schemes rendered as external hyperlinks.
const EXTERNAL_SCHEMES: &[&str] = &["mailto:", "http:", "https:", "ftp:"];

/// Prefix of references into a grammar production list.
const TOKEN_PREFIX: &str = "@token";

/// A parsed reference destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Link<'a> {
    /// No destination at all.
    Missing,

    /// External URL (mailto:, http:, https:, ftp:).
    External(&'a str),

    /// In-document jump to the anchor with this id (`#id`).
    Internal(&'a str),

    /// Reference to a grammar token (`@token...`).
    GrammarToken,

    /// Anything else. Stored for the warning message.
    Unknown(&'a str),
}

impl<'a> Link<'a> {
    /// Parse a `refuri` attribute into a Link.
    ///
    /// An empty string counts as no destination.
    pub fn parse(refuri: Option<&'a str>) -> Self {
        let Some(uri) = refuri.filter(|uri| !uri.is_empty()) else {
            return Link::Missing;
        };

        if EXTERNAL_SCHEMES
            .iter()
            .any(|scheme| uri.starts_with(scheme))
        {
            return Link::External(uri);
        }

        if let Some(id) = uri.strip_prefix('#') {
            return Link::Internal(id);
        }

        if uri.starts_with(TOKEN_PREFIX) {
            return Link::GrammarToken;
        }

        Link::Unknown(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_missing_destination() {
        assert_eq!(Link::parse(None), Link::Missing);
        assert_eq!(Link::parse(Some("")), Link::Missing);
    }

    #[test]
    fn test_parse_external_link() {
        assert_eq!(Link::parse(Some("http://example.com")), Link::External("http://example.com"));
        assert_eq!(Link::parse(Some("https://example.com")), Link::External("https://example.com"));
        assert_eq!(Link::parse(Some("ftp://ftp.example.com/pub")), Link::External("ftp://ftp.example.com/pub"));
        assert!(matches!(Link::parse(Some("mailto:user@example.com")), Link::External(_)));
    }

    #[test]
    fn test_parse_fragment_link() {
        let link = Link::parse(Some("#module-os.path"));
        assert_eq!(link, Link::Internal("module-os.path"));
    }

    #[test]
    fn test_parse_grammar_token() {
        assert_eq!(Link::parse(Some("@token-expr")), Link::GrammarToken);
    }

    #[test]
    fn test_parse_unknown_scheme() {
        assert_eq!(
            Link::parse(Some("gopher://old.example")),
            Link::Unknown("gopher://old.example")
        );
        assert_eq!(Link::parse(Some("other.html")), Link::Unknown("other.html"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fragment_round_trips(id in "[a-z][a-z0-9.-]{0,20}") {
                let uri = format!("#{id}");
                prop_assert_eq!(Link::parse(Some(&uri)), Link::Internal(id.as_str()));
            }

            #[test]
            fn http_is_always_external(rest in "[a-z0-9./]{0,30}") {
                let uri = format!("http://{rest}");
                prop_assert_eq!(Link::parse(Some(&uri)), Link::External(uri.as_str()));
            }
        }
    }
}
