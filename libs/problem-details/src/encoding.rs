//! Wire encodings for problem details bodies.

use serde::{Deserialize, Serialize};

/// Content type for Problem Details as per RFC 7807 §6.1.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Content type for the XML form of Problem Details (RFC 7807 §6.2).
pub const APPLICATION_PROBLEM_XML: &str = "application/problem+xml";

/// Body encoding used when writing a problem response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Json,
    /// Declared by RFC 7807 but not implemented; writers reject it.
    Xml,
}

impl Encoding {
    #[must_use]
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Json => APPLICATION_PROBLEM_JSON,
            Self::Xml => APPLICATION_PROBLEM_XML,
        }
    }

    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Json)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn media_types() {
        assert_eq!(Encoding::Json.media_type(), "application/problem+json");
        assert_eq!(Encoding::Xml.media_type(), "application/problem+xml");
    }

    #[test]
    fn only_json_is_supported() {
        assert!(Encoding::Json.is_supported());
        assert!(!Encoding::Xml.is_supported());
        assert_eq!(Encoding::default(), Encoding::Json);
    }

    #[test]
    fn deserializes_lowercase_names() {
        let enc: Encoding = serde_json::from_str("\"xml\"").unwrap();
        assert_eq!(enc, Encoding::Xml);
        assert!(serde_json::from_str::<Encoding>("\"yaml\"").is_err());
    }
}
