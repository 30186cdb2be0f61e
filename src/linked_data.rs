//! Embedded linked-data (`application/ld+json`) article records.
//!
//! News sites commonly embed a Schema.org `Article` object carrying the
//! canonical headline, author, publication date, and sometimes the full
//! article body. When present these values take precedence over anything
//! derived from the markup.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A Schema.org article record decoded from a `<script
/// type="application/ld+json">` payload. Only the fields the engine consumes
/// are modeled; a record is accepted when its `@type` is `"Article"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LinkedDataArticle {
    #[serde(rename = "@type", default)]
    pub article_type: String,

    #[serde(default)]
    pub headline: String,

    #[serde(rename = "datePublished", default)]
    pub date_published: Option<DateTime<Utc>>,

    #[serde(default)]
    pub author: LinkedDataAuthor,

    #[serde(rename = "articleBody", default)]
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LinkedDataAuthor {
    #[serde(default)]
    pub name: String,
}

impl LinkedDataArticle {
    /// Decodes the first payload that parses as a Schema.org `Article`.
    /// Malformed payloads and records of other types are skipped silently.
    pub(crate) fn from_payloads(payloads: &[String]) -> Option<Self> {
        payloads
            .iter()
            .filter_map(|payload| serde_json::from_str::<Self>(payload).ok())
            .find(|article| article.article_type == "Article")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_article_record() {
        let payload = r#"{
            "@type": "Article",
            "headline": "H",
            "datePublished": "2020-01-02T00:00:00Z",
            "author": {"@type": "Person", "name": "A"},
            "articleBody": "B"
        }"#
        .to_string();

        let article = LinkedDataArticle::from_payloads(&[payload]).expect("should decode");
        assert_eq!(article.headline, "H");
        assert_eq!(article.author.name, "A");
        assert_eq!(article.body, "B");
        assert_eq!(
            article.date_published,
            Some(Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn skips_non_article_records() {
        let org = r#"{"@type": "Organization", "name": "Example"}"#.to_string();
        let article = r#"{"@type": "Article", "headline": "Second"}"#.to_string();

        let decoded = LinkedDataArticle::from_payloads(&[org, article]).expect("should decode");
        assert_eq!(decoded.headline, "Second");
    }

    #[test]
    fn malformed_payloads_are_ignored() {
        let bad = "{not json".to_string();
        assert!(LinkedDataArticle::from_payloads(&[bad]).is_none());
    }

    #[test]
    fn missing_fields_default() {
        let payload = r#"{"@type": "Article"}"#.to_string();
        let article = LinkedDataArticle::from_payloads(&[payload]).expect("should decode");
        assert!(article.headline.is_empty());
        assert!(article.date_published.is_none());
        assert!(article.author.name.is_empty());
    }
}
