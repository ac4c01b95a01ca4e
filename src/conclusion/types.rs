//! Outcome elements.
use serde::{Deserialize, Serialize};

/// Outcome of a conclusion clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeType {
    #[serde(rename = "violation")]
    Violation,
    #[serde(rename = "no-violation")]
    NoViolation,
    #[serde(rename = "other")]
    Other,
}

impl OutcomeType {
    /// Classify a lower-cased, trimmed clause.
    pub fn from_clause(clause: &str) -> Self {
        if clause.starts_with("violation") {
            OutcomeType::Violation
        } else if clause.starts_with("no-violation") || clause.starts_with("no violation") {
            OutcomeType::NoViolation
        } else {
            OutcomeType::Other
        }
    }

    /// `Some(true)` for a violation, `Some(false)` for a no-violation.
    pub fn label(&self) -> Option<bool> {
        match self {
            OutcomeType::Violation => Some(true),
            OutcomeType::NoViolation => Some(false),
            OutcomeType::Other => None,
        }
    }
}

impl Default for OutcomeType {
    fn default() -> Self {
        OutcomeType::Other
    }
}

/// One structured outcome of a conclusion narrative.
///
/// `article` and `base_article` are only set when an article reference
/// could be recovered from the clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutcomeElement {
    pub element: String,
    #[serde(rename = "type", default)]
    pub kind: OutcomeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_article: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<String>>,
}

/// Key under which two elements are considered the same outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MergeKey {
    Article {
        article: String,
        base_article: String,
        element: String,
    },
    Element(String),
}

impl OutcomeElement {
    pub fn new(element: String) -> Self {
        Self {
            element,
            ..Default::default()
        }
    }

    pub fn merge_key(&self) -> MergeKey {
        match (&self.article, &self.base_article) {
            (Some(article), Some(base_article)) => MergeKey::Article {
                article: article.clone(),
                base_article: base_article.clone(),
                element: self.element.clone(),
            },
            _ => MergeKey::Element(self.element.clone()),
        }
    }

    /// Overwrite fields with the ones present in `other`.
    pub fn update(&mut self, other: OutcomeElement) {
        self.element = other.element;
        self.kind = other.kind;
        if other.article.is_some() {
            self.article = other.article;
        }
        if other.base_article.is_some() {
            self.base_article = other.base_article;
        }
        if other.details.is_some() {
            self.details = other.details;
        }
        if other.mentions.is_some() {
            self.mentions = other.mentions;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(
            OutcomeType::from_clause("violation of article 3"),
            OutcomeType::Violation
        );
        assert_eq!(
            OutcomeType::from_clause("no violation of article 3"),
            OutcomeType::NoViolation
        );
        assert_eq!(
            OutcomeType::from_clause("no-violation of art. 6-1"),
            OutcomeType::NoViolation
        );
        assert_eq!(
            OutcomeType::from_clause("remainder inadmissible"),
            OutcomeType::Other
        );
        // case sensitive, callers lower-case first
        assert_eq!(OutcomeType::from_clause("Violation"), OutcomeType::Other);
    }

    #[test]
    fn merge_key_needs_both_articles() {
        let mut e = OutcomeElement::new("Violation of Art. 3".to_string());
        e.article = Some("3".to_string());
        assert_eq!(e.merge_key(), MergeKey::Element("Violation of Art. 3".to_string()));

        e.base_article = Some("3".to_string());
        assert!(matches!(e.merge_key(), MergeKey::Article { .. }));
    }

    #[test]
    fn serialize_skips_absent() {
        let mut e = OutcomeElement::new("Violation of Article 13".to_string());
        e.kind = OutcomeType::Violation;
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"element": "Violation of Article 13", "type": "violation"})
        );
    }

    #[test]
    fn update_keeps_missing_fields() {
        let mut first = OutcomeElement::new("a".to_string());
        first.details = Some(vec!["d".to_string()]);
        let mut second = OutcomeElement::new("a".to_string());
        second.kind = OutcomeType::Violation;
        first.update(second);
        assert_eq!(first.kind, OutcomeType::Violation);
        assert_eq!(first.details, Some(vec!["d".to_string()]));
    }
}
