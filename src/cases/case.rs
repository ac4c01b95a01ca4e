//! Normalized case information.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::reference::Country;
use crate::conclusion::OutcomeElement;

/// A case whose free-text fields have been structured.
///
/// Raw conclusion and article strings are kept under `__conclusion` and `__articles`.
/// Fields that are not normalized are kept as is in `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCase {
    pub itemid: String,
    pub docname: String,
    pub parties: Vec<String>,
    pub conclusion: Vec<OutcomeElement>,
    #[serde(rename = "__conclusion")]
    pub raw_conclusion: String,
    pub article: BTreeSet<String>,
    #[serde(rename = "__articles")]
    pub raw_articles: String,
    pub paragraphs: BTreeSet<String>,
    pub externalsources: Vec<String>,
    pub documentcollectionid: Vec<String>,
    pub issue: Vec<String>,
    pub representedby: Vec<String>,
    pub extractedappno: Vec<String>,
    pub kpthesaurus: Vec<String>,
    pub scl: Vec<String>,
    pub country: Country,
    pub originatingbody_type: String,
    pub originatingbody_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mc_conclusion: Option<Vec<OutcomeElement>>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl NormalizedCase {
    /// Conclusion elements carrying an article.
    pub fn article_elements(&self) -> impl Iterator<Item = &OutcomeElement> {
        self.conclusion.iter().filter(|e| e.article.is_some())
    }

    /// Violation (`true`) and no-violation (`false`) labels per article.
    pub fn outcome_labels(&self) -> BTreeSet<(&str, bool)> {
        self.conclusion
            .iter()
            .filter_map(|e| match (e.article.as_deref(), e.kind.label()) {
                (Some(article), Some(label)) => Some((article, label)),
                _ => None,
            })
            .collect()
    }

    /// Whether an article is both violated and not violated.
    pub fn has_opposed_classes(&self) -> bool {
        let labels = self.outcome_labels();
        labels
            .iter()
            .any(|(article, label)| labels.contains(&(*article, !label)))
    }

    /// Distinct articles referenced by the conclusion, whatever the outcome type.
    pub fn referenced_articles(&self) -> BTreeSet<&str> {
        self.article_elements()
            .filter_map(|e| e.article.as_deref())
            .collect()
    }

    /// First conclusion element for the given article.
    pub fn first_element_for(&self, article: &str) -> Option<&OutcomeElement> {
        self.conclusion
            .iter()
            .find(|e| e.article.as_deref() == Some(article))
    }
}
