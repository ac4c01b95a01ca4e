//! Merging of outcome elements sharing a [MergeKey].
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::types::{MergeKey, OutcomeElement};

/// Folds elements sharing a merge key into a single one.
///
/// The merged element keeps the position of the first one,
/// later elements overwrite the fields they have.
pub fn merge(elements: Vec<OutcomeElement>) -> Vec<OutcomeElement> {
    let mut merged: Vec<OutcomeElement> = Vec::with_capacity(elements.len());
    let mut index: HashMap<MergeKey, usize> = HashMap::with_capacity(elements.len());

    for element in elements {
        match index.entry(element.merge_key()) {
            Entry::Occupied(position) => merged[*position.get()].update(element),
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(element);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conclusion::OutcomeType;

    fn element(text: &str, article: Option<&str>) -> OutcomeElement {
        let mut e = OutcomeElement::new(text.to_string());
        e.kind = OutcomeType::Violation;
        e.article = article.map(String::from);
        e.base_article = article.map(String::from);
        e
    }

    #[test]
    fn merge_same_key() {
        let first = element("Violation of Article 3", Some("3"));
        let mut second = element("Violation of Article 3", Some("3"));
        second.mentions = Some(vec!["Substantive aspect".to_string()]);

        let merged = merge(vec![first, second.clone()]);
        assert_eq!(merged, vec![second]);
    }

    #[test]
    fn merge_keeps_order() {
        let a = element("Violation of Article 3", Some("3"));
        let b = element("Violation of Article 13", Some("13"));
        let c = element("Violation of Article 3", Some("3"));
        let merged = merge(vec![a.clone(), b.clone(), c]);
        assert_eq!(merged, vec![a, b]);
    }

    #[test]
    fn merge_distinct_articles_same_element() {
        let a = element("Violation of Art. 5-1 and 5-4", Some("5-4"));
        let b = element("Violation of Art. 5-1 and 5-4", Some("5-1"));
        assert_eq!(merge(vec![a, b]).len(), 2);
    }

    #[test]
    fn merge_element_only() {
        let a = OutcomeElement::new("Costs award".to_string());
        let mut b = OutcomeElement::new("Costs award".to_string());
        b.details = Some(vec!["partial".to_string()]);
        assert_eq!(merge(vec![a, b.clone()]), vec![b]);
    }
}
