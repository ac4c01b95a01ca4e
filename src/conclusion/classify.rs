//! Clause classification and article extraction.
use log::debug;

use super::article::{base_article, tokenize};
use super::segment::Clause;
use super::types::{OutcomeElement, OutcomeType};

const PROTOCOL: &str = "protocol no.";

// applied in order
const CONJUNCTIONS: [(&str, &str); 3] = [(" and art. ", ""), (" and of ", "+"), (" and ", "+")];

/// Builds the `pN-M` article of a clause referring to an article of a protocol,
/// as in `violation of article 1 of protocol no. 1`.
pub fn protocol_article(clause: &str) -> Option<String> {
    let mut parts = clause.split(PROTOCOL);
    let before = parts.next()?;
    let after = parts.next()?;

    let words: Vec<&str> = before.split_whitespace().collect();
    let article = words.len().checked_sub(2).map(|i| words[i])?;
    let protocol = after.split_whitespace().next()?;

    Some(format!("p{}-{}", protocol, article))
}

/// Finds the compound article string of a clause,
/// as in `violation of art. 5-1 and 5-4` (`5-1+5-4`).
pub fn general_article(clause: &str) -> Option<String> {
    let mut clause = clause.to_string();
    for (pattern, replacement) in CONJUNCTIONS.iter() {
        if clause.contains(pattern) {
            clause = clause.replace(pattern, replacement);
        }
    }

    let words: Vec<&str> = clause.split_whitespace().collect();
    let position = words.iter().position(|w| w.starts_with("art"))?;
    let word = words[position];

    // art.6-1
    if word.starts_with("art.") && word.len() > 4 {
        Some(word["art.".len()..].to_string())
    } else {
        words.get(position + 1).map(|w| w.to_string())
    }
}

/// Classifies a clause and yields its outcome elements.
///
/// `other` clauses are always kept as is, without article. Every article found
/// in the clause yields an additional element. A violation or no-violation clause where no
/// article can be found is kept as an `other` element.
pub fn classify(clause: &Clause) -> Vec<OutcomeElement> {
    let lower = clause.element.to_lowercase();
    let lower = lower.trim();
    let kind = OutcomeType::from_clause(lower);

    let element = OutcomeElement {
        element: clause.element.clone(),
        kind,
        article: None,
        base_article: None,
        details: clause.details.clone(),
        mentions: clause.mentions.clone(),
    };

    let article = protocol_article(lower).or_else(|| match kind {
        OutcomeType::Other => None,
        _ => general_article(lower),
    });

    let articles = match article {
        Some(a) => tokenize(&a),
        None if kind == OutcomeType::Other => return vec![element],
        None => {
            debug!("no article found in {:?}", clause.element);
            return vec![OutcomeElement {
                kind: OutcomeType::Other,
                ..element
            }];
        }
    };

    let mut elements = Vec::with_capacity(articles.len() + 1);
    if kind == OutcomeType::Other {
        elements.push(element.clone());
    }
    for article in articles {
        let mut e = element.clone();
        e.base_article = Some(base_article(&article));
        e.article = Some(article);
        elements.push(e);
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn articles(elements: &[OutcomeElement]) -> Vec<Option<&str>> {
        elements.iter().map(|e| e.article.as_deref()).collect()
    }

    #[test]
    fn protocol() {
        assert_eq!(
            protocol_article("violation of article 1 of protocol no. 1 - protection of property"),
            Some("p1-1".to_string())
        );
        assert_eq!(
            protocol_article("no violation of article 2 of protocol no. 4 - freedom of movement"),
            Some("p4-2".to_string())
        );
        assert_eq!(protocol_article("violation of article 3"), None);
        assert_eq!(protocol_article("protocol no. 1"), None);
        assert_eq!(protocol_article("article 1 of protocol no."), None);
    }

    #[test]
    fn general() {
        assert_eq!(
            general_article("violation of article 3 - prohibition of torture"),
            Some("3".to_string())
        );
        assert_eq!(general_article("violation of art. 6-1"), Some("6-1".to_string()));
        assert_eq!(general_article("violation of art.6-1"), Some("6-1".to_string()));
        assert_eq!(
            general_article("no violation of art. 5-1 and 5-4"),
            Some("5-1+5-4".to_string())
        );
        assert_eq!(
            general_article("violation of article 8 and of article 14"),
            Some("8+article".to_string())
        );
        assert_eq!(general_article("violation of article"), None);
        assert_eq!(general_article("violation"), None);
    }

    #[test]
    fn general_drops_repeated_art() {
        assert_eq!(
            general_article("violation of art. 3 and art. 13"),
            Some("313".to_string())
        );
    }

    #[test]
    fn classify_violation() {
        let clause = Clause {
            element: "Violation of Article 3 - Prohibition of torture".to_string(),
            details: Some(vec!["Substantive aspect".to_string()]),
            mentions: None,
        };
        let elements = classify(&clause);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind, OutcomeType::Violation);
        assert_eq!(elements[0].article.as_deref(), Some("3"));
        assert_eq!(elements[0].base_article.as_deref(), Some("3"));
        assert_eq!(elements[0].details, clause.details);
    }

    #[test]
    fn classify_conjunction() {
        let elements = classify(&Clause::new("No violation of Art. 5-1 and 5-4"));
        assert_eq!(articles(&elements), vec![Some("5-4"), Some("5-1")]);
        assert!(elements
            .iter()
            .all(|e| e.kind == OutcomeType::NoViolation && e.base_article.as_deref() == Some("5")));
    }

    #[test]
    fn classify_other() {
        let elements = classify(&Clause::new("Just satisfaction reserved"));
        assert_eq!(elements, vec![OutcomeElement::new("Just satisfaction reserved".to_string())]);
    }

    #[test]
    fn classify_other_with_protocol() {
        let elements = classify(&Clause::new(
            "Not necessary to examine Article 1 of Protocol No. 1",
        ));
        assert_eq!(elements.len(), 2);
        assert_eq!(articles(&elements), vec![None, Some("p1-1")]);
        assert_eq!(elements[0].base_article, None);
        assert_eq!(elements[1].base_article.as_deref(), Some("p1-1"));
        assert!(elements.iter().all(|e| e.kind == OutcomeType::Other));
    }

    #[test]
    fn classify_without_article() {
        let elements = classify(&Clause::new("Violation of P1-1"));
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind, OutcomeType::Other);
        assert_eq!(elements[0].article, None);
    }
}
