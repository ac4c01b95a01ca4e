/*! Conclusion parsing

Turns a conclusion narrative into a list of [OutcomeElement].

Parsing is done in four stages:
1. [segment] cuts the narrative into candidate clauses,
1. [structure] separates clause text from details and mentions,
1. [classify] gets the outcome type and the articles of each clause,
1. [merge] folds elements that describe the same outcome.

Parsing never fails: clauses that cannot be understood end up as `other` elements.
!*/
mod article;
mod classify;
mod merge;
mod segment;
mod types;

pub use article::{base_article, base_articles, tokenize};
pub use classify::{classify, general_article, protocol_article};
pub use merge::merge;
pub use segment::{segment, structure, Clause};
pub use types::{MergeKey, OutcomeElement, OutcomeType};

/// Parse a conclusion narrative.
///
/// ```
/// use echr_cases::conclusion::{parse, OutcomeType};
///
/// let elements = parse("Violation of Article 3 - Prohibition of torture (Substantive aspect);No violation of Article 13");
/// assert_eq!(elements.len(), 2);
/// assert_eq!(elements[1].kind, OutcomeType::NoViolation);
/// assert_eq!(elements[1].article.as_deref(), Some("13"));
/// ```
pub fn parse(narrative: &str) -> Vec<OutcomeElement> {
    let candidates = segment(narrative);
    let clauses = structure(&candidates);
    let elements = clauses.iter().flat_map(classify).collect();
    merge(elements)
}
