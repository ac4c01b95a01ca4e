//! Clause segmentation and structuring.
//!
//! A narrative is a `;`-separated list of clauses, each clause possibly followed
//! by one or more parenthesized groups:
//!
//! ```text
//! Violation of Article 3 - Prohibition of torture (Article 3 - Degrading treatment;Inhuman treatment) (Substantive aspect);No violation of Article 13
//! ```
//!
//! The first group right after a clause holds its details, a group that
//! follows another group (nothing but spaces in between) holds mentions of the
//! previous clause.
use log::debug;

/// A clause of a narrative, not classified yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clause {
    pub element: String,
    pub details: Option<Vec<String>>,
    pub mentions: Option<Vec<String>>,
}

impl Clause {
    pub fn new(element: &str) -> Self {
        Self {
            element: element.to_string(),
            ..Default::default()
        }
    }

    fn add_mentions(&mut self, mentions: Vec<String>) {
        match &mut self.mentions {
            Some(m) => m.extend(mentions),
            None => self.mentions = Some(mentions),
        }
    }
}

/// Cuts the narrative into candidate clauses.
///
/// Candidates that carry a detail group are kept whole, the others are split
/// on `;`. Empty candidates are discarded.
pub fn segment(narrative: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    for chunk in narrative.split(')').filter(|c| !c.is_empty()) {
        if chunk.contains('(') {
            candidates.push(chunk);
        } else {
            candidates.extend(chunk.split(';'));
        }
    }
    candidates.retain(|c| !c.is_empty());
    candidates
}

/// Builds clauses from candidates.
///
/// Clauses that precede the last one of a candidate (`a;b (details)` yields `a`)
/// are appended after every other clause, without details.
pub fn structure(candidates: &[&str]) -> Vec<Clause> {
    let mut clauses: Vec<Clause> = Vec::with_capacity(candidates.len());
    let mut leftovers = Vec::new();

    for candidate in candidates {
        let mut groups = candidate.split('(');
        let head = groups.next().unwrap_or_default();
        // anything after a second '(' is dropped
        let group: Option<Vec<String>> = groups
            .next()
            .map(|g| g.split(';').map(String::from).collect());

        let mut pieces: Vec<&str> = head
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let element = match pieces.pop() {
            Some(element) => element,
            None => {
                match (group, clauses.last_mut()) {
                    (Some(group), Some(previous)) => previous.add_mentions(group),
                    (Some(group), None) => {
                        debug!("dropping leading group {:?}", group);
                    }
                    _ => (),
                }
                continue;
            }
        };

        leftovers.extend(pieces.into_iter().map(Clause::new));
        clauses.push(Clause {
            element: element.to_string(),
            details: group,
            mentions: None,
        });
    }

    clauses.extend(leftovers);
    clauses
}
