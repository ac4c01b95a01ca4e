//! Case-level filtering.
use std::collections::HashSet;

use super::Filter;
use crate::cases::RawCase;

/// Cases that are known to be too hard to process.
pub const DENYLIST: [&str; 3] = ["001-154354", "001-108395", "001-79411"];

/// Markers of a conclusion that holds at least one outcome.
pub const OUTCOME_MARKERS: [&str; 4] = ["No-violation", "No violation", "Violation", "violation"];

pub enum FilterKind {
    Language(Language),
    DocType(DocType),
    ClearConclusion(ClearConclusion),
    Denylist(Denylist),
}

impl FilterKind {
    /// Step label, used when reporting.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Language(_) => "Remove non-english cases",
            Self::DocType(_) => "Keep only cases with a judgment document",
            Self::ClearConclusion(_) => "Keep cases with a clear conclusion",
            Self::Denylist(_) => "Remove a specific list of cases hard to process",
        }
    }
}

impl Default for FilterKind {
    fn default() -> Self {
        FilterKind::Language(Language::default())
    }
}

impl Filter<&RawCase> for FilterKind {
    fn detect(&self, case: &RawCase) -> bool {
        match self {
            Self::Language(f) => f.detect(case),
            Self::DocType(f) => f.detect(case),
            Self::ClearConclusion(f) => f.detect(case),
            Self::Denylist(f) => f.detect(case),
        }
    }
}

/// Keeps cases written in a given language (`languageisocode`).
pub struct Language {
    code: String,
}

impl Language {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }
}

impl Default for Language {
    /// English (`ENG`).
    fn default() -> Self {
        Self::new("ENG")
    }
}

impl Filter<&RawCase> for Language {
    fn detect(&self, case: &RawCase) -> bool {
        case.get_str("languageisocode") == Some(self.code.as_str())
    }
}

/// Keeps cases of a given document type (`doctype`).
pub struct DocType {
    doctype: String,
}

impl DocType {
    pub fn new(doctype: &str) -> Self {
        Self {
            doctype: doctype.to_string(),
        }
    }
}

impl Default for DocType {
    /// Judgments (`HEJUD`).
    fn default() -> Self {
        Self::new("HEJUD")
    }
}

impl Filter<&RawCase> for DocType {
    fn detect(&self, case: &RawCase) -> bool {
        case.get_str("doctype") == Some(self.doctype.as_str())
    }
}

/// Keeps cases whose raw conclusion contains at least one outcome marker.
///
/// Matching is case sensitive.
pub struct ClearConclusion {
    markers: Vec<String>,
}

impl ClearConclusion {
    pub fn new(markers: &[&str]) -> Self {
        Self {
            markers: markers.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl Default for ClearConclusion {
    fn default() -> Self {
        Self::new(&OUTCOME_MARKERS)
    }
}

impl Filter<&RawCase> for ClearConclusion {
    fn detect(&self, case: &RawCase) -> bool {
        match case.get_str("conclusion") {
            Some(conclusion) => self.markers.iter().any(|m| conclusion.contains(m.as_str())),
            None => false,
        }
    }
}

/// Removes cases by identifier.
pub struct Denylist {
    itemids: HashSet<String>,
}

impl Denylist {
    pub fn new(itemids: &[&str]) -> Self {
        Self {
            itemids: itemids.iter().map(|i| i.to_string()).collect(),
        }
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(&DENYLIST)
    }
}

impl Filter<&RawCase> for Denylist {
    fn detect(&self, case: &RawCase) -> bool {
        !self.itemids.contains(case.itemid())
    }
}
