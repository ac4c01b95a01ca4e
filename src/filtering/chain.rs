//! Ordered application of case filters.
use log::info;

use super::case::{ClearConclusion, Denylist, DocType, FilterKind, Language};
use super::Filter;
use crate::cases::RawCase;
use crate::error::Error;

/// Number of cases remaining after a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCount {
    pub description: &'static str,
    pub remaining: usize,
}

/// Cardinalities observed while filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub total: usize,
    pub stages: Vec<StageCount>,
}

impl FilterReport {
    /// Number of cases kept by the whole chain.
    pub fn remaining(&self) -> usize {
        self.stages.last().map_or(self.total, |s| s.remaining)
    }
}

/// Filters applied one after the other.
pub struct FilterChain {
    filters: Vec<FilterKind>,
}

impl FilterChain {
    pub fn new(filters: Vec<FilterKind>) -> Self {
        Self { filters }
    }

    /// Apply every filter in order.
    ///
    /// Fails with [Error::EmptyInput] when there is no case to filter.
    pub fn apply(&self, cases: Vec<RawCase>) -> Result<(Vec<RawCase>, FilterReport), Error> {
        let total = cases.len();
        info!("> Total number of cases before filtering: {}", total);
        if total == 0 {
            return Err(Error::EmptyInput);
        }

        let mut cases = cases;
        let mut stages = Vec::with_capacity(self.filters.len());
        for filter in &self.filters {
            info!("> {}", filter.description());
            cases.retain(|case| filter.detect(case));
            info!(
                "  remaining: {} ({:.4}%)",
                cases.len(),
                100.0 * cases.len() as f64 / total as f64
            );
            stages.push(StageCount {
                description: filter.description(),
                remaining: cases.len(),
            });
        }
        info!("> Final number of cases: {}", cases.len());

        Ok((cases, FilterReport { total, stages }))
    }
}

impl Default for FilterChain {
    /// language, document type, clear conclusion and denylist filters.
    fn default() -> Self {
        Self::new(vec![
            FilterKind::Language(Language::default()),
            FilterKind::DocType(DocType::default()),
            FilterKind::ClearConclusion(ClearConclusion::default()),
            FilterKind::Denylist(Denylist::default()),
        ])
    }
}
