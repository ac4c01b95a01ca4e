/*! Filtering utilities

Filters operate on raw cases, before any normalization.

Filters implement [filter::Filter], and are grouped in [case::FilterKind] so that they can be
chained by a [chain::FilterChain] that reports the number of cases kept at each step.
!*/
mod case;
mod chain;
mod filter;

pub use case::{
    ClearConclusion, Denylist, DocType, FilterKind, Language, DENYLIST, OUTCOME_MARKERS,
};
pub use chain::{FilterChain, FilterReport, StageCount};
pub use filter::Filter;
