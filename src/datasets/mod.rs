/*! Dataset generation

- [partition::Partition] groups outcome-consistent cases by article, and builds the
  multilabel and multiclass views,
- [statistics] describes the attributes of a set of cases.
!*/
mod partition;
mod statistics;

pub use partition::{is_outcome_consistent, ArticleGroup, OutcomeCount, OutcomeTally, Partition};
pub use statistics::{generate_statistics, AttributeStatistics, Statistics};
