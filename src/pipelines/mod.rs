//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! and the [cases_info::CasesInfo] pipeline that builds the case information datasets.
pub mod cases_info;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use cases_info::{CasesInfo, Summary};
pub use pipeline::Pipeline;
