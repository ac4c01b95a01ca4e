//! Case information step.
//!
//! Builds the case information datasets from the raw index files of a build folder.
//!
//! # Processing
//! 1. Raw cases are read from `<build>/raw/raw_cases_info/*.json`.
//! 1. They go through the filter chain (language, document type, conclusion, denylist).
//! 1. They are normalized, using the reference tables of the data folder.
//! 1. Statistics and the whole normalized corpus are written.
//! 1. Outcome-consistent cases are grouped by article, and written per article,
//!    as a multilabel dataset and as a multiclass dataset.
//!
//! Every output goes to `<build>/raw/cases_info/`.
use std::path::{Path, PathBuf};

use log::info;

use crate::cases::{NormalizedCase, Normalizer, ReferenceTables};
use crate::datasets::{generate_statistics, Partition};
use crate::error::Error;
use crate::filtering::{FilterChain, FilterReport};
use crate::io::{prepare_folder, read_raw_cases, write_json};
use crate::pipelines::Pipeline;

pub const STATISTICS_FILE: &str = "filter.statistics.json";
pub const ALL_CASES_FILE: &str = "raw_cases_info_all.json";
pub const MULTILABEL_FILE: &str = "raw_cases_info_multilabel.json";
pub const MULTICLASS_FILE: &str = "raw_cases_info_multiclass.json";

/// File name of an article dataset.
pub fn article_file_name(article: &str) -> String {
    let article: String = article
        .chars()
        .map(|c| if std::path::is_separator(c) { '_' } else { c })
        .collect();
    format!("raw_cases_info_article_{}.json", article)
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub filter: FilterReport,
    /// number of normalized cases
    pub cases: usize,
    /// number of outcome-consistent cases
    pub consistent: usize,
    /// articles, in the order of their datasets
    pub articles: Vec<String>,
    pub multilabel: usize,
    pub multiclass: usize,
}

pub struct CasesInfo {
    build: PathBuf,
    data: PathBuf,
    force: bool,
}

impl CasesInfo {
    /// * `build` is the build folder, holding `raw/raw_cases_info`.
    /// * `data` holds the reference tables.
    /// * `force` clears the output folder before writing.
    pub fn new(build: PathBuf, data: PathBuf, force: bool) -> Self {
        Self { build, data, force }
    }

    pub fn input_folder(&self) -> PathBuf {
        self.build.join("raw").join("raw_cases_info")
    }

    pub fn output_folder(&self) -> PathBuf {
        self.build.join("raw").join("cases_info")
    }

    fn write_datasets(partition: &Partition, output: &Path) -> Result<(usize, usize), Error> {
        info!("> Generate case info for specific articles");
        for group in partition.groups() {
            let cases: Vec<&NormalizedCase> = partition.group_cases(group).collect();
            info!("  article {}: {} cases", group.article, cases.len());
            write_json(&output.join(article_file_name(&group.article)), &cases)?;
        }

        let multilabel = partition.multilabel();
        write_json(&output.join(MULTILABEL_FILE), &multilabel)?;
        info!("> Generate case info for multilabel dataset [DONE]");

        let multiclass = partition.multiclass();
        write_json(&output.join(MULTICLASS_FILE), &multiclass)?;
        info!("> Generate case info for multiclass [DONE]");

        Ok((multilabel.len(), multiclass.len()))
    }
}

impl Pipeline<Summary> for CasesInfo {
    fn run(&self) -> Result<Summary, Error> {
        let input = self.input_folder();
        let output = self.output_folder();
        info!("Step configuration");
        info!("> Input folder: {:?}", input);
        info!("> Output folder: {:?}", output);
        prepare_folder(&output, self.force)?;

        let tables = ReferenceTables::from_dir(&self.data)?;
        let cases = read_raw_cases(&input)?;

        info!("Filter cases");
        let (cases, filter) = FilterChain::default().apply(cases)?;

        info!("Format cases metadata");
        let cases = Normalizer::new(&tables).normalize_all(cases)?;

        info!("Generate statistics");
        let statistics = generate_statistics(&cases)?;
        write_json(&output.join(STATISTICS_FILE), &statistics)?;
        write_json(&output.join(ALL_CASES_FILE), &cases)?;

        info!("Generate case listing for datasets");
        let nb_cases = cases.len();
        let partition = Partition::new(cases);
        let (multilabel, multiclass) = Self::write_datasets(&partition, &output)?;

        Ok(Summary {
            filter,
            cases: nb_cases,
            consistent: partition.cases().len(),
            articles: partition.groups().iter().map(|g| g.article.clone()).collect(),
            multilabel,
            multiclass,
        })
    }
}
