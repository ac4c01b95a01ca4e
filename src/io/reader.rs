//! Raw cases reader.
//!
//! Exported index files are JSON files holding a list of results,
//! each result having a `columns` object with the case information.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, error, info};

use crate::cases::{Index, RawCase};
use crate::error::Error;

/// Read the cases of a single index file.
pub fn read_index(path: &Path) -> Result<Vec<RawCase>, Error> {
    let f = File::open(path)?;
    let index: Index = serde_json::from_reader(BufReader::new(f))?;
    Ok(index.results.into_iter().map(|r| r.columns).collect())
}

/// Read every `*.json` index file of `src`.
///
/// Files that can't be read or parsed are logged and skipped.
pub fn read_raw_cases(src: &Path) -> Result<Vec<RawCase>, Error> {
    let src_str = src
        .to_str()
        .ok_or_else(|| Error::Custom(format!("Source path {:?} is not valid unicode", src)))?;
    let pattern = format!("{}/*.json", glob::Pattern::escape(src_str));

    let mut cases = Vec::new();
    for path in glob::glob(&pattern)? {
        let path = match path {
            Ok(p) => p,
            Err(e) => {
                error!("error listing index files: {}", e);
                continue;
            }
        };

        match read_index(&path) {
            Ok(index_cases) => {
                debug!("{:?}: {} cases", path, index_cases.len());
                cases.extend(index_cases);
            }
            Err(e) => error!("skipping {:?}: {:?}", path, e),
        }
    }

    info!("> Read {} raw cases from {:?}", cases.len(), src);
    Ok(cases)
}
