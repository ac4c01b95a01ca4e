//! Reference tables used to enrich cases.
//!
//! - `countries.json` is a list of countries, keyed here by their ISO alpha-3 code,
//! - `originatingbody.json` maps originating body codes to their type and name.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const COUNTRIES_FILE: &str = "countries.json";
pub const ORIGINATING_BODIES_FILE: &str = "originatingbody.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub alpha2: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginatingBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    #[serde(rename = "alpha-3")]
    alpha3: String,
    #[serde(rename = "alpha-2")]
    alpha2: String,
    name: String,
}

/// Read-only lookup context for case normalization.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    countries: HashMap<String, Country>,
    originating_bodies: HashMap<String, OriginatingBody>,
}

impl ReferenceTables {
    pub fn new(
        countries: HashMap<String, Country>,
        originating_bodies: HashMap<String, OriginatingBody>,
    ) -> Self {
        Self {
            countries,
            originating_bodies,
        }
    }

    /// Load both tables from a data folder.
    pub fn from_dir(data: &Path) -> Result<Self, Error> {
        let countries = File::open(data.join(COUNTRIES_FILE))?;
        let originating_bodies = File::open(data.join(ORIGINATING_BODIES_FILE))?;
        Self::from_readers(BufReader::new(countries), BufReader::new(originating_bodies))
    }

    pub fn from_readers<C: Read, O: Read>(countries: C, originating_bodies: O) -> Result<Self, Error> {
        let records: Vec<CountryRecord> = serde_json::from_reader(countries)?;
        let countries: HashMap<String, Country> = records
            .into_iter()
            .map(|c| {
                (
                    c.alpha3,
                    Country {
                        alpha2: c.alpha2.to_lowercase(),
                        name: c.name,
                    },
                )
            })
            .collect();
        let originating_bodies: HashMap<String, OriginatingBody> =
            serde_json::from_reader(originating_bodies)?;

        debug!(
            "loaded {} countries and {} originating bodies",
            countries.len(),
            originating_bodies.len()
        );
        Ok(Self::new(countries, originating_bodies))
    }

    pub fn country(&self, alpha3: &str) -> Option<&Country> {
        self.countries.get(alpha3)
    }

    pub fn originating_body(&self, code: &str) -> Option<&OriginatingBody> {
        self.originating_bodies.get(code)
    }
}
