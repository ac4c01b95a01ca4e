//! Case normalization.
//!
//! Structures the free-text fields of raw cases: parties, conclusion, articles,
//! semicolon-separated lists, and enriches them with the reference tables.
use std::collections::BTreeSet;

use log::{debug, info};
use serde_json::{Map, Value};

use super::case::NormalizedCase;
use super::raw::RawCase;
use super::reference::ReferenceTables;
use crate::conclusion::{self, base_articles, tokenize};
use crate::error::Error;

const DROPPED_FIELDS: [&str; 4] = [
    "isplaceholder",
    "documentcollectionid2",
    "doctype",
    "meetingnumber",
];
const RENAMED_FIELDS: [(&str, &str); 2] = [("Rank", "rank"), ("kpdateAsText", "kpdate")];

const TITLE_PREFIX: &str = "CASE OF ";

/// Get the parties from a case title.
///
/// ```
/// use echr_cases::cases::format_parties;
/// assert_eq!(
///     format_parties("CASE OF DOE v. TURKEY (No. 2)"),
///     vec!["DOE", "TURKEY"]
/// );
/// ```
pub fn format_parties(docname: &str) -> Vec<String> {
    let mut parties = docname.strip_prefix(TITLE_PREFIX).unwrap_or(docname);
    if parties.ends_with(')') {
        parties = parties.split('(').next().unwrap_or_default();
    }
    parties
        .split(" v. ")
        .map(|p| p.trim().to_string())
        .collect()
}

/// Base articles of a `;`-separated article string.
pub fn format_article(article: &str) -> BTreeSet<String> {
    let articles: Vec<String> = article
        .to_lowercase()
        .split(';')
        .flat_map(tokenize)
        .collect();
    base_articles(&articles).into_iter().collect()
}

/// Every article and sub-article token of a `;`-separated article string.
pub fn format_subarticle(article: &str) -> BTreeSet<String> {
    article
        .split(';')
        .flat_map(|a| a.split('+'))
        .map(String::from)
        .collect()
}

/// Split a `;`-separated list, trimming elements. Empty strings give empty lists.
pub fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(';').map(|e| e.trim().to_string()).collect()
}

/// Removes a field and returns it as a string.
/// Numbers are converted, other non-string values are discarded.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn get_string(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalizes raw cases using a set of reference tables.
pub struct Normalizer<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> Normalizer<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Normalize a single case.
    ///
    /// Fails if a required field is missing, or if the respondent or originating body
    /// are not in the reference tables.
    pub fn normalize(&self, raw: RawCase) -> Result<NormalizedCase, Error> {
        let mut fields = raw.into_inner();

        let itemid = take_string(&mut fields, "itemid").ok_or(Error::MissingField {
            itemid: String::new(),
            field: "itemid",
        })?;
        let missing = |field: &'static str| Error::MissingField {
            itemid: itemid.clone(),
            field,
        };

        let docname = take_string(&mut fields, "docname").ok_or_else(|| missing("docname"))?;
        let raw_conclusion =
            take_string(&mut fields, "conclusion").ok_or_else(|| missing("conclusion"))?;
        let raw_articles = take_string(&mut fields, "article").ok_or_else(|| missing("article"))?;
        let respondent = get_string(&fields, "respondent").ok_or_else(|| missing("respondent"))?;
        let body_code =
            get_string(&fields, "originatingbody").ok_or_else(|| missing("originatingbody"))?;

        let country_code = respondent.split(';').next().unwrap_or_default();
        let country = self
            .tables
            .country(country_code)
            .ok_or_else(|| Error::UnknownCountry {
                itemid: itemid.clone(),
                code: country_code.to_string(),
            })?
            .clone();
        let body = self
            .tables
            .originating_body(&body_code)
            .ok_or_else(|| Error::UnknownOriginatingBody {
                itemid: itemid.clone(),
                code: body_code.clone(),
            })?;

        let mut list =
            |field: &str| split_list(&take_string(&mut fields, field).unwrap_or_default());
        let externalsources = list("externalsources");
        let documentcollectionid = list("documentcollectionid");
        let issue = list("issue");
        let representedby = list("representedby");

        let extractedappno = take_string(&mut fields, "extractedappno")
            .unwrap_or_default()
            .split(';')
            .map(|e| e.trim().to_string())
            .collect();
        let kpthesaurus = take_string(&mut fields, "kpthesaurus")
            .unwrap_or_default()
            .split(';')
            .map(String::from)
            .collect();
        let scl = take_string(&mut fields, "scl").unwrap_or_default();
        let scl = if scl.trim().is_empty() {
            Vec::new()
        } else {
            scl.split(';').map(String::from).collect()
        };

        for (from, to) in RENAMED_FIELDS.iter() {
            if let Some(v) = fields.remove(*from) {
                fields.insert(to.to_string(), v);
            }
        }
        for field in DROPPED_FIELDS.iter() {
            fields.remove(*field);
        }

        Ok(NormalizedCase {
            parties: format_parties(&docname),
            conclusion: conclusion::parse(&raw_conclusion),
            article: format_article(&raw_articles),
            paragraphs: format_subarticle(&raw_articles),
            itemid,
            docname,
            raw_conclusion,
            raw_articles,
            externalsources,
            documentcollectionid,
            issue,
            representedby,
            extractedappno,
            kpthesaurus,
            scl,
            country,
            originatingbody_type: body.kind.clone(),
            originatingbody_name: body.name.clone(),
            mc_conclusion: None,
            metadata: fields,
        })
    }

    /// Normalize every case, stopping at the first failure.
    pub fn normalize_all(&self, cases: Vec<RawCase>) -> Result<Vec<NormalizedCase>, Error> {
        let total = cases.len();
        info!("> Format cases ({})", total);
        let normalized = cases
            .into_iter()
            .enumerate()
            .map(|(idx, case)| {
                debug!("formatting case {}/{}: {}", idx + 1, total, case.itemid());
                self.normalize(case)
            })
            .collect::<Result<Vec<_>, Error>>()?;
        info!("> Format cases [DONE]");
        Ok(normalized)
    }
}
