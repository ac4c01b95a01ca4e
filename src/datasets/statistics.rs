//! Attribute statistics.
//!
//! For each attribute, counts the number of distinct values across cases (`cardinal`),
//! and the ratio between that number and the number of cases (`density`).
use std::collections::{BTreeMap, HashSet};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cases::NormalizedCase;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeStatistics {
    pub cardinal: usize,
    pub density: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub attributes: BTreeMap<String, AttributeStatistics>,
}

/// Distinct values of an attribute.
///
/// Values are compared using their JSON representation.
/// Only conclusion element texts are taken into account, not their details and mentions.
fn distinct_values(attribute: &str, cases: &[Value]) -> HashSet<String> {
    let mut values = HashSet::new();
    for case in cases {
        match case.get(attribute) {
            Some(Value::Array(items)) if attribute == "conclusion" => {
                values.extend(
                    items
                        .iter()
                        .filter_map(|e| e.get("element"))
                        .map(Value::to_string),
                );
            }
            Some(Value::Array(items)) => values.extend(items.iter().map(Value::to_string)),
            Some(v @ Value::String(s)) if !s.trim().is_empty() => {
                values.insert(v.to_string());
            }
            _ => (),
        }
    }
    values
}

/// Compute statistics on the attributes of the first case.
pub fn generate_statistics(cases: &[NormalizedCase]) -> Result<Statistics, Error> {
    let cases = cases
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<Value>, _>>()?;

    let attributes: Vec<String> = match cases.first().and_then(Value::as_object) {
        Some(first) => first.keys().cloned().collect(),
        None => {
            warn!("no case to generate statistics from");
            return Ok(Statistics::default());
        }
    };

    let mut stats = Statistics::default();
    info!("{:<30} {:>10} {:>10}", "Attribute", "Cardinal", "Density");
    for attribute in attributes {
        let cardinal = distinct_values(&attribute, &cases).len();
        let density = cardinal as f64 / cases.len() as f64;
        info!("{:<30} {:>10} {:>10.4}", attribute, cardinal, density);
        stats
            .attributes
            .insert(attribute, AttributeStatistics { cardinal, density });
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};

    use super::*;
    use crate::conclusion::OutcomeElement;

    fn case(itemid: &str, elements: &[&str], issue: &[&str], judge: &str) -> NormalizedCase {
        let mut metadata = Map::new();
        metadata.insert("judges".to_string(), json!(judge));
        metadata.insert("rank".to_string(), json!(1.5));
        NormalizedCase {
            itemid: itemid.to_string(),
            conclusion: elements
                .iter()
                .map(|e| OutcomeElement::new(e.to_string()))
                .collect(),
            issue: issue.iter().map(|s| s.to_string()).collect(),
            metadata,
            ..Default::default()
        }
    }

    #[test]
    fn statistics() {
        let cases = vec![
            case("001-1", &["Violation of Art. 3", "Costs"], &["a", "b"], "X"),
            case("001-2", &["Violation of Art. 3"], &["b"], " "),
            case("001-3", &["No violation of Art. 6"], &[], "Y"),
            case("001-4", &["Costs"], &["c"], "X"),
        ];
        let stats = generate_statistics(&cases).unwrap();

        let get = |k: &str| stats.attributes[k];
        assert_eq!(get("itemid").cardinal, 4);
        assert_eq!(get("itemid").density, 1.0);
        assert_eq!(get("conclusion").cardinal, 3);
        assert_eq!(get("issue").cardinal, 3);
        assert_eq!(get("issue").density, 0.75);
        assert_eq!(get("judges").cardinal, 2);
        // not a string nor a list
        assert_eq!(get("rank").cardinal, 0);
        assert_eq!(get("country").cardinal, 0);
        assert!(!stats.attributes.contains_key("mc_conclusion"));
    }

    #[test]
    fn no_cases() {
        let stats = generate_statistics(&[]).unwrap();
        assert!(stats.attributes.is_empty());
    }

    #[test]
    fn serialize() {
        let stats = generate_statistics(&[case("001-1", &[], &[], "X")]).unwrap();
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["attributes"]["itemid"], json!({"cardinal": 1, "density": 1.0}));
    }
}
