//! Article-based partitioning of cases.
use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cases::NormalizedCase;

/// Outcome counts of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCount {
    pub violation: usize,
    #[serde(rename = "no-violation")]
    pub no_violation: usize,
    pub total: usize,
}

impl OutcomeCount {
    fn add(&mut self, violation: bool) {
        if violation {
            self.violation += 1;
        } else {
            self.no_violation += 1;
        }
        self.total += 1;
    }
}

/// Outcome counts by article.
pub type OutcomeTally = BTreeMap<String, OutcomeCount>;

/// Cases having an outcome for a given article.
///
/// A case is listed once per violation or no-violation element it has for the article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleGroup {
    pub article: String,
    pub count: OutcomeCount,
    // indices in Partition::cases
    members: Vec<usize>,
}

impl ArticleGroup {
    fn new(article: &str) -> Self {
        Self {
            article: article.to_string(),
            count: OutcomeCount::default(),
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A case is kept if it has at least one outcome,
/// and no article is both violated and not violated.
pub fn is_outcome_consistent(case: &NormalizedCase) -> bool {
    !case.outcome_labels().is_empty() && !case.has_opposed_classes()
}

/// Outcome-consistent cases, grouped by article.
///
/// Groups are in order of first appearance of their article.
#[derive(Debug, Clone)]
pub struct Partition {
    cases: Vec<NormalizedCase>,
    groups: Vec<ArticleGroup>,
}

impl Partition {
    pub fn new(cases: Vec<NormalizedCase>) -> Self {
        let total = cases.len();
        let cases: Vec<NormalizedCase> = cases.into_iter().filter(is_outcome_consistent).collect();
        info!(
            "> Outcome-consistent cases: {} ({} removed)",
            cases.len(),
            total - cases.len()
        );

        let mut groups: Vec<ArticleGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (idx, case) in cases.iter().enumerate() {
            for element in &case.conclusion {
                let (article, violation) = match (element.article.as_deref(), element.kind.label()) {
                    (Some(article), Some(violation)) => (article, violation),
                    _ => continue,
                };

                let position = *index.entry(article.to_string()).or_insert_with(|| {
                    groups.push(ArticleGroup::new(article));
                    groups.len() - 1
                });

                let group = &mut groups[position];
                group.count.add(violation);
                group.members.push(idx);
            }
        }

        debug!("{} article groups", groups.len());
        Self { cases, groups }
    }

    /// Every outcome-consistent case.
    pub fn cases(&self) -> &[NormalizedCase] {
        &self.cases
    }

    pub fn groups(&self) -> &[ArticleGroup] {
        &self.groups
    }

    pub fn group(&self, article: &str) -> Option<&ArticleGroup> {
        self.groups.iter().find(|g| g.article == article)
    }

    /// Cases of a group.
    pub fn group_cases<'a>(
        &'a self,
        group: &'a ArticleGroup,
    ) -> impl Iterator<Item = &'a NormalizedCase> + 'a {
        group.members.iter().map(move |idx| &self.cases[*idx])
    }

    pub fn tally(&self) -> OutcomeTally {
        self.groups
            .iter()
            .map(|g| (g.article.clone(), g.count))
            .collect()
    }

    /// Cases of every group, each `itemid` appearing once (at its first occurrence).
    pub fn multilabel(&self) -> Vec<&NormalizedCase> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.groups
            .iter()
            .flat_map(|g| g.members.iter())
            .map(|idx| &self.cases[*idx])
            .filter(|case| seen.insert(case.itemid.as_str()))
            .collect()
    }

    /// Cases that refer to a single article.
    ///
    /// Groups are visited from the smallest to the biggest (by total outcomes).
    /// Returned cases have their `mc_conclusion` set to the first element of their article.
    pub fn multiclass(&self) -> Vec<NormalizedCase> {
        let mut order: Vec<&ArticleGroup> = self.groups.iter().collect();
        order.sort_by_key(|g| g.count.total);

        let mut assigned: HashSet<&str> = HashSet::new();
        let mut multiclass = Vec::new();

        for group in order {
            for idx in &group.members {
                let case = &self.cases[*idx];
                if assigned.contains(case.itemid.as_str()) {
                    continue;
                }
                let articles = case.referenced_articles();
                if articles.len() != 1 {
                    info!(
                        "Article {} in {} datasets: {}. Skip for multiclass.",
                        case.itemid,
                        articles.len(),
                        articles.iter().join(",")
                    );
                    continue;
                }

                match case.first_element_for(&group.article) {
                    Some(element) => {
                        assigned.insert(case.itemid.as_str());
                        let mut case = case.clone();
                        case.mc_conclusion = Some(vec![element.clone()]);
                        multiclass.push(case);
                    }
                    None => info!("No article found for {}", case.itemid),
                }
            }
        }

        multiclass
    }
}
