//! Catalog matching over normalized drug names

use crate::models::Drug;
use crate::normalizer::normalize;

/// Marker that prefixes the candidate list when a spoken name is ambiguous.
/// Callers parse this to trigger a clarification prompt.
pub const AMBIGUITY_SENTINEL: &str = "MULTIPLE_MATCHES_FOUND";

/// Drugs whose skeleton contains `search_term` (already normalized).
///
/// An empty term matches nothing.
pub fn find_matches<'a>(search_term: &str, catalog: &'a [Drug]) -> Vec<&'a Drug> {
    if search_term.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|drug| drug.skeleton().contains(search_term))
        .collect()
}

/// Outcome of resolving a spoken name against one catalog
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'a> {
    NotFound,
    Resolved(&'a Drug),
    Ambiguous(Vec<&'a Drug>),
}

impl<'a> MatchOutcome<'a> {
    pub fn candidate_names(&self) -> Vec<String> {
        match self {
            MatchOutcome::NotFound => Vec::new(),
            MatchOutcome::Resolved(drug) => vec![drug.name.clone()],
            MatchOutcome::Ambiguous(drugs) => drugs.iter().map(|d| d.name.clone()).collect(),
        }
    }
}

/// Normalize `spoken_name` and apply the zero/one/many policy
pub fn resolve<'a>(spoken_name: &str, catalog: &'a [Drug]) -> MatchOutcome<'a> {
    let term = normalize(spoken_name);
    let mut matches = find_matches(&term, catalog);
    tracing::debug!(
        spoken = spoken_name,
        skeleton = %term,
        count = matches.len(),
        "Resolved drug name against catalog"
    );
    match matches.len() {
        0 => MatchOutcome::NotFound,
        1 => MatchOutcome::Resolved(matches.remove(0)),
        _ => MatchOutcome::Ambiguous(matches),
    }
}

/// Raw case-insensitive substring lookup, without normalization
pub fn find_by_raw_name<'a>(name: &str, catalog: &'a [Drug]) -> Option<&'a Drug> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    catalog
        .iter()
        .find(|drug| drug.name.to_lowercase().contains(&needle))
}

/// `MULTIPLE_MATCHES_FOUND: A, B`
pub fn ambiguity_message(names: &[String]) -> String {
    format!("{}: {}", AMBIGUITY_SENTINEL, names.join(", "))
}
