mod builder;
mod config;
use log::{debug, info, warn};

use std::collections::{BTreeSet, HashMap};

use strsim::normalized_levenshtein;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub use crate::builder::Reconciler;
pub use crate::config::*;

/// The normalized lookup key for a name: trimmed, diacritics stripped,
/// lowercased. Used only for equality comparison, never displayed.
pub fn normalize_key(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Builds the normalized-form lookup over the reference name set.
///
/// Construction is deterministic: the reference names are visited in
/// ascending lexicographic order. If two reference names collide on the same
/// normalized key, the later one overwrites the earlier one. A collision
/// means the reference data itself is ambiguous, so it is logged.
pub fn build_normalized_index(reference_names: &BTreeSet<String>) -> HashMap<String, String> {
    let mut index: HashMap<String, String> = HashMap::with_capacity(reference_names.len());
    for name in reference_names {
        let key = normalize_key(name);
        if let Some(previous) = index.insert(key, name.clone()) {
            warn!(
                "build_normalized_index: {:?} and {:?} normalize to the same key, keeping {:?}",
                previous, name, name
            );
        }
    }
    index
}

/// Resolves every candidate name absent from the reference set to its most
/// plausible reference name.
///
/// Per candidate, in strict short-circuit order:
/// 1. a candidate present verbatim in `reference_names` produces no result;
/// 2. a candidate whose normalized form is a key of `normalized_index` is
///    resolved to the indexed reference name;
/// 3. otherwise the reference name with the highest normalized Levenshtein
///    ratio is suggested, if that ratio reaches the similarity threshold.
///    Below the threshold the candidate is reported without a suggestion.
///
/// The result is ordered by ascending candidate name. The inputs are never
/// mutated and the same inputs always produce the same output.
pub fn reconcile(
    candidate_names: &BTreeSet<String>,
    reference_names: &BTreeSet<String>,
    normalized_index: &HashMap<String, String>,
    rules: &MatchRules,
) -> Result<Vec<MatchResult>, ReconcileErrors> {
    if candidate_names.is_empty() {
        return Err(ReconcileErrors::EmptyCandidateSet);
    }
    if reference_names.is_empty() {
        return Err(ReconcileErrors::EmptyReferenceSet);
    }
    if !(0.0..=1.0).contains(&rules.similarity_threshold) {
        return Err(ReconcileErrors::InvalidThreshold);
    }
    info!(
        "reconcile: processing {:?} candidate names against {:?} reference names",
        candidate_names.len(),
        reference_names.len()
    );

    let mut results: Vec<MatchResult> = Vec::new();
    // BTreeSet iteration is ascending, which is the required output order.
    for candidate in candidate_names {
        if reference_names.contains(candidate) {
            continue;
        }
        let key = normalize_key(candidate);
        if let Some(official) = normalized_index.get(&key) {
            debug!(
                "reconcile: {:?} resolved to {:?} on its normalized form",
                candidate, official
            );
            results.push(MatchResult {
                candidate: candidate.clone(),
                suggestion: Some(official.clone()),
            });
            continue;
        }
        let suggestion =
            closest_reference(candidate, reference_names, rules.similarity_threshold);
        debug!("reconcile: fuzzy result for {:?}: {:?}", candidate, suggestion);
        results.push(MatchResult {
            candidate: candidate.clone(),
            suggestion,
        });
    }
    Ok(results)
}

/// The reference name closest to the candidate, if it clears the threshold.
///
/// The similarity measure is the normalized Levenshtein ratio over the full
/// strings, case- and accent-sensitive. Ties on the maximum ratio resolve to
/// the first reference name in ascending lexicographic order.
fn closest_reference(
    candidate: &str,
    reference_names: &BTreeSet<String>,
    threshold: f64,
) -> Option<String> {
    let mut best: Option<(&String, f64)> = None;
    for name in reference_names {
        let ratio = normalized_levenshtein(candidate, name);
        let better = match best {
            Some((_, best_ratio)) => ratio > best_ratio,
            None => true,
        };
        if better {
            best = Some((name, ratio));
        }
    }
    match best {
        Some((name, ratio)) if ratio >= threshold => Some(name.clone()),
        _ => None,
    }
}
