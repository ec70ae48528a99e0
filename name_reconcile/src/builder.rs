pub use crate::config::*;
use crate::{build_normalized_index, reconcile};

use std::collections::{BTreeSet, HashMap};

/// A reconciliation engine bound to one reference name set.
///
/// The reference set and its normalized index are built once at construction
/// and stay read-only afterwards. Refreshing the reference data is the
/// caller's responsibility: build a new `Reconciler`.
///
/// ```
/// pub use name_reconcile::{MatchRules, Reconciler};
/// # use name_reconcile::ReconcileErrors;
///
/// let reconciler = Reconciler::new(
///     &["Florianópolis".to_string(), "São José".to_string()],
///     &MatchRules::DEFAULT_RULES,
/// )?;
///
/// let results = reconciler.run(&["Florianopolis".to_string()])?;
/// assert_eq!(results[0].suggestion.as_deref(), Some("Florianópolis"));
///
/// # Ok::<(), ReconcileErrors>(())
/// ```
pub struct Reconciler {
    pub(crate) _rules: MatchRules,
    pub(crate) _reference_names: BTreeSet<String>,
    pub(crate) _normalized_index: HashMap<String, String>,
}

impl Reconciler {
    pub fn new(
        reference_names: &[String],
        rules: &MatchRules,
    ) -> Result<Reconciler, ReconcileErrors> {
        let refs: BTreeSet<String> = reference_names
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
        if refs.is_empty() {
            return Err(ReconcileErrors::EmptyReferenceSet);
        }
        if !(0.0..=1.0).contains(&rules.similarity_threshold) {
            return Err(ReconcileErrors::InvalidThreshold);
        }
        let index = build_normalized_index(&refs);
        Ok(Reconciler {
            _rules: *rules,
            _reference_names: refs,
            _normalized_index: index,
        })
    }

    /// Runs the exact / normalized / fuzzy cascade over the candidate names.
    ///
    /// candidates: the raw labels from the data source. They do not need to be
    /// unique, sorted or trimmed.
    pub fn run(&self, candidate_names: &[String]) -> Result<Vec<MatchResult>, ReconcileErrors> {
        let candidates: BTreeSet<String> = candidate_names
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
        reconcile(
            &candidates,
            &self._reference_names,
            &self._normalized_index,
            &self._rules,
        )
    }

    /// The trimmed, deduplicated reference names, in ascending order.
    pub fn reference_names(&self) -> &BTreeSet<String> {
        &self._reference_names
    }
}
