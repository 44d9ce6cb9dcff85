//! Search/filter engine over the member store.
//!
//! Filtering is a pure function of the record list and the current search
//! query. The engine memoizes its last result keyed on the store revision
//! and the query, so repeated renders with unchanged inputs reuse the same
//! computed id list instead of rescanning the store.

use tracing::trace;

use super::{Member, MemberStore};

/// The four independent search fields.
///
/// The id and name fields are case-insensitive substring matches; the date
/// fields bound `policy_renewal_date` inclusively, compared as ISO-8601
/// (`YYYY-MM-DD`) strings. An empty field places no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// Substring of the formatted member number (e.g. "002").
    pub member_id: String,
    /// Substring of the member name.
    pub name: String,
    /// Lower bound on the policy renewal date.
    pub from_date: String,
    /// Upper bound on the policy renewal date.
    pub to_date: String,
}

impl SearchQuery {
    /// Whether every field is empty (matches everything).
    pub fn is_empty(&self) -> bool {
        self.member_id.is_empty()
            && self.name.is_empty()
            && self.from_date.is_empty()
            && self.to_date.is_empty()
    }

    /// Whether the given member satisfies every populated field.
    pub fn matches(&self, member: &Member) -> bool {
        let id_match = self.member_id.is_empty()
            || member
                .member_id
                .to_lowercase()
                .contains(&self.member_id.to_lowercase());
        let name_match = self.name.is_empty()
            || member.name.to_lowercase().contains(&self.name.to_lowercase());
        let from_match =
            self.from_date.is_empty() || member.policy_renewal_date.as_str() >= self.from_date.as_str();
        let to_match =
            self.to_date.is_empty() || member.policy_renewal_date.as_str() <= self.to_date.as_str();

        id_match && name_match && from_match && to_match
    }
}

/// Memoizing filter over the member store.
#[derive(Debug, Default)]
pub struct FilterEngine {
    /// Ids of matching members, in the store's insertion order.
    cached_ids: Vec<u32>,
    /// Store revision the cache was computed against.
    cached_revision: Option<u64>,
    /// Query the cache was computed against.
    cached_query: SearchQuery,
    /// How many times the result has actually been recomputed.
    recomputes: u64,
}

impl FilterEngine {
    /// Create a new engine with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the store with the given query, returning matching ids.
    ///
    /// Result ordering matches the store's insertion order; no match yields
    /// an empty slice. When neither the store nor the query changed since
    /// the last call, the previously computed list is returned as-is.
    pub fn filter(&mut self, store: &MemberStore, query: &SearchQuery) -> &[u32] {
        if self.cached_revision == Some(store.revision()) && self.cached_query == *query {
            return &self.cached_ids;
        }

        self.cached_ids = store
            .list()
            .iter()
            .filter(|m| query.matches(m))
            .map(|m| m.id)
            .collect();
        self.cached_revision = Some(store.revision());
        self.cached_query = query.clone();
        self.recomputes += 1;
        trace!(
            matches = self.cached_ids.len(),
            revision = store.revision(),
            "Recomputed filter"
        );

        &self.cached_ids
    }

    /// Resolve the cached ids into member references.
    ///
    /// Ids always resolve because the store never deletes records.
    pub fn members<'a>(&self, store: &'a MemberStore) -> Vec<&'a Member> {
        self.cached_ids
            .iter()
            .filter_map(|id| store.get(*id))
            .collect()
    }

    /// Number of matches in the cached result.
    pub fn match_count(&self) -> usize {
        self.cached_ids.len()
    }

    /// How many times the filter has been recomputed (memoization probe).
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemberDraft;

    fn store_with(names: &[&str]) -> MemberStore {
        let mut store = MemberStore::new();
        for name in names {
            store.create(MemberDraft {
                name: name.to_string(),
                policy_renewal_date: "2026-06-01".to_string(),
                ..MemberDraft::default()
            });
        }
        store
    }

    fn query(member_id: &str, name: &str) -> SearchQuery {
        SearchQuery {
            member_id: member_id.to_string(),
            name: name.to_string(),
            ..SearchQuery::default()
        }
    }

    #[test]
    fn test_empty_query_matches_everything_in_order() {
        let store = store_with(&["Alice Shah", "Bob Iyer"]);
        let mut engine = FilterEngine::new();
        let ids = engine.filter(&store, &SearchQuery::default());
        assert_eq!(ids, &[1, 2]);
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let store = store_with(&["Alice Shah", "Bob Iyer"]);
        let mut engine = FilterEngine::new();
        let ids = engine.filter(&store, &query("", "ali"));
        assert_eq!(ids, &[1]);
        let members = engine.members(&store);
        assert_eq!(members[0].name, "Alice Shah");
    }

    #[test]
    fn test_member_id_filter() {
        let store = store_with(&["Alice Shah", "Bob Iyer"]);
        let mut engine = FilterEngine::new();
        let ids = engine.filter(&store, &query("002", ""));
        assert_eq!(ids, &[2]);
        assert_eq!(engine.members(&store)[0].name, "Bob Iyer");
    }

    #[test]
    fn test_both_predicates_are_anded() {
        let store = store_with(&["Alice Shah", "Bob Iyer"]);
        let mut engine = FilterEngine::new();
        // Name matches record 1, id matches record 2; intersection is empty.
        let ids = engine.filter(&store, &query("002", "ali"));
        assert!(ids.is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let store = store_with(&["Alice Shah"]);
        let mut engine = FilterEngine::new();
        let ids = engine.filter(&store, &query("", "zzz"));
        assert!(ids.is_empty());
        assert_eq!(engine.match_count(), 0);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let store = store_with(&["Alice Shah", "Bob Iyer"]);
        let mut engine = FilterEngine::new();
        let first: Vec<u32> = engine.filter(&store, &query("", "b")).to_vec();
        let second: Vec<u32> = engine.filter(&store, &query("", "b")).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_memoization_avoids_recompute() {
        let store = store_with(&["Alice Shah", "Bob Iyer"]);
        let mut engine = FilterEngine::new();
        let q = query("", "a");
        engine.filter(&store, &q);
        assert_eq!(engine.recompute_count(), 1);
        engine.filter(&store, &q);
        engine.filter(&store, &q);
        assert_eq!(engine.recompute_count(), 1);
    }

    #[test]
    fn test_store_mutation_invalidates_cache() {
        let mut store = store_with(&["Alice Shah"]);
        let mut engine = FilterEngine::new();
        let q = SearchQuery::default();
        assert_eq!(engine.filter(&store, &q).len(), 1);
        store.create(MemberDraft {
            name: "Bob Iyer".to_string(),
            ..MemberDraft::default()
        });
        assert_eq!(engine.filter(&store, &q).len(), 2);
        assert_eq!(engine.recompute_count(), 2);
    }

    #[test]
    fn test_query_change_invalidates_cache() {
        let store = store_with(&["Alice Shah", "Bob Iyer"]);
        let mut engine = FilterEngine::new();
        engine.filter(&store, &query("", "a"));
        engine.filter(&store, &query("", "ali"));
        assert_eq!(engine.recompute_count(), 2);
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let mut store = MemberStore::new();
        for (name, date) in [
            ("Early", "2026-01-15"),
            ("Mid", "2026-06-01"),
            ("Late", "2026-12-30"),
        ] {
            store.create(MemberDraft {
                name: name.to_string(),
                policy_renewal_date: date.to_string(),
                ..MemberDraft::default()
            });
        }
        let mut engine = FilterEngine::new();
        let q = SearchQuery {
            from_date: "2026-06-01".to_string(),
            to_date: "2026-12-30".to_string(),
            ..SearchQuery::default()
        };
        let ids = engine.filter(&store, &q);
        assert_eq!(ids, &[2, 3]);
    }

    #[test]
    fn test_open_ended_date_range() {
        let mut store = MemberStore::new();
        for date in ["2025-01-01", "2026-01-01"] {
            store.create(MemberDraft {
                name: "M".to_string(),
                policy_renewal_date: date.to_string(),
                ..MemberDraft::default()
            });
        }
        let mut engine = FilterEngine::new();
        let q = SearchQuery {
            from_date: "2025-06-01".to_string(),
            ..SearchQuery::default()
        };
        assert_eq!(engine.filter(&store, &q), &[2]);
    }
}
