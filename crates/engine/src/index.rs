use std::collections::{HashMap, HashSet};

use crate::model::RegistryRecord;

/// Inverted n-gram index over the registry.
///
/// Built once per run, read-only afterwards; lookups never mutate, so the
/// index can be shared freely across matching workers. Memory is traded for
/// time: a bucket can in the worst case hold every record, but company-name
/// buckets are sparse in practice.
pub struct NGramIndex {
    n: usize,
    records: Vec<RegistryRecord>,
    buckets: HashMap<String, Vec<usize>>,
    indexed: usize,
}

impl NGramIndex {
    /// Index every record with a non-empty normalized form. Records with an
    /// empty normalized form are retained but never enter a bucket, so they
    /// can never surface as candidates.
    pub fn build(records: Vec<RegistryRecord>, n: usize) -> Self {
        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();
        let mut indexed = 0;

        for (id, record) in records.iter().enumerate() {
            if record.normalized.is_empty() {
                continue;
            }
            indexed += 1;
            // ngrams() yields a set, so a record lands at most once per bucket.
            for gram in ngrams(&record.normalized, n) {
                buckets.entry(gram.to_string()).or_default().push(id);
            }
        }

        Self {
            n,
            records,
            buckets,
            indexed,
        }
    }

    /// Union of the buckets for the query's n-grams, deduplicated by record
    /// id and returned in ascending id order so scoring order is
    /// deterministic. Empty query short-circuits to no candidates.
    pub fn candidates(&self, query: &str) -> Vec<&RegistryRecord> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut seen: HashSet<usize> = HashSet::new();
        let mut ids: Vec<usize> = Vec::new();
        for gram in ngrams(query, self.n) {
            if let Some(bucket) = self.buckets.get(gram) {
                for &id in bucket {
                    if seen.insert(id) {
                        ids.push(id);
                    }
                }
            }
        }

        ids.sort_unstable();
        ids.iter().map(|&id| &self.records[id]).collect()
    }

    /// Number of records that actually entered the index.
    pub fn indexed_count(&self) -> usize {
        self.indexed
    }
}

/// Overlapping length-`n` substrings of a normalized name, or the whole
/// string when shorter than `n`. Normalized names are ASCII, so byte
/// slicing is safe.
fn ngrams(name: &str, n: usize) -> HashSet<&str> {
    let mut grams = HashSet::new();
    if name.len() < n {
        grams.insert(name);
        return grams;
    }
    for i in 0..=name.len() - n {
        grams.insert(&name[i..i + n]);
    }
    grams
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(raw: &str, normalized: &str) -> RegistryRecord {
        RegistryRecord {
            raw: raw.into(),
            normalized: normalized.into(),
        }
    }

    #[test]
    fn ngrams_overlapping() {
        let grams = ngrams("acme", 2);
        assert_eq!(grams.len(), 3);
        assert!(grams.contains("ac"));
        assert!(grams.contains("cm"));
        assert!(grams.contains("me"));
    }

    #[test]
    fn ngrams_short_name_is_whole_string() {
        let grams = ngrams("a", 2);
        assert_eq!(grams, HashSet::from(["a"]));
    }

    #[test]
    fn ngrams_repeated_substring_deduped() {
        // "aaaa" has a single distinct 2-gram.
        assert_eq!(ngrams("aaaa", 2).len(), 1);
    }

    #[test]
    fn empty_normalized_never_indexed() {
        let index = NGramIndex::build(
            vec![record("(India) Ltd", ""), record("Acme Ltd", "acme")],
            2,
        );
        assert_eq!(index.indexed_count(), 1);
        // Even a query sharing nothing real cannot reach the empty record.
        assert!(index.candidates("").is_empty());
        let hits = index.candidates("acme");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].raw, "Acme Ltd");
    }

    #[test]
    fn self_match_recall() {
        let index = NGramIndex::build(vec![record("Amace Solutions", "amace solutions")], 2);
        let hits = index.candidates("amace solutions");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn candidate_deduped_across_shared_grams() {
        // Query shares many 2-grams with the record; it must appear once.
        let index = NGramIndex::build(vec![record("Acme Metals", "acme metals")], 2);
        let hits = index.candidates("acme metal");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn candidates_in_record_order() {
        let index = NGramIndex::build(
            vec![
                record("Zeta Acme", "zeta acme"),
                record("Acme", "acme"),
                record("Beta Works", "beta works"),
            ],
            2,
        );
        let hits = index.candidates("acme");
        let raws: Vec<&str> = hits.iter().map(|r| r.raw.as_str()).collect();
        assert_eq!(raws, vec!["Zeta Acme", "Acme"]);
    }

    #[test]
    fn unrelated_query_yields_nothing() {
        let index = NGramIndex::build(vec![record("Acme", "acme")], 2);
        assert!(index.candidates("zzz").is_empty());
    }
}
