use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A raw name cell as supplied by the loader.
///
/// Source data may contain blank or non-text cells; those arrive as
/// `Missing` and degrade to an empty normalized form instead of failing
/// the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawName {
    Text(String),
    Missing,
}

impl RawName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Missing => "",
        }
    }
}

impl From<&str> for RawName {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawName {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Option<String>> for RawName {
    fn from(s: Option<String>) -> Self {
        match s {
            Some(s) => Self::Text(s),
            None => Self::Missing,
        }
    }
}

/// Pre-loaded name lists for one matching run.
pub struct MatchInput {
    pub registry: Vec<RawName>,
    pub prospects: Vec<RawName>,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// One registry entry: the raw name plus its normalized comparison form.
/// Records with an empty normalized form are never indexed and never match.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryRecord {
    pub raw: String,
    pub normalized: String,
}

// ---------------------------------------------------------------------------
// Matches
// ---------------------------------------------------------------------------

/// A prospect/registry pair scoring at or above the similarity threshold.
/// Field order is the report column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub prospect: String,
    pub matched: String,
    pub score: u8,
    pub normalized_prospect: String,
    pub normalized_matched: String,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub prospects_total: usize,
    pub prospects_skipped: usize,
    pub registry_total: usize,
    pub registry_indexed: usize,
    pub matches: usize,
    pub matched_prospects: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchMeta {
    pub config_name: String,
    pub threshold: u8,
    pub n_gram_size: usize,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub meta: MatchMeta,
    pub summary: MatchSummary,
    pub matches: Vec<MatchRecord>,
}
