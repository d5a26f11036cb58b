use std::collections::HashSet;

use crate::error::MatchError;
use crate::model::{MatchRecord, MatchReport, MatchSummary};

/// Rank matches by similarity descending. The sort is stable, so ties keep
/// encounter order and the output is deterministic for deterministic input.
pub fn finalize(mut records: Vec<MatchRecord>) -> Vec<MatchRecord> {
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records
}

/// Summary statistics for one run.
pub fn compute_summary(
    matches: &[MatchRecord],
    prospects_total: usize,
    prospects_skipped: usize,
    registry_total: usize,
    registry_indexed: usize,
) -> MatchSummary {
    let matched_prospects: HashSet<&str> =
        matches.iter().map(|m| m.prospect.as_str()).collect();

    MatchSummary {
        prospects_total,
        prospects_skipped,
        registry_total,
        registry_indexed,
        matches: matches.len(),
        matched_prospects: matched_prospects.len(),
    }
}

/// Serialize ranked matches to CSV text, one row per match.
pub fn to_csv(records: &[MatchRecord]) -> Result<String, MatchError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "Prospect",
            "Matched Registry Entry",
            "Similarity %",
            "Normalized Prospect",
            "Normalized Registry",
        ])
        .map_err(|e| MatchError::Csv(e.to_string()))?;

    for record in records {
        let score = record.score.to_string();
        writer
            .write_record([
                record.prospect.as_str(),
                record.matched.as_str(),
                &score,
                record.normalized_prospect.as_str(),
                record.normalized_matched.as_str(),
            ])
            .map_err(|e| MatchError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MatchError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| MatchError::Csv(e.to_string()))
}

/// Serialize the full report (meta, summary, ranked matches) to JSON.
pub fn to_json(report: &MatchReport) -> Result<String, MatchError> {
    serde_json::to_string_pretty(report).map_err(|e| MatchError::Serialize(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
