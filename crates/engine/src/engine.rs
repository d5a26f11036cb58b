use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::index::NGramIndex;
use crate::model::{MatchInput, MatchMeta, MatchRecord, MatchReport, RawName, RegistryRecord};
use crate::normalize::Normalizer;
use crate::report;
use crate::similarity;

/// Run one matching pass: normalize the registry, build the n-gram index,
/// score every prospect against its candidates, rank the results.
pub fn run(config: &MatchConfig, input: &MatchInput) -> Result<MatchReport, MatchError> {
    config.validate()?;
    let normalizer = Normalizer::new(config)?;

    let registry_total = input.registry.len();
    let records: Vec<RegistryRecord> = input
        .registry
        .iter()
        .map(|raw| RegistryRecord {
            raw: raw.as_str().to_string(),
            normalized: normalizer.normalize(raw),
        })
        .collect();
    let index = NGramIndex::build(records, config.n_gram_size);

    // Batches partition the prospect list purely to bound peak memory; each
    // batch only reads the shared index, so batch boundaries never change
    // which matches are found. Results are concatenated in batch order.
    let mut matches = Vec::new();
    let mut prospects_skipped = 0;
    for batch in input.prospects.chunks(config.batch_size) {
        let (batch_matches, skipped) =
            process_batch(batch, &normalizer, &index, config.similarity_threshold);
        matches.extend(batch_matches);
        prospects_skipped += skipped;
    }

    let matches = report::finalize(matches);
    let summary = report::compute_summary(
        &matches,
        input.prospects.len(),
        prospects_skipped,
        registry_total,
        index.indexed_count(),
    );

    Ok(MatchReport {
        meta: MatchMeta {
            config_name: config.name.clone(),
            threshold: config.similarity_threshold,
            n_gram_size: config.n_gram_size,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        matches,
    })
}

/// Score one batch of prospects against the shared index. A prospect that
/// normalizes to empty is skipped, never an error. Every candidate at or
/// above the threshold is reported; a prospect may match several entries.
fn process_batch(
    batch: &[RawName],
    normalizer: &Normalizer,
    index: &NGramIndex,
    threshold: u8,
) -> (Vec<MatchRecord>, usize) {
    let mut matches = Vec::new();
    let mut skipped = 0;

    for prospect in batch {
        let normalized = normalizer.normalize(prospect);
        if normalized.is_empty() {
            skipped += 1;
            continue;
        }

        for candidate in index.candidates(&normalized) {
            let score = similarity::score(&normalized, &candidate.normalized);
            if score >= threshold {
                matches.push(MatchRecord {
                    prospect: prospect.as_str().to_string(),
                    matched: candidate.raw.clone(),
                    score,
                    normalized_prospect: normalized.clone(),
                    normalized_matched: candidate.normalized.clone(),
                });
            }
        }
    }

    (matches, skipped)
}

/// Extract one named column from CSV text as raw names. Blank cells become
/// `RawName::Missing` so they degrade at normalization instead of erroring.
/// File access, encoding detection, and column choice are the caller's job.
pub fn load_names_csv(csv_data: &str, column: &str) -> Result<Vec<RawName>, MatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let column_idx = reader
        .headers()
        .map_err(|e| MatchError::Csv(e.to_string()))?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| MatchError::MissingColumn {
            column: column.into(),
        })?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| MatchError::Csv(e.to_string()))?;
        match record.get(column_idx) {
            Some(value) if !value.trim().is_empty() => {
                names.push(RawName::Text(value.to_string()));
            }
            _ => names.push(RawName::Missing),
        }
    }

    Ok(names)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
