use serde::Deserialize;

use crate::error::MatchError;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Matching run configuration.
///
/// Word lists are ordered: suffix phrases are removed in list order, so
/// longer phrases must come before their prefixes (the default list does).
#[derive(Debug, Clone, Deserialize)]
pub struct MatchConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_n_gram_size")]
    pub n_gram_size: usize,
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: u8,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_suffix_words")]
    pub suffix_words: Vec<String>,
    #[serde(default = "default_noise_words")]
    pub noise_words: Vec<String>,
}

fn default_name() -> String {
    "dupescan".to_string()
}

fn default_n_gram_size() -> usize {
    2
}

fn default_similarity_threshold() -> u8 {
    90
}

fn default_batch_size() -> usize {
    1000
}

/// Legal-form suffixes stripped during normalization. Dotted and plain
/// variants are separate entries; order matters ("pvt. ltd" before "pvt").
/// Generic trade words ("solutions", "services") are not suffixes here;
/// stripping them collapses distinct brands onto the same key.
fn default_suffix_words() -> Vec<String> {
    [
        "private limited",
        "pvt ltd",
        "pvt. ltd.",
        "pvt. ltd",
        "pvt ltd.",
        "pvt.",
        "pvt",
        "llp",
        "inc",
        "corporation",
        "limited",
        "ltd.",
        "ltd",
        "co",
        "company",
        "corp",
        "incorporated",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Regional qualifiers carrying no identity signal.
fn default_noise_words() -> Vec<String> {
    vec!["india".to_string()]
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            n_gram_size: default_n_gram_size(),
            similarity_threshold: default_similarity_threshold(),
            batch_size: default_batch_size(),
            suffix_words: default_suffix_words(),
            noise_words: default_noise_words(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl MatchConfig {
    pub fn from_toml(input: &str) -> Result<Self, MatchError> {
        let config: MatchConfig =
            toml::from_str(input).map_err(|e| MatchError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.n_gram_size == 0 {
            return Err(MatchError::ConfigValidation(
                "n_gram_size must be at least 1".into(),
            ));
        }

        if self.similarity_threshold > 100 {
            return Err(MatchError::ConfigValidation(format!(
                "similarity_threshold must be 0-100, got {}",
                self.similarity_threshold
            )));
        }

        if self.batch_size == 0 {
            return Err(MatchError::ConfigValidation(
                "batch_size must be at least 1".into(),
            ));
        }

        for word in self.suffix_words.iter().chain(&self.noise_words) {
            if word.trim().is_empty() {
                return Err(MatchError::ConfigValidation(
                    "word lists must not contain empty entries".into(),
                ));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
