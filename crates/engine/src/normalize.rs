use regex::Regex;

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::model::RawName;

/// Turns raw company names into canonical comparison strings.
///
/// All patterns are compiled once at construction from the configured word
/// lists, so `normalize` is a pure function of its input for the lifetime
/// of the normalizer.
pub struct Normalizer {
    brackets: [Regex; 3],
    noise: Vec<Regex>,
    suffixes: Vec<Regex>,
    strip: Regex,
    spaces: Regex,
}

impl Normalizer {
    pub fn new(config: &MatchConfig) -> Result<Self, MatchError> {
        let brackets = [
            compile(r"\([^)]*\)")?,
            compile(r"\[[^\]]*\]")?,
            compile(r"\{[^}]*\}")?,
        ];

        let noise = word_patterns(&config.noise_words)?;
        let suffixes = word_patterns(&config.suffix_words)?;

        Ok(Self {
            brackets,
            noise,
            suffixes,
            strip: compile(r"[^a-z0-9 ]")?,
            spaces: compile(r"\s+")?,
        })
    }

    /// Normalization pipeline, in order: lowercase, bracket removal,
    /// noise-word removal, suffix removal, character strip, whitespace
    /// collapse. Total: `Missing` and empty input yield the empty string.
    pub fn normalize(&self, raw: &RawName) -> String {
        let mut name = raw.as_str().to_lowercase();

        for re in &self.brackets {
            name = re.replace_all(&name, "").into_owned();
        }

        for re in &self.noise {
            name = re.replace_all(&name, "").into_owned();
        }

        for re in &self.suffixes {
            name = re.replace_all(&name, "").into_owned();
        }

        name = self.strip.replace_all(&name, "").into_owned();
        let name = self.spaces.replace_all(&name, " ");
        name.trim().to_string()
    }
}

fn compile(pattern: &str) -> Result<Regex, MatchError> {
    Regex::new(pattern).map_err(|e| MatchError::Pattern(e.to_string()))
}

/// One whole-word regex per configured word, in list order. Words are
/// case-folded and escaped; `\b` anchors keep substrings inside longer
/// tokens untouched.
fn word_patterns(words: &[String]) -> Result<Vec<Regex>, MatchError> {
    words
        .iter()
        .map(|word| compile(&format!(r"\b{}\b", regex::escape(&word.to_lowercase()))))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(&MatchConfig::default()).unwrap()
    }

    fn norm(raw: &str) -> String {
        normalizer().normalize(&RawName::from(raw))
    }

    #[test]
    fn lowercase_and_suffix() {
        assert_eq!(norm("Amace Solutions Pvt. Ltd."), "amace solutions");
        assert_eq!(norm("XYZ Pvt Ltd."), "xyz");
        assert_eq!(norm("Globex Corporation"), "globex");
    }

    #[test]
    fn bracket_kinds_removed() {
        assert_eq!(norm("Acme (India) Pvt. Ltd."), "acme");
        assert_eq!(norm("Test Corp [Division] Pvt. Ltd."), "test");
        assert_eq!(norm("ABC {Department} Ltd"), "abc");
    }

    #[test]
    fn bracket_spans_are_non_greedy() {
        // Two separate spans, the text between them survives.
        assert_eq!(norm("(a) keep (b)"), "keep");
    }

    #[test]
    fn noise_word_removed_any_case() {
        assert_eq!(norm("Acme INDIA Ltd"), "acme");
        assert_eq!(norm("Acme india"), "acme");
    }

    #[test]
    fn word_boundary_protects_longer_tokens() {
        // "ltd" inside "Ltdxyz" must survive; standalone "Pvt" is stripped.
        assert_eq!(norm("Ltdxyz Pvt"), "ltdxyz");
        // "india" inside "Indiana" must survive.
        assert_eq!(norm("Indiana Mills"), "indiana mills");
        // "co" inside "Coca" must survive, standalone "Co" is stripped.
        assert_eq!(norm("Coca Cola Co"), "coca cola");
    }

    #[test]
    fn bracket_and_suffix_equivalence() {
        assert_eq!(norm("Acme (India) Pvt. Ltd."), norm("Acme Ltd"));
    }

    #[test]
    fn special_characters_stripped_and_spaces_collapsed() {
        assert_eq!(norm("  A&B -- Traders,   2000 "), "ab traders 2000");
    }

    #[test]
    fn missing_and_empty_degrade() {
        assert_eq!(normalizer().normalize(&RawName::Missing), "");
        assert_eq!(norm(""), "");
        assert_eq!(norm("   "), "");
        // Name consisting entirely of removable material.
        assert_eq!(norm("(India) Pvt. Ltd."), "");
    }

    #[test]
    fn idempotent_on_normalized_output() {
        let n = normalizer();
        for raw in ["Amace Solutions Pvt. Ltd.", "Ltdxyz Pvt", "A&B Traders"] {
            let once = n.normalize(&RawName::from(raw));
            let twice = n.normalize(&RawName::from(once.as_str()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn custom_word_lists_injected() {
        let config = MatchConfig {
            suffix_words: vec!["gmbh".into()],
            noise_words: vec!["deutschland".into()],
            ..MatchConfig::default()
        };
        let n = Normalizer::new(&config).unwrap();
        assert_eq!(n.normalize(&RawName::from("Siemens GmbH Deutschland")), "siemens");
        // Default suffixes no longer apply.
        assert_eq!(n.normalize(&RawName::from("Acme Ltd")), "acme ltd");
    }
}
