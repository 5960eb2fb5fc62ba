//! Scorer: the single entry point that compares a JD against the résumé text.
//!
//! percent = round(100 × matched / extracted), or the weighted equivalent in
//! `ScoringMode::Weighted`. Zero extracted terms always scores 0.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::aliases::expand_aliases;
use crate::engine::config::{EngineConfig, ScoringMode};
use crate::engine::extractor::{extract_keywords, RankedTerm};
use crate::engine::matcher::term_in_text;
use crate::engine::normalize::normalize;
use crate::models::lexicon::Lexicon;

/// Outcome of one scoring run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// 0 – 100
    pub percent: u32,
    /// JD terms found in the résumé, rank order, capped at the display limit.
    pub matches: Vec<String>,
    /// JD terms missing from the résumé, rank order, capped at the display limit.
    pub gaps: Vec<String>,
    /// Size of the ranked term set the percentage was computed from.
    pub extracted_count: usize,
}

impl MatchResult {
    /// The line shown in the score display.
    pub fn score_line(&self) -> String {
        format!(
            "Fit score: {}% (from {} JD terms)",
            self.percent, self.extracted_count
        )
    }
}

/// Scores how well `resume_text` covers the terms extracted from `jd_text`.
///
/// Pure: the same inputs always produce the same result.
pub fn score_fit(
    resume_text: &str,
    jd_text: &str,
    lexicon: &Lexicon,
    config: &EngineConfig,
) -> MatchResult {
    let resume = expand_aliases(&normalize(resume_text), lexicon.aliases());
    let terms = extract_keywords(jd_text, lexicon, config);

    if terms.is_empty() {
        debug!("No JD terms extracted, scoring 0");
        return MatchResult::default();
    }

    let mut matched: Vec<&RankedTerm> = Vec::new();
    let mut missing: Vec<&RankedTerm> = Vec::new();
    for term in &terms {
        if term_in_text(&term.term, &resume) {
            matched.push(term);
        } else {
            missing.push(term);
        }
    }

    let percent = match config.mode {
        ScoringMode::Unweighted => percent_of(matched.len() as f64, terms.len() as f64),
        ScoringMode::Weighted { .. } => percent_of(
            matched.iter().map(|t| t.weight).sum(),
            terms.iter().map(|t| t.weight).sum(),
        ),
    };

    debug!(
        extracted = terms.len(),
        matched = matched.len(),
        percent,
        "fit scored"
    );

    MatchResult {
        percent,
        matches: display_list(&matched, config.display_limit),
        gaps: display_list(&missing, config.display_limit),
        extracted_count: terms.len(),
    }
}

/// Absent inputs are scored as empty text.
pub fn score_fit_opt(
    resume_text: Option<&str>,
    jd_text: Option<&str>,
    lexicon: &Lexicon,
    config: &EngineConfig,
) -> MatchResult {
    score_fit(
        resume_text.unwrap_or_default(),
        jd_text.unwrap_or_default(),
        lexicon,
        config,
    )
}

fn percent_of(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 {
        return 0;
    }
    ((part / whole) * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Stable de-duplication, then truncation to the display limit.
fn display_list(terms: &[&RankedTerm], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    terms
        .iter()
        .filter(|t| seen.insert(t.term.as_str()))
        .take(limit)
        .map(|t| t.term.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = r#"
        Mechatronics technician. Maintained conveyor systems, PLC controls and photo-eyes
        across three fulfillment sites. Led preventative maintenance and root cause analysis
        for robotic work cells. Read electrical schematics and wiring diagrams daily.
    "#;

    fn small_lexicon(phrases: &[&str]) -> Lexicon {
        Lexicon::new(
            ["the", "and", "for", "with"],
            phrases.iter().copied(),
            Vec::<(String, String)>::new(),
        )
    }

    fn unigram_config(mode: ScoringMode) -> EngineConfig {
        EngineConfig {
            max_ngram: 1,
            mode,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        let result = score_fit(RESUME, "", &Lexicon::default(), &EngineConfig::default());
        assert_eq!(
            result,
            MatchResult {
                percent: 0,
                matches: vec![],
                gaps: vec![],
                extracted_count: 0,
            }
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "percent": 0, "matches": [], "gaps": [], "extractedCount": 0 })
        );
    }

    #[test]
    fn test_absent_inputs_are_empty() {
        let result = score_fit_opt(None, None, &Lexicon::default(), &EngineConfig::default());
        assert_eq!(result, MatchResult::default());

        let result = score_fit_opt(
            None,
            Some("PLC troubleshooting"),
            &Lexicon::default(),
            &EngineConfig::default(),
        );
        assert_eq!(result.percent, 0);
        assert!(result.matches.is_empty());
        assert!(!result.gaps.is_empty());
    }

    #[test]
    fn test_identical_text_scores_full() {
        let lexicon = Lexicon::default();
        let result = score_fit(RESUME, RESUME, &lexicon, &EngineConfig::default());
        assert_eq!(result.percent, 100);
        assert!(result.gaps.is_empty());
        assert!(result.extracted_count > 0);
    }

    #[test]
    fn test_identical_after_normalization_scores_full() {
        let lexicon = Lexicon::default();
        let jd = "MAINTAINED conveyor systems; PLC controls & photo\u{2011}eyes!";
        let resume = "maintained conveyor systems plc controls and photo-eyes";
        let result = score_fit(resume, jd, &lexicon, &EngineConfig::default());
        assert_eq!(result.percent, 100);
        assert!(result.gaps.is_empty());
    }

    #[test]
    fn test_identical_hyphenated_text_has_no_gaps() {
        let lexicon = Lexicon::default();
        let config = EngineConfig::default();

        let result = score_fit("---", "---", &lexicon, &config);
        assert_eq!(result, MatchResult::default());

        let result = score_fit("the --- the", "the --- the", &lexicon, &config);
        assert_eq!(result.extracted_count, 0);
        assert!(result.gaps.is_empty());

        let result = score_fit("pre- the", "pre- the", &lexicon, &config);
        assert_eq!(result.matches, vec!["pre-"]);
        assert!(result.gaps.is_empty());
        assert_eq!(result.percent, 100);
    }

    #[test]
    fn test_partial_match_splits_terms() {
        let lexicon = small_lexicon(&[]);
        let config = unigram_config(ScoringMode::Unweighted);
        let result = score_fit("welding certified", "welding brazing soldering", &lexicon, &config);
        assert_eq!(result.extracted_count, 3);
        assert_eq!(result.matches, vec!["welding"]);
        assert_eq!(result.gaps, vec!["brazing", "soldering"]);
        assert_eq!(result.percent, 33);
    }

    #[test]
    fn test_rounding_half_up() {
        let lexicon = small_lexicon(&[]);
        let config = unigram_config(ScoringMode::Unweighted);
        let result = score_fit("brazing welding", "welding brazing soldering", &lexicon, &config);
        assert_eq!(result.percent, 67);
    }

    #[test]
    fn test_alias_bridges_acronym_in_resume() {
        let lexicon = Lexicon::default();
        let result = score_fit(
            "Programmed the programmable logic controller",
            "PLC",
            &lexicon,
            &unigram_config(ScoringMode::Unweighted),
        );
        assert!(result.matches.contains(&"plc".to_string()), "{result:?}");
        assert_eq!(result.percent, 100);
    }

    #[test]
    fn test_photo_eyes_bridge_across_hyphenation() {
        let lexicon = Lexicon::default();
        let resume = expand_aliases(&normalize("Aligned photo eyes on sorters"), lexicon.aliases());
        assert!(term_in_text("photo-eyes", &resume));
    }

    #[test]
    fn test_weighted_mode_boosts_phrases() {
        let lexicon = small_lexicon(&["conveyor systems"]);
        let jd = "conveyor systems and welding";
        let weighted = unigram_config(ScoringMode::Weighted { phrase_boost: 3.0 });
        let unweighted = unigram_config(ScoringMode::Unweighted);

        assert_eq!(score_fit("welding", jd, &lexicon, &unweighted).percent, 50);
        assert_eq!(score_fit("welding", jd, &lexicon, &weighted).percent, 25);
        assert_eq!(score_fit("conveyor systems", jd, &lexicon, &weighted).percent, 75);
    }

    #[test]
    fn test_weighted_mode_empty_jd_is_zero() {
        let config = EngineConfig {
            mode: ScoringMode::weighted(),
            ..EngineConfig::default()
        };
        let result = score_fit(RESUME, "   ", &Lexicon::default(), &config);
        assert_eq!(result.percent, 0);
        assert_eq!(result.extracted_count, 0);
    }

    #[test]
    fn test_display_lists_are_truncated_in_rank_order() {
        let lexicon = small_lexicon(&[]);
        let config = EngineConfig {
            max_ngram: 1,
            display_limit: 3,
            ..EngineConfig::default()
        };
        let jd: Vec<String> = (0..10).map(|i| format!("g{i:02}x")).collect();
        let result = score_fit("", &jd.join(" "), &lexicon, &config);

        assert_eq!(result.extracted_count, 10);
        assert_eq!(result.gaps, vec!["g00x", "g01x", "g02x"]);
        assert_eq!(result.percent, 0);
    }

    #[test]
    fn test_percent_from_full_set_not_display_list() {
        let lexicon = small_lexicon(&[]);
        let config = EngineConfig {
            max_ngram: 1,
            display_limit: 1,
            ..EngineConfig::default()
        };
        let result = score_fit("a01x a02x", "a01x a02x a03x a04x", &lexicon, &config);
        assert_eq!(result.percent, 50);
        assert_eq!(result.matches, vec!["a01x"]);
        assert_eq!(result.gaps, vec!["a03x"]);
    }

    #[test]
    fn test_score_line_format() {
        let result = MatchResult {
            percent: 72,
            matches: vec![],
            gaps: vec![],
            extracted_count: 28,
        };
        assert_eq!(result.score_line(), "Fit score: 72% (from 28 JD terms)");
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let lexicon = Lexicon::default();
        let jd = "Troubleshoot PLC, VFD and photo-eye faults; perform preventive maintenance \
                  on automated conveyor systems and robotic work cells.";
        let first =
            serde_json::to_string(&score_fit(RESUME, jd, &lexicon, &EngineConfig::default()))
                .unwrap();
        let second =
            serde_json::to_string(&score_fit(RESUME, jd, &lexicon, &EngineConfig::default()))
                .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_percent_of_guards_zero() {
        assert_eq!(percent_of(0.0, 0.0), 0);
        assert_eq!(percent_of(1.0, 2.0), 50);
        assert_eq!(percent_of(2.0, 2.0), 100);
    }
}
