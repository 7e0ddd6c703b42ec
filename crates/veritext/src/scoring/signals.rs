//! Per-category scoring functions.
//!
//! Each signal inspects one stylistic or statistical dimension of the text
//! and returns a [`SignalScore`] pair: points earned plus the fixed points
//! possible for the category. `possible` accrues unconditionally; `earned`
//! only when thresholds are crossed. The functions are pure; all shared text
//! features live in [`TextProfile`], computed once per scoring run.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use super::lists;

/// One category's contribution to the running tally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalScore {
    pub earned: f64,
    pub possible: f64,
}

impl SignalScore {
    fn new(earned: f64, possible: f64) -> Self {
        Self { earned, possible }
    }
}

static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence split pattern is valid"));
static TYPO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(teh|recieve|seperate|definately|occured|alot|untill|wich|becuase)\b")
        .expect("typo pattern is valid")
});
static CONTRACTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]+'(s|t|re|ve|ll|d|m)\b").expect("contraction pattern is valid"));
static PASSIVE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(is|are|was|were)\s+\w+ed\b").expect("passive voice pattern is valid"));

/// Shared lowercase view and segmentation of the text under analysis.
#[derive(Debug)]
pub struct TextProfile {
    pub lower: String,
    pub char_count: usize,
    pub word_count: usize,
    pub distinct_words: usize,
    pub sentences: Vec<String>,
}

impl TextProfile {
    pub fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let trimmed = lower.trim();
        let char_count = trimmed.chars().count();

        let mut word_count = 0usize;
        let mut distinct = HashSet::new();
        for token in trimmed.split_whitespace() {
            word_count += 1;
            let bare = token.trim_matches(|c: char| !c.is_alphanumeric());
            if !bare.is_empty() {
                distinct.insert(bare.to_string());
            }
        }

        let sentences: Vec<String> = SENTENCE_SPLIT
            .split(trimmed)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            lower: trimmed.to_string(),
            char_count,
            word_count,
            distinct_words: distinct.len(),
            sentences,
        }
    }

    /// Average words per sentence; feeds the complexity multiplier.
    pub fn avg_words_per_sentence(&self) -> f64 {
        if self.sentences.is_empty() {
            return 0.0;
        }
        let words: usize = self.sentences.iter().map(|s| s.split_whitespace().count()).sum();
        words as f64 / self.sentences.len() as f64
    }
}

/// Number of table entries present anywhere in the text (distinct matches,
/// case-insensitive substring containment).
fn count_present(lower: &str, table: &[&str]) -> usize {
    table.iter().filter(|term| lower.contains(**term)).count()
}

/// Total non-overlapping occurrences of all table entries.
fn count_occurrences(lower: &str, table: &[&str]) -> usize {
    table.iter().map(|term| lower.matches(*term).count()).sum()
}

/// Signal 1: vocabulary and complexity (max 25).
pub fn vocabulary(profile: &TextProfile) -> SignalScore {
    let mut earned = 0.0;

    if profile.word_count > 0 {
        let academic = count_occurrences(&profile.lower, lists::ACADEMIC_WORDS) as f64;
        let ratio = academic / profile.word_count as f64;
        if ratio > 0.015 {
            earned += 15.0;
        } else if ratio > 0.008 {
            earned += 10.0;
        } else if ratio > 0.003 {
            earned += 5.0;
        }
    }

    let jargon = count_present(&profile.lower, lists::TECH_JARGON);
    if jargon >= 3 {
        earned += 15.0;
    } else if jargon >= 2 {
        earned += 10.0;
    } else if jargon >= 1 {
        earned += 5.0;
    }

    let buzzwords = count_present(&profile.lower, lists::AI_BUZZWORDS);
    if buzzwords >= 2 {
        earned += 12.0;
    } else if buzzwords >= 1 {
        earned += 6.0;
    }

    SignalScore::new(earned, 25.0)
}

/// Signal 2: sentence structure and uniformity (max 22). Earned points
/// require more than 3 sentences; the possible points accrue regardless.
pub fn sentence_structure(profile: &TextProfile) -> SignalScore {
    const POSSIBLE: f64 = 22.0;

    if profile.sentences.len() <= 3 {
        return SignalScore::new(0.0, POSSIBLE);
    }

    let mut earned = 0.0;

    let lengths: Vec<f64> = profile.sentences.iter().map(|s| s.chars().count() as f64).collect();
    let deviation = std_deviation(&lengths);
    if deviation < 25.0 {
        earned += 10.0;
    } else if deviation < 45.0 {
        earned += 6.0;
    } else if deviation < 65.0 {
        earned += 3.0;
    }

    let connective_starts = profile
        .sentences
        .iter()
        .filter(|s| lists::COMPLEX_CONNECTIVES.iter().any(|c| s.starts_with(c)))
        .count();
    let start_fraction = connective_starts as f64 / profile.sentences.len() as f64;
    if start_fraction > 0.4 {
        earned += 8.0;
    } else if start_fraction > 0.25 {
        earned += 5.0;
    }

    if repeated_opener_patterns(&profile.sentences) >= 2 {
        earned += 4.0;
    }

    // Clean text without common misspellings but with contractions reads
    // machine-written once it is long enough.
    if profile.char_count > 200
        && !TYPO_PATTERN.is_match(&profile.lower)
        && CONTRACTION_PATTERN.is_match(&profile.lower)
    {
        earned += 4.0;
    }

    SignalScore::new(earned, POSSIBLE)
}

/// Signal 3: linguistic transitions (max 20).
pub fn transitions(profile: &TextProfile) -> SignalScore {
    let mut earned = 0.0;

    let formal = count_present(&profile.lower, lists::FORMAL_TRANSITIONS);
    if formal >= 2 {
        earned += 15.0;
    } else if formal >= 1 {
        earned += 8.0;
    }

    let safety = count_present(&profile.lower, lists::SAFETY_LANGUAGE);
    if safety >= 2 {
        earned += 12.0;
    } else if safety >= 1 {
        earned += 6.0;
    }

    if count_present(&profile.lower, lists::BALANCED_VIEWPOINTS) >= 2 {
        earned += 3.0;
    }

    let hedging = count_present(&profile.lower, lists::HEDGING_QUALIFIERS);
    if hedging >= 3 {
        earned += 4.0;
    } else if hedging >= 2 {
        earned += 2.0;
    }

    SignalScore::new(earned, 20.0)
}

/// Signal 4: absence of personal voice (max 15).
pub fn personal_voice_absence(profile: &TextProfile) -> SignalScore {
    let mut earned = 0.0;
    let personal = count_present(&profile.lower, lists::PERSONAL_PHRASES);

    if personal == 0 {
        if profile.char_count > 200 {
            earned += 10.0;
        } else if profile.char_count > 100 {
            earned += 6.0;
        }
    } else if personal <= 1 && profile.char_count > 150 {
        earned += 3.0;
    }

    if profile.word_count > 80 && count_present(&profile.lower, lists::EMOTIONAL_WORDS) == 0 {
        earned += 5.0;
    }

    if profile.word_count > 100 && count_present(&profile.lower, lists::INFORMAL_WORDS) == 0 {
        earned += 3.0;
    }

    SignalScore::new(earned, 15.0)
}

/// Signal 5: modern-AI phrasing signatures (max 18).
///
/// The assistant-phrase sub-score of +30 intentionally exceeds the category's
/// own max; the ladder stage downstream operates on the raw tally, so the
/// arithmetic is preserved literally rather than capped.
pub fn ai_signatures(profile: &TextProfile) -> SignalScore {
    let mut earned = 0.0;

    let assistant = count_present(&profile.lower, lists::ASSISTANT_PHRASES);
    if assistant >= 2 {
        earned += 30.0;
    } else if assistant >= 1 {
        earned += 18.0;
    }

    let intensifiers = count_present(&profile.lower, lists::INTENSIFIERS);
    if intensifiers >= 3 {
        earned += 15.0;
    } else if intensifiers >= 2 {
        earned += 10.0;
    } else if intensifiers >= 1 {
        earned += 5.0;
    }

    let corporate = count_present(&profile.lower, lists::CORPORATE_SPEAK);
    if corporate >= 2 {
        earned += 12.0;
    } else if corporate >= 1 {
        earned += 6.0;
    }

    SignalScore::new(earned, 18.0)
}

/// Signal 6: statistical analysis (max 16).
pub fn statistical(profile: &TextProfile) -> SignalScore {
    let mut earned = 0.0;

    let entropy = shannon_entropy(&profile.lower);
    if entropy < 3.5 {
        earned += 8.0;
    } else if entropy < 4.0 {
        earned += 4.0;
    }

    if profile.word_count > 50 {
        let ttr = profile.distinct_words as f64 / profile.word_count as f64;
        if ttr < 0.4 {
            earned += 8.0;
        } else if ttr < 0.5 {
            earned += 4.0;
        }
    }

    SignalScore::new(earned, 16.0)
}

/// Signal 7: syntactic complexity (max 12).
pub fn syntactic(profile: &TextProfile) -> SignalScore {
    let mut earned = 0.0;

    if profile.word_count > 0 {
        let function_tokens = profile
            .lower
            .split_whitespace()
            .filter(|token| {
                let bare = token.trim_matches(|c: char| !c.is_alphanumeric());
                lists::FUNCTION_WORDS.contains(&bare)
            })
            .count();
        let ratio = function_tokens as f64 / profile.word_count as f64;
        if ratio > 0.15 {
            earned += 6.0;
        } else if ratio > 0.12 {
            earned += 3.0;
        }
    }

    if !profile.sentences.is_empty() {
        let passive = PASSIVE_PATTERN.find_iter(&profile.lower).count() as f64;
        let ratio = passive / profile.sentences.len() as f64;
        if ratio > 0.3 {
            earned += 6.0;
        } else if ratio > 0.2 {
            earned += 3.0;
        }
    }

    SignalScore::new(earned, 12.0)
}

/// Signal 8: context-aware patterns (max 15).
pub fn context_patterns(profile: &TextProfile) -> SignalScore {
    let mut earned = 0.0;

    let educational = count_present(&profile.lower, lists::EDUCATIONAL_PHRASES);
    if educational >= 3 {
        earned += 8.0;
    } else if educational >= 2 {
        earned += 5.0;
    } else if educational >= 1 {
        earned += 2.0;
    }

    let hedges = count_present(&profile.lower, lists::HEDGE_WORDS);
    if hedges >= 5 {
        earned += 7.0;
    } else if hedges >= 3 {
        earned += 4.0;
    } else if hedges >= 2 {
        earned += 2.0;
    }

    SignalScore::new(earned, 15.0)
}

/// Signal 9: advanced stylistic patterns (max 12).
pub fn stylistic_patterns(profile: &TextProfile) -> SignalScore {
    let mut earned = 0.0;

    let ordinals = count_present(&profile.lower, lists::ORDINAL_TRANSITIONS);
    if ordinals >= 4 {
        earned += 6.0;
    } else if ordinals >= 3 {
        earned += 4.0;
    } else if ordinals >= 2 {
        earned += 2.0;
    }

    let present_time = count_present(&profile.lower, lists::PRESENT_TIME_REFERENCES);
    if present_time >= 3 {
        earned += 6.0;
    } else if present_time >= 2 {
        earned += 3.0;
    }

    SignalScore::new(earned, 12.0)
}

/// Signal 10: modern-AI detection patterns (max 25).
pub fn modern_ai_patterns(profile: &TextProfile) -> SignalScore {
    let mut earned = 0.0;

    // Flat bonus, independent of how many self-referential phrases appear.
    if count_present(&profile.lower, lists::SELF_REFERENTIAL_AI) >= 1 {
        earned += 15.0;
    }

    let helpers = count_present(&profile.lower, lists::HELPER_PHRASES);
    if helpers >= 3 {
        earned += 10.0;
    } else if helpers >= 2 {
        earned += 5.0;
    }

    let meta = count_present(&profile.lower, lists::META_COMMENTARY);
    if meta >= 2 {
        earned += 4.0;
    } else if meta >= 1 {
        earned += 2.0;
    }

    let redundant = count_present(&profile.lower, lists::REDUNDANT_EMPHASIS);
    if redundant >= 2 {
        earned += 4.0;
    } else if redundant >= 1 {
        earned += 2.0;
    }

    SignalScore::new(earned, 25.0)
}

/// Population standard deviation.
fn std_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Distinct three-word sentence openers that recur in two or more sentences.
fn repeated_opener_patterns(sentences: &[String]) -> usize {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for sentence in sentences {
        let opener: Vec<&str> = sentence.split_whitespace().take(3).collect();
        if opener.len() == 3 {
            *counts.entry(opener.join(" ")).or_insert(0) += 1;
        }
    }
    counts.values().filter(|&&n| n >= 2).count()
}

/// Shannon entropy of the character distribution.
fn shannon_entropy(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }
    let total = total as f64;
    counts
        .values()
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(text: &str) -> TextProfile {
        TextProfile::new(text)
    }

    #[test]
    fn test_profile_counts() {
        let p = profile("Hello world. This is fine! Right?");
        assert_eq!(p.sentences.len(), 3);
        assert_eq!(p.word_count, 6);
    }

    #[test]
    fn test_std_deviation_uniform() {
        assert_eq!(std_deviation(&[10.0, 10.0, 10.0]), 0.0);
    }

    #[test]
    fn test_std_deviation_spread() {
        let dev = std_deviation(&[10.0, 50.0, 90.0]);
        assert!(dev > 30.0);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        assert_eq!(shannon_entropy("aaaa"), 0.0);
    }

    #[test]
    fn test_shannon_entropy_english_range() {
        let entropy = shannon_entropy("the quick brown fox jumps over the lazy dog");
        assert!(entropy > 3.0 && entropy < 5.0);
    }

    #[test]
    fn test_repeated_opener_patterns() {
        let sentences = vec![
            "it is clear that one".to_string(),
            "it is clear to me".to_string(),
            "the point is made".to_string(),
            "the point is taken".to_string(),
        ];
        assert_eq!(repeated_opener_patterns(&sentences), 2);
    }

    #[test]
    fn test_vocabulary_jargon_tiers() {
        let none = vocabulary(&profile("plain words only here"));
        assert_eq!(none.earned, 0.0);
        assert_eq!(none.possible, 25.0);

        let heavy = vocabulary(&profile(
            "The algorithm drives the optimization of the framework across the architecture.",
        ));
        assert!(heavy.earned >= 15.0);
    }

    #[test]
    fn test_sentence_structure_needs_four_sentences() {
        let short = sentence_structure(&profile("One. Two. Three."));
        assert_eq!(short.earned, 0.0);
        assert_eq!(short.possible, 22.0);
    }

    #[test]
    fn test_sentence_structure_uniform_lengths() {
        // Four near-identical-length sentences, no connectives.
        let text = "the cat sat on a mat. the dog ran in a yard. the sun set on a hill. the kid had an old toy.";
        let score = sentence_structure(&profile(text));
        assert!(score.earned >= 10.0, "uniform sentences should earn the deviation tier");
    }

    #[test]
    fn test_ai_signatures_over_cap() {
        let text = "I hope this helps! Feel free to reach out. This is crucial and essential and vital, \
                    with significant and profound consequences. Best practices matter; moving forward we leverage synergy.";
        let score = ai_signatures(&profile(text));
        // 30 (assistant >= 2) + 15 (intensifiers >= 3) + 12 (corporate >= 2)
        assert_eq!(score.earned, 57.0);
        assert_eq!(score.possible, 18.0);
    }

    #[test]
    fn test_personal_voice_absence_informal_text() {
        let text = "I think it was fun. I remember my friend and me and my family went there, yeah.";
        let score = personal_voice_absence(&profile(text));
        assert_eq!(score.earned, 0.0);
    }

    #[test]
    fn test_personal_voice_absence_formal_text() {
        let text = "The committee reviewed the proposal and identified several structural deficiencies. \
                    The document outlines remediation steps and the projected completion timeline in detail. \
                    Funding allocations were adjusted to reflect the revised schedule across departments.";
        assert!(text.len() > 200);
        let score = personal_voice_absence(&profile(text));
        assert!(score.earned >= 10.0);
    }

    #[test]
    fn test_statistical_degenerate_entropy() {
        // A single repeated character has zero entropy; the low-entropy tier
        // applies all the way down.
        let score = statistical(&profile("aaaa aaaa aaaa"));
        assert_eq!(score.earned, 8.0);
    }

    #[test]
    fn test_statistical_repetitive_text() {
        let repeated = "the same words repeat here again and ".repeat(12);
        let score = statistical(&profile(&repeated));
        assert!(score.earned >= 4.0, "low type-token ratio should earn points");
    }

    #[test]
    fn test_syntactic_passive_voice() {
        let text = "The report was completed. The data was analyzed. The work was reviewed. Results are expected.";
        let score = syntactic(&profile(text));
        assert!(score.earned >= 6.0);
    }

    #[test]
    fn test_modern_ai_self_referential_flat_bonus() {
        let one = modern_ai_patterns(&profile("as an ai, i summarize documents"));
        let many = modern_ai_patterns(&profile("as an ai and as a language model, my training data ends"));
        assert_eq!(one.earned, 15.0);
        assert_eq!(many.earned, 15.0);
    }

    #[test]
    fn test_context_patterns_tiers() {
        let text = "for example this works. for instance that works. such as these cases show.";
        let score = context_patterns(&profile(text));
        assert_eq!(score.earned, 8.0);
    }

    #[test]
    fn test_possible_totals_are_fixed() {
        let p = profile("anything");
        let total: f64 = [
            vocabulary(&p),
            sentence_structure(&p),
            transitions(&p),
            personal_voice_absence(&p),
            ai_signatures(&p),
            statistical(&p),
            syntactic(&p),
            context_patterns(&p),
            stylistic_patterns(&p),
            modern_ai_patterns(&p),
        ]
        .iter()
        .map(|s| s.possible)
        .sum();
        assert_eq!(total, 180.0);
    }
}
