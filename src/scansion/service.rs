/*!
 * Scansion service: per-line analysis pipeline and poem aggregation.
 *
 * Runs each line's words through stress resolution, poetic syllable
 * adjustment and syllabification, hands the flattened syllable sequence to
 * the metrical optimizer, labels feet and meter, and combines per-line
 * results into a document-level summary. Also maps syllables back to byte
 * offsets in the original text for highlighting consumers.
 */

use std::collections::HashMap;
use std::sync::Arc;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

use super::elision::{adjusted_syllable_count, reduce_pattern};
use super::meter::{classify_meter, identify_feet};
use super::optimizer::{SyllableContext, optimize_line};
use super::stress::{clean_word, resolve_stress};
use super::syllabify::syllabify;

/// Label used when no meter dominates a poem
const FREE_VERSE: &str = "free verse";

/// One performed syllable of one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllable {
    /// Slice of the cleaned word this syllable covers
    pub text: String,
    /// Final (optimized) stress value
    pub stressed: bool,
}

/// Scansion of a single whitespace-delimited token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordScansion {
    /// The raw token as it appears in the line
    pub surface_text: String,
    /// Performed syllables in order
    pub syllables: Vec<Syllable>,
    /// Stress pattern over `{'u','/'}`, one char per syllable
    pub stress_pattern: String,
}

/// Scansion of one non-blank line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineScansion {
    /// Zero-based index of the line in the original text
    pub line_index: usize,
    /// The line text as analyzed
    pub text: String,
    /// Per-word scansions in order
    pub words: Vec<WordScansion>,
    /// Concatenated stress pattern for the whole line
    pub full_pattern: String,
    /// Named feet from greedy segmentation
    pub feet: Vec<String>,
    /// Matched standard meter, empty when unclassified
    pub meter_type: String,
    /// Whether a standard meter cleared its threshold
    pub is_regular: bool,
}

/// Document-level scansion summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemAnalysis {
    /// Per-line scansions, blank lines skipped
    pub lines: Vec<LineScansion>,
    /// Most frequent classified meter, or "free verse"
    pub dominant_meter: String,
    /// Percentage of non-blank lines with a regular meter (0-100)
    pub regularity_score: u32,
}

/// A syllable addressed by byte offsets into the original, unmodified text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StressedSyllableInstance {
    /// The original text slice for this syllable
    pub text: String,
    /// Byte offset of the slice start in the original text
    pub start_offset: usize,
    /// Byte offset one past the slice end
    pub end_offset: usize,
    /// Final stress value
    pub stressed: bool,
}

/// Analysis options for the scansion service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScansionConfig {
    /// Whether the optimizer runs; disabled leaves the lexical baseline
    #[serde(default = "default_true")]
    pub optimize: bool,

    /// Whether feet are identified on the final pattern
    #[serde(default = "default_true")]
    pub identify_feet: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScansionConfig {
    fn default() -> Self {
        Self {
            optimize: true,
            identify_feet: true,
        }
    }
}

/// Scansion engine facade.
///
/// Holds the analysis options and an optional shared pronunciation lexicon.
/// All analysis entry points are pure with respect to the service state, so
/// one service can serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct ScansionService {
    config: ScansionConfig,
    lexicon: Option<Arc<Lexicon>>,
}

impl ScansionService {
    /// Create a service with default options and no lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with custom options
    pub fn with_config(config: ScansionConfig) -> Self {
        ScansionService {
            config,
            lexicon: None,
        }
    }

    /// Attach a shared pronunciation lexicon
    pub fn with_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Whether a lexicon with entries is attached
    pub fn has_lexicon(&self) -> bool {
        self.lexicon.as_ref().is_some_and(|l| l.is_loaded())
    }

    /// Analyze a whole poem.
    ///
    /// Blank and whitespace-only lines are skipped; surviving lines keep
    /// their original zero-based index.
    pub fn analyze(&self, text: &str) -> PoemAnalysis {
        let lines: Vec<LineScansion> = text
            .lines()
            .enumerate()
            .filter_map(|(index, line)| self.analyze_line(line, index))
            .collect();

        let (dominant_meter, regularity_score) = Self::aggregate(&lines);
        debug!(
            "Analyzed {} lines, dominant meter: {}, regularity: {}",
            lines.len(),
            dominant_meter,
            regularity_score
        );

        PoemAnalysis {
            lines,
            dominant_meter,
            regularity_score,
        }
    }

    /// Analyze a single line; None for blank lines
    pub fn analyze_line(&self, line: &str, line_index: usize) -> Option<LineScansion> {
        if line.trim().is_empty() {
            return None;
        }

        let mut words: Vec<WordScansion> = line
            .split_whitespace()
            .filter_map(|token| self.scan_word(token))
            .collect();

        if self.config.optimize {
            self.apply_optimizer(&mut words);
        }

        let full_pattern: String = words.iter().map(|w| w.stress_pattern.as_str()).collect();
        let feet = if self.config.identify_feet && !full_pattern.is_empty() {
            identify_feet(&full_pattern)
        } else {
            Vec::new()
        };
        let (meter_type, is_regular) = if full_pattern.is_empty() {
            (String::new(), false)
        } else {
            classify_meter(&full_pattern)
        };

        Some(LineScansion {
            line_index,
            text: line.to_string(),
            words,
            full_pattern,
            feet,
            meter_type,
            is_regular,
        })
    }

    /// Recompute scansion and map each syllable to byte offsets in the
    /// original text. When `line_filter` is given only that line is scanned.
    pub fn scansion_instances(
        &self,
        text: &str,
        line_filter: Option<usize>,
    ) -> Vec<StressedSyllableInstance> {
        let mut instances = Vec::new();
        let mut line_start = 0usize;

        for (index, line) in text.split('\n').enumerate() {
            let wanted = line_filter.is_none_or(|filter| filter == index);
            if wanted {
                if let Some(scansion) = self.analyze_line(line, index) {
                    Self::map_line_instances(line, line_start, &scansion, &mut instances);
                }
            }
            line_start += line.len() + 1;
        }

        instances
    }

    /// Build one word's scansion: resolve, adjust, reduce, syllabify
    fn scan_word(&self, token: &str) -> Option<WordScansion> {
        let cleaned = clean_word(token);
        if cleaned.is_empty() {
            return None;
        }

        let resolved = resolve_stress(token, self.lexicon.as_deref());
        if resolved.is_empty() {
            return None;
        }

        let performed = adjusted_syllable_count(&cleaned, resolved.len());
        let pattern = if performed < resolved.len() {
            reduce_pattern(&resolved, performed)
        } else {
            resolved
        };

        let pieces = syllabify(&cleaned, pattern.len());
        let syllables: Vec<Syllable> = pieces
            .into_iter()
            .zip(pattern.chars())
            .map(|(text, mark)| Syllable {
                text,
                stressed: mark == '/',
            })
            .collect();
        // The split can clamp below the requested count; the pattern must
        // stay in lockstep with the syllables actually produced
        let stress_pattern: String = syllables
            .iter()
            .map(|s| if s.stressed { '/' } else { 'u' })
            .collect();

        Some(WordScansion {
            surface_text: token.to_string(),
            syllables,
            stress_pattern,
        })
    }

    /// Run the metrical optimizer and write the result back into the words
    fn apply_optimizer(&self, words: &mut [WordScansion]) {
        let mut contexts = Vec::new();
        for (word_index, word) in words.iter().enumerate() {
            let cleaned = clean_word(&word.surface_text);
            let count = word.syllables.len();
            for (syllable_index, syllable) in word.syllables.iter().enumerate() {
                contexts.push(SyllableContext::for_word_syllable(
                    &cleaned,
                    word_index,
                    syllable_index,
                    count,
                    syllable.stressed,
                ));
            }
        }
        if contexts.is_empty() {
            return;
        }

        let optimized = optimize_line(&contexts);

        let mut position = 0usize;
        for word in words.iter_mut() {
            for syllable in word.syllables.iter_mut() {
                syllable.stressed = optimized[position];
                position += 1;
            }
            word.stress_pattern = word
                .syllables
                .iter()
                .map(|s| if s.stressed { '/' } else { 'u' })
                .collect();
        }
    }

    /// Dominant meter and regularity score over analyzed lines
    fn aggregate(lines: &[LineScansion]) -> (String, u32) {
        if lines.is_empty() {
            return (FREE_VERSE.to_string(), 0);
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for line in lines {
            if line.meter_type.is_empty() {
                continue;
            }
            let entry = counts.entry(line.meter_type.as_str()).or_insert(0);
            if *entry == 0 {
                order.push(line.meter_type.as_str());
            }
            *entry += 1;
        }

        // Most frequent label; earliest-seen wins ties
        let mut dominant = FREE_VERSE;
        let mut best = 0usize;
        for name in &order {
            if counts[*name] > best {
                best = counts[*name];
                dominant = *name;
            }
        }
        let dominant = dominant.to_string();

        let regular = lines.iter().filter(|l| l.is_regular).count();
        let score = ((regular as f64 / lines.len() as f64) * 100.0).round() as u32;

        (dominant, score)
    }

    /// Map one analyzed line's syllables onto the original line text
    fn map_line_instances(
        line: &str,
        line_start: usize,
        scansion: &LineScansion,
        out: &mut Vec<StressedSyllableInstance>,
    ) {
        let mut cursor = 0usize;
        for word in &scansion.words {
            let found = match line[cursor..].find(&word.surface_text) {
                Some(offset) => cursor + offset,
                None => continue,
            };
            Self::map_word_instances(line, found, word, line_start, out);
            cursor = found + word.surface_text.len();
        }
    }

    /// Walk a raw token and emit offset-addressed instances per syllable.
    ///
    /// Punctuation inside or around the token is tolerated: syllable letters
    /// are consumed case-insensitively and non-letter characters between
    /// them are skipped, so the emitted slice always starts and ends on the
    /// syllable's own characters.
    fn map_word_instances(
        line: &str,
        word_start: usize,
        word: &WordScansion,
        line_start: usize,
        out: &mut Vec<StressedSyllableInstance>,
    ) {
        let raw = &line[word_start..word_start + word.surface_text.len()];
        let mut chars = raw.char_indices().peekable();

        for syllable in &word.syllables {
            // Skip leading punctuation
            while let Some(&(_, c)) = chars.peek() {
                if c.is_alphabetic() || c == '\'' || c == '\u{2019}' {
                    break;
                }
                chars.next();
            }
            let start = match chars.peek() {
                Some(&(i, _)) => i,
                None => break,
            };
            let mut end = start;

            for _ in syllable.text.chars() {
                loop {
                    match chars.next() {
                        Some((i, c)) => {
                            if c.is_alphabetic() || c == '\'' || c == '\u{2019}' {
                                end = i + c.len_utf8();
                                break;
                            }
                        }
                        None => break,
                    }
                }
            }

            if end > start {
                out.push(StressedSyllableInstance {
                    text: raw[start..end].to_string(),
                    start_offset: line_start + word_start + start,
                    end_offset: line_start + word_start + end,
                    stressed: syllable.stressed,
                });
            }
        }
    }
}
