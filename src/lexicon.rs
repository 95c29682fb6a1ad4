use std::collections::HashMap;
use std::fs;
use std::path::Path;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::LexiconError;

// @module: Pronunciation lexicon repository

// @const: CMU dictionary headword regex, e.g. "WORD" or "WORD(2)"
static HEADWORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\s(]+)(?:\((\d+)\))?$").unwrap()
});

/// A single pronunciation of a word.
///
/// `stress_codes` holds one entry per vowel nucleus: 0 = unstressed,
/// 1 = primary stress, 2 = secondary stress. `syllables` holds the
/// phoneme groups the pronunciation splits into, one string per nucleus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pronunciation {
    // @field: Per-vowel stress codes (0, 1 or 2)
    pub stress_codes: Vec<u8>,

    // @field: Phoneme groups, one per syllable
    pub syllables: Vec<String>,
}

impl Pronunciation {
    /// Create a pronunciation from raw stress codes, without phoneme data
    pub fn from_codes(stress_codes: Vec<u8>) -> Self {
        Pronunciation {
            stress_codes,
            syllables: Vec::new(),
        }
    }
}

/// Read-only word -> pronunciations repository.
///
/// Lifecycle: constructed empty (nothing loaded) or injected exactly once
/// from an in-memory map or a CMU-format source. No mutation happens after
/// construction, so the repository can be shared across analyses behind an
/// `Arc` without locking.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    /// Entries keyed by lowercase word
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl Lexicon {
    /// Create an empty, not-loaded lexicon
    pub fn new() -> Self {
        Lexicon {
            entries: HashMap::new(),
        }
    }

    /// One-time injection from an already-built map
    pub fn from_entries(entries: HashMap<String, Vec<Pronunciation>>) -> Self {
        let normalized = entries
            .into_iter()
            .map(|(word, prons)| (word.to_lowercase(), prons))
            .collect();
        Lexicon {
            entries: normalized,
        }
    }

    /// Parse a CMU pronouncing dictionary from a string.
    ///
    /// Handles `;;;` comment lines, alternate-pronunciation headwords like
    /// `WORD(2)`, and phoneme stress digits (`AH0`, `EH1`, `OW2`). Malformed
    /// lines are skipped with a warning rather than failing the whole load.
    pub fn from_cmudict_str(content: &str) -> Result<Self, LexiconError> {
        let mut entries: HashMap<String, Vec<Pronunciation>> = HashMap::new();
        let mut skipped = 0usize;

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(";;;") {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let headword = match parts.next() {
                Some(h) => h,
                None => continue,
            };

            let captures = match HEADWORD_REGEX.captures(headword) {
                Some(caps) => caps,
                None => {
                    skipped += 1;
                    continue;
                }
            };
            let word = captures.get(1).map_or("", |m| m.as_str()).to_lowercase();

            let phonemes: Vec<&str> = parts.collect();
            if word.is_empty() || phonemes.is_empty() {
                skipped += 1;
                continue;
            }

            let pronunciation = Self::pronunciation_from_phonemes(&phonemes);
            if pronunciation.stress_codes.is_empty() {
                skipped += 1;
                continue;
            }

            entries.entry(word).or_default().push(pronunciation);
        }

        if skipped > 0 {
            warn!("Skipped {} malformed lexicon lines", skipped);
        }

        if entries.is_empty() {
            return Err(LexiconError::Empty {
                path: "<string>".to_string(),
            });
        }

        debug!("Loaded {} lexicon entries", entries.len());
        Ok(Lexicon { entries })
    }

    /// Load a CMU-format lexicon from a file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        match Self::from_cmudict_str(&content) {
            Ok(lexicon) => Ok(lexicon),
            Err(LexiconError::Empty { .. }) => Err(LexiconError::Empty {
                path: path.display().to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    /// Whether any dictionary data has been injected
    pub fn is_loaded(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-vowel stress codes for a word (first pronunciation), None if unknown
    pub fn stress_codes(&self, word: &str) -> Option<&[u8]> {
        self.entries
            .get(&word.to_lowercase())
            .and_then(|prons| prons.first())
            .map(|p| p.stress_codes.as_slice())
    }

    /// Phoneme-group syllables for a word (first pronunciation), None if unknown
    pub fn syllables(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(&word.to_lowercase())
            .and_then(|prons| prons.first())
            .map(|p| p.syllables.as_slice())
    }

    /// Dictionary syllable count for a word, None if unknown
    pub fn syllable_count(&self, word: &str) -> Option<usize> {
        self.stress_codes(word).map(|codes| codes.len())
    }

    /// All pronunciations recorded for a word
    pub fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries
            .get(&word.to_lowercase())
            .map(|prons| prons.as_slice())
    }

    // @builds: Pronunciation from ARPABET phonemes with trailing stress digits
    fn pronunciation_from_phonemes(phonemes: &[&str]) -> Pronunciation {
        let mut stress_codes = Vec::new();
        let mut syllables: Vec<Vec<&str>> = Vec::new();
        let mut onset: Vec<&str> = Vec::new();

        for &phoneme in phonemes {
            let stress_digit = phoneme
                .chars()
                .last()
                .and_then(|c| c.to_digit(10))
                .map(|d| d as u8);

            match stress_digit {
                Some(code) => {
                    stress_codes.push(code.min(2));
                    let mut group = std::mem::take(&mut onset);
                    group.push(phoneme);
                    syllables.push(group);
                }
                None => {
                    onset.push(phoneme);
                }
            }
        }

        // Trailing consonants close the last syllable
        if !onset.is_empty() {
            if let Some(last) = syllables.last_mut() {
                last.append(&mut onset);
            }
        }

        Pronunciation {
            stress_codes,
            syllables: syllables.iter().map(|group| group.join(" ")).collect(),
        }
    }
}
