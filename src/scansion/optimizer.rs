/*!
 * Metrical stress optimization.
 *
 * Given one line's flattened syllable metadata, searches for the stress
 * assignment that best satisfies a weighted constraint set. Only syllables
 * of single-syllable words are flexible; everything inside a multi-syllable
 * word is fixed at its lexical value. The search enumerates all toggles of
 * at most ten flexible positions layered on the lexical baseline, so a line
 * costs at most 1024 candidate evaluations.
 */

use std::collections::HashSet;
use once_cell::sync::Lazy;

/// Upper bound on simultaneously toggled positions (2^10 candidates)
const MAX_FLEXIBLE_POSITIONS: usize = 10;

/// Monosyllables that resist promotion: articles, prepositions, conjunctions
pub static RESIST_STRESS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "of", "to", "in", "on", "at", "by", "and", "or", "but", "nor", "as",
        "if", "for", "with", "from", "than", "so",
    ]
    .into_iter()
    .collect()
});

/// Heavy monosyllables that resist demotion
pub static RESIST_UNSTRESS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "day", "night", "death", "life", "love", "heart", "god", "sun", "moon", "sea", "sky",
        "time", "world", "man", "men", "king", "queen", "soul", "blood", "fire", "stone",
        "gold", "war", "peace", "truth", "dream", "rose", "star", "wind", "rain", "snow",
        "spring", "youth", "age", "grave", "breath", "light", "dark", "song", "voice", "fate",
        "earth", "wood", "woods", "road", "roads", "home",
    ]
    .into_iter()
    .collect()
});

/// Per-syllable metadata consumed by the optimizer
#[derive(Debug, Clone)]
pub struct SyllableContext {
    /// Index of the owning word within the line
    pub word_index: usize,
    /// Index of this syllable within its word
    pub syllable_index: usize,
    /// Total syllables in the owning word
    pub word_syllable_count: usize,
    /// Stress according to the lexical resolution
    pub lexical_stress: bool,
    /// May be raised to stressed (single-syllable words only)
    pub promotable: bool,
    /// May be lowered to unstressed (single-syllable words only)
    pub demotable: bool,
    /// Stressing this syllable costs a penalty
    pub resist_stress: bool,
    /// Leaving this syllable unstressed costs a penalty
    pub resist_unstress: bool,
}

impl SyllableContext {
    /// Build the context for one syllable of a word.
    ///
    /// `word` must already be cleaned (lowercase letters and apostrophes).
    pub fn for_word_syllable(
        word: &str,
        word_index: usize,
        syllable_index: usize,
        word_syllable_count: usize,
        lexical_stress: bool,
    ) -> Self {
        let monosyllable = word_syllable_count == 1;
        SyllableContext {
            word_index,
            syllable_index,
            word_syllable_count,
            lexical_stress,
            promotable: monosyllable,
            demotable: monosyllable,
            resist_stress: monosyllable && RESIST_STRESS.contains(word),
            resist_unstress: monosyllable && RESIST_UNSTRESS.contains(word),
        }
    }
}

/// Search for the best stress assignment for one line.
///
/// The lexical baseline is always the first candidate and wins ties, so the
/// result is never worse than doing nothing.
pub fn optimize_line(contexts: &[SyllableContext]) -> Vec<bool> {
    let baseline: Vec<bool> = contexts.iter().map(|c| c.lexical_stress).collect();
    if baseline.is_empty() {
        return baseline;
    }

    let selected = select_flexible_positions(contexts, &baseline);
    if selected.is_empty() {
        return baseline;
    }

    let mut best = baseline.clone();
    let mut best_score = score_candidate(&baseline, contexts);

    for mask in 1u32..(1u32 << selected.len()) {
        let mut candidate = baseline.clone();
        for (bit, &position) in selected.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                candidate[position] = !candidate[position];
            }
        }
        let score = score_candidate(&candidate, contexts);
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }

    best
}

/// Flexible positions to toggle, capped at ten.
///
/// When more than ten are flexible, positions whose baseline value breaks
/// local alternation with a neighbor take priority; remaining slots fill
/// with the other flexible positions in line order.
fn select_flexible_positions(contexts: &[SyllableContext], baseline: &[bool]) -> Vec<usize> {
    let flexible: Vec<usize> = contexts
        .iter()
        .enumerate()
        .filter(|(_, c)| c.promotable || c.demotable)
        .map(|(i, _)| i)
        .collect();

    if flexible.len() <= MAX_FLEXIBLE_POSITIONS {
        return flexible;
    }

    let breaks_alternation = |i: usize| {
        let left = i > 0 && baseline[i] == baseline[i - 1];
        let right = i + 1 < baseline.len() && baseline[i] == baseline[i + 1];
        left || right
    };

    let mut selected: Vec<usize> = flexible
        .iter()
        .copied()
        .filter(|&i| breaks_alternation(i))
        .collect();
    for &i in &flexible {
        if selected.len() >= MAX_FLEXIBLE_POSITIONS {
            break;
        }
        if !selected.contains(&i) {
            selected.push(i);
        }
    }
    selected.truncate(MAX_FLEXIBLE_POSITIONS);
    selected
}

/// Weighted constraint score for a full-line candidate, higher is better
pub fn score_candidate(candidate: &[bool], contexts: &[SyllableContext]) -> i32 {
    let n = candidate.len();
    if n == 0 {
        return 0;
    }
    let mut score = 0i32;

    for (i, context) in contexts.iter().enumerate() {
        // Lexical fidelity dominates every other term
        if context.word_syllable_count > 1 && candidate[i] != context.lexical_stress {
            score -= 100;
        }
        if context.resist_stress && candidate[i] {
            score -= 30;
        }
        if context.resist_unstress && !candidate[i] {
            score -= 30;
        }
    }

    // Run-length penalties and alternation bonus
    let mut run = 0usize;
    for i in 0..n {
        if i > 0 && candidate[i] == candidate[i - 1] {
            run += 1;
        } else {
            run = 1;
        }
        if run >= 3 {
            score += if candidate[i] { -10 } else { -20 };
        }
        if i > 0 && candidate[i] != candidate[i - 1] {
            score += 8;
        }
    }

    // Iambic bias over even/odd pair boundaries
    let mut pair = 0;
    while pair + 1 < n {
        match (candidate[pair], candidate[pair + 1]) {
            (false, true) => score += 10,
            (true, false) => score += 2,
            _ => {}
        }
        pair += 2;
    }

    if candidate[n - 1] {
        score += 12;
    }

    // Canonical pentameter template, only for exactly ten syllables
    if n == 10 {
        let mut matches = 0;
        for (i, &stressed) in candidate.iter().enumerate() {
            if stressed == (i % 2 == 1) {
                matches += 1;
            }
        }
        score += matches * 5;
        if matches == 10 {
            score += 20;
        }
    }

    // Plausible beat count for a standard line
    let stressed_count = candidate.iter().filter(|&&s| s).count();
    if (4..=6).contains(&stressed_count) && (8..=12).contains(&n) {
        score += 5;
    }

    score
}
