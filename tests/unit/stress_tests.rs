/*!
 * Tests for lexical stress resolution
 */

use meterwise::scansion::stress::{
    STRESS_EXCEPTIONS, clean_word, count_syllables, resolve_stress,
};

use crate::common::fixture_lexicon;

/// Every exception-table word must resolve to exactly its table pattern,
/// with or without a lexicon attached
#[test]
fn test_resolveStress_withExceptionTableWords_shouldIgnoreLexiconState() {
    let lexicon = fixture_lexicon();

    for (word, expected) in STRESS_EXCEPTIONS.iter() {
        assert_eq!(
            resolve_stress(word, None),
            *expected,
            "pattern changed for {} without lexicon",
            word
        );
        assert_eq!(
            resolve_stress(word, Some(&lexicon)),
            *expected,
            "pattern changed for {} with lexicon",
            word
        );
    }
}

#[test]
fn test_resolveStress_withLexiconWord_shouldUseLexiconPattern() {
    let lexicon = fixture_lexicon();

    assert_eq!(resolve_stress("compare", Some(&lexicon)), "u/");
    assert_eq!(resolve_stress("yellow", Some(&lexicon)), "/u");
    assert_eq!(resolve_stress("undergrowth", Some(&lexicon)), "/u/");
}

#[test]
fn test_resolveStress_withUnknownWord_shouldFallBackToHeuristics() {
    let lexicon = fixture_lexicon();

    // Not in the fixture lexicon, so the affix heuristics decide
    assert_eq!(resolve_stress("grobble", Some(&lexicon)), "/u");
    assert_eq!(resolve_stress("begrob", Some(&lexicon)), "u/");
}

#[test]
fn test_resolveStress_withPunctuatedToken_shouldResolveCleanedWord() {
    assert_eq!(resolve_stress("Day?", None), "/");
    assert_eq!(resolve_stress("wood,", None), "/");
    assert_eq!(resolve_stress("The", None), "u");
}

#[test]
fn test_resolveStress_patternLength_shouldMatchSyllableCount() {
    for word in [
        "tree", "garden", "beautiful", "consideration", "looked", "wanted", "summer's",
    ] {
        let pattern = resolve_stress(word, None);
        assert_eq!(
            pattern.len(),
            count_syllables(&clean_word(word)),
            "length mismatch for {}",
            word
        );
    }
}

#[test]
fn test_countSyllables_withCommonWords_shouldMatchDictionaryCounts() {
    let cases = [
        ("tree", 1),
        ("garden", 2),
        ("compare", 2),
        ("beautiful", 3),
        ("temperate", 3),
        ("diverged", 2),
        ("fire", 1),
        ("looked", 1),
        ("wanted", 2),
    ];
    for (word, expected) in cases {
        assert_eq!(count_syllables(word), expected, "wrong count for {}", word);
    }
}
