/*!
 * Tests for the orthographic syllabifier
 */

use meterwise::scansion::stress::{clean_word, count_syllables, resolve_stress};
use meterwise::scansion::syllabify::{SYLLABLE_OVERRIDES, syllabify};

/// Concatenation must reconstruct the input for every strategy
#[test]
fn test_syllabify_shouldAlwaysReconstructCleanedWord() {
    let words = [
        "tree", "garden", "summer", "compare", "beautiful", "wandering", "wand'ring",
        "summer's", "extraordinary", "rhythm", "strength", "darkling",
    ];

    for word in words {
        let cleaned = clean_word(word);
        let target = count_syllables(&cleaned).max(1);
        let parts = syllabify(&cleaned, target);

        let rebuilt: String = parts.concat();
        assert_eq!(rebuilt, cleaned, "characters lost for {}", word);
    }
}

#[test]
fn test_syllabify_withOverrideWords_shouldMatchTableExactly() {
    for (word, parts) in SYLLABLE_OVERRIDES.iter() {
        let split = syllabify(word, parts.len());
        assert_eq!(&split, parts, "override not used for {}", word);

        let rebuilt: String = split.concat();
        assert_eq!(&rebuilt, word, "override does not reconstruct {}", word);
    }
}

#[test]
fn test_syllabify_withNucleusSplit_shouldFollowConsonantRules() {
    // Single consonant goes to the following syllable
    assert_eq!(syllabify("delight", 2), vec!["de", "light"]);
    // Double consonants split between syllables
    assert_eq!(syllabify("winter", 2), vec!["win", "ter"]);
    assert_eq!(syllabify("silent", 2), vec!["si", "lent"]);
}

#[test]
fn test_syllabify_withReducedCount_shouldSplitProportionally() {
    // "wandering" performed as two syllables has three spelled nuclei
    let parts = syllabify("wandering", 2);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts.concat(), "wandering");
}

#[test]
fn test_syllabify_countMatchesResolvedPattern() {
    for word in ["garden", "compare", "beautiful", "tree"] {
        let pattern = resolve_stress(word, None);
        let parts = syllabify(word, pattern.len());
        assert_eq!(parts.len(), pattern.len(), "count mismatch for {}", word);
    }
}

#[test]
fn test_syllabify_withNoVowels_shouldStillSplitDeterministically() {
    let first = syllabify("rhythm", 2);
    let second = syllabify("rhythm", 2);
    assert_eq!(first, second);
    assert_eq!(first.concat(), "rhythm");
}
