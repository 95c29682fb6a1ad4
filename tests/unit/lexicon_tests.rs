/*!
 * Tests for the pronunciation lexicon repository
 */

use std::collections::HashMap;

use meterwise::lexicon::{Lexicon, Pronunciation};
use meterwise::errors::LexiconError;

const SAMPLE_DICT: &str = "\
;;; CMU-style sample
SHALL  SH AE1 L
COMPARE  K AH0 M P EH1 R
COMPARE(2)  K AH0 M P EY1 R
SUMMER  S AH1 M ER0
SUMMER'S  S AH1 M ER0 Z
UNDERGROWTH  AH1 N D ER0 G R OW2 TH
";

#[test]
fn test_loadFromString_shouldExposeQuerySurface() {
    let lexicon = Lexicon::from_cmudict_str(SAMPLE_DICT).unwrap();

    assert!(lexicon.is_loaded());
    assert_eq!(lexicon.len(), 5);
    assert_eq!(lexicon.stress_codes("shall"), Some(&[1u8][..]));
    assert_eq!(lexicon.stress_codes("undergrowth"), Some(&[1u8, 0, 2][..]));
    assert_eq!(lexicon.syllable_count("compare"), Some(2));
    assert!(lexicon.stress_codes("absent").is_none());
}

#[test]
fn test_lookup_shouldBeCaseInsensitive() {
    let lexicon = Lexicon::from_cmudict_str(SAMPLE_DICT).unwrap();

    assert_eq!(lexicon.stress_codes("Shall"), lexicon.stress_codes("shall"));
    assert_eq!(lexicon.stress_codes("SUMMER'S"), lexicon.stress_codes("summer's"));
}

#[test]
fn test_alternatePronunciations_shouldBePreservedInOrder() {
    let lexicon = Lexicon::from_cmudict_str(SAMPLE_DICT).unwrap();

    let prons = lexicon.pronunciations("compare").unwrap();
    assert_eq!(prons.len(), 2);
    assert_eq!(prons[0].stress_codes, vec![0, 1]);
}

#[test]
fn test_syllables_shouldGroupPhonemesAroundNuclei() {
    let lexicon = Lexicon::from_cmudict_str(SAMPLE_DICT).unwrap();

    let syllables = lexicon.syllables("summer").unwrap();
    assert_eq!(syllables.len(), 2);
    assert!(syllables[0].contains("AH1"));
    assert!(syllables[1].contains("ER0"));
}

#[test]
fn test_fromEntries_shouldNormalizeKeys() {
    let mut entries = HashMap::new();
    entries.insert(
        "Garden".to_string(),
        vec![Pronunciation::from_codes(vec![1, 0])],
    );
    let lexicon = Lexicon::from_entries(entries);

    assert_eq!(lexicon.stress_codes("garden"), Some(&[1u8, 0][..]));
    assert_eq!(lexicon.stress_codes("GARDEN"), Some(&[1u8, 0][..]));
}

#[test]
fn test_loadFromPath_withMissingFile_shouldReturnIoError() {
    let result = Lexicon::load_from_path("/nonexistent/cmudict.txt");
    assert!(matches!(result, Err(LexiconError::Io(_))));
}

#[test]
fn test_loadFromPath_withRealFile_shouldRoundTrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dict.txt");
    std::fs::write(&path, SAMPLE_DICT).unwrap();

    let lexicon = Lexicon::load_from_path(&path).unwrap();
    assert_eq!(lexicon.len(), 5);
}
