/*!
 * Tests for foot identification and meter classification
 */

use meterwise::scansion::METER_TEMPLATES;
use meterwise::scansion::meter::{classify_meter, identify_feet, match_ratio};

#[test]
fn test_meterTemplates_shouldBeWellFormed() {
    for template in METER_TEMPLATES {
        assert!(!template.name.is_empty());
        assert!(template.pattern.chars().all(|c| c == 'u' || c == '/'));
        assert!(
            (0.8..=0.9).contains(&template.min_match_ratio),
            "threshold out of range for {}",
            template.name
        );
    }
}

#[test]
fn test_everyTemplate_shouldMatchItselfExactly() {
    for template in METER_TEMPLATES {
        let ratio = match_ratio(template.pattern, template.pattern);
        assert_eq!(ratio, 1.0);
        assert!(ratio >= template.min_match_ratio);
    }
}

#[test]
fn test_identifyFeet_shouldConsumeWholePattern() {
    for pattern in ["u/u/u/u/u/", "u/u/uu/u/", "/u/u/u/", "uu/uu/uu/", "//uu//"] {
        let feet = identify_feet(pattern);
        let consumed: usize = feet
            .iter()
            .map(|f| match f.as_str() {
                "anapest" | "dactyl" => 3,
                "catalectic" => 1,
                _ => 2,
            })
            .sum();
        assert_eq!(consumed, pattern.len(), "feet do not cover {}", pattern);
    }
}

#[test]
fn test_identifyFeet_withAnapesticLine_shouldLabelAnapests() {
    assert_eq!(
        identify_feet("uu/uu/uu/"),
        vec!["anapest", "anapest", "anapest"]
    );
}

#[test]
fn test_classifyMeter_withCommonMeters_shouldName() {
    let cases = [
        ("u/u/u/u/", "iambic tetrameter"),
        ("u/u/u/u/u/", "iambic pentameter"),
        ("u/u/u/", "iambic trimeter"),
        ("/u/u/u/u", "trochaic tetrameter"),
        ("uu/uu/uu/uu/", "anapestic tetrameter"),
    ];
    for (pattern, expected) in cases {
        let (name, regular) = classify_meter(pattern);
        assert_eq!(name, expected, "wrong meter for {}", pattern);
        assert!(regular);
    }
}

#[test]
fn test_classifyMeter_withCatalecticLength_shouldDiscountButMatch() {
    // Nine iambic syllables: off-by-one from tetrameter at 0.95
    let (name, regular) = classify_meter("u/u/u/u/u");
    assert_eq!(name, "iambic tetrameter");
    assert!(regular);
}

#[test]
fn test_classifyMeter_withNoisyLine_shouldReturnUnclassified() {
    for pattern in ["u/u/uu/u/", "////", "uuuuuuu", "/"] {
        let (name, regular) = classify_meter(pattern);
        assert_eq!(name, "", "unexpected match for {}", pattern);
        assert!(!regular);
    }
}

#[test]
fn test_matchRatio_withLargeLengthGap_shouldBeZero() {
    assert_eq!(match_ratio("u/u/", "u/u/u/u/u/"), 0.0);
    assert_eq!(match_ratio("u/", ""), 0.0);
}
