/*!
 * Lexical stress resolution.
 *
 * Maps a single word token to its base stress pattern, a string over
 * `{'u', '/'}` whose length equals the word's dictionary (or heuristic)
 * syllable count. Resolution order, first match wins:
 * - manual exception table (function words and commonly mis-stressed words)
 * - pronunciation lexicon lookup (numeric stress codes -> binary pattern)
 * - heuristic fallback (vowel-group counting plus prefix/suffix placement)
 */

use std::collections::HashMap;
use once_cell::sync::Lazy;

use crate::lexicon::Lexicon;

/// Function words and commonly mis-stressed words with fixed patterns.
///
/// Many of these are lexically stressable but conventionally unstressed in
/// meter, so the table overrides the lexicon.
pub static STRESS_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    // Articles and determiners
    for word in ["the", "a", "an", "this", "that", "these", "those", "some", "each", "no"] {
        m.insert(word, "u");
    }
    // Personal pronouns
    for word in [
        "i", "me", "my", "we", "us", "our", "you", "your", "he", "him", "his", "she", "her",
        "it", "its", "they", "them", "their", "thou", "thee", "thy", "who", "whom", "ye",
    ] {
        m.insert(word, "u");
    }
    // Prepositions and conjunctions
    for word in [
        "of", "to", "in", "on", "at", "by", "for", "with", "from", "as", "and", "but", "or",
        "nor", "if", "so", "than", "up", "out", "off", "till",
    ] {
        m.insert(word, "u");
    }
    // Auxiliaries and common verb forms
    for word in [
        "is", "am", "are", "was", "were", "be", "been", "do", "did", "does", "has", "have",
        "had", "will", "would", "shall", "should", "can", "could", "might", "must", "hath",
        "doth", "dost", "shalt",
    ] {
        m.insert(word, "u");
    }
    // Two-syllable function words with conventional patterns
    m.insert("upon", "u/");
    m.insert("into", "/u");
    m.insert("unto", "/u");
    m.insert("about", "u/");
    m.insert("above", "u/");
    m.insert("across", "u/");
    m.insert("again", "u/");
    m.insert("against", "u/");
    m.insert("alone", "u/");
    m.insert("along", "u/");
    m.insert("among", "u/");
    m.insert("apart", "u/");
    m.insert("around", "u/");
    m.insert("aside", "u/");
    m.insert("asleep", "u/");
    m.insert("awake", "u/");
    m.insert("away", "u/");
    m.insert("because", "u/");
    m.insert("before", "u/");
    m.insert("behind", "u/");
    m.insert("below", "u/");
    m.insert("beneath", "u/");
    m.insert("beside", "u/");
    m.insert("between", "u/");
    m.insert("beyond", "u/");
    m.insert("within", "u/");
    m.insert("without", "u/");
    m.insert("over", "/u");
    m.insert("under", "/u");
    m.insert("after", "/u");
    m.insert("ever", "/u");
    m.insert("never", "/u");
    m.insert("only", "/u");
    m.insert("any", "/u");
    m.insert("many", "/u");
    m.insert("very", "/u");
    m.insert("being", "/u");
    m.insert("even", "/u");
    m.insert("also", "/u");
    // Three-syllable words the suffix rules mis-place
    m.insert("another", "u/u");
    m.insert("together", "u/u");
    m.insert("remember", "u/u");
    m.insert("forever", "u/u");
    m.insert("however", "u/u");
    m.insert("whatever", "u/u");
    m
});

/// Prefixes that pull two-syllable words toward final stress
const VERB_PREFIXES: &[&str] = &[
    "be", "de", "di", "re", "pre", "pro", "con", "com", "per", "sub", "sur", "trans", "dis",
    "mis", "un", "en", "em", "ex",
];

/// Suffixes that pull two-syllable words toward initial stress; checked
/// before the prefixes so inflected forms like "dinner" stay trochaic
const TROCHAIC_SUFFIXES: &[&str] = &[
    "er", "or", "ly", "ful", "ness", "ing", "est", "ow", "en", "le", "ish",
];

/// Normalize a raw token to lowercase letters and apostrophes.
///
/// Leading apostrophes are kept (they are significant in contractions like
/// `'tis`); trailing apostrophes are dropped (plural possessives).
pub fn clean_word(token: &str) -> String {
    let mut cleaned: String = token
        .chars()
        .filter(|c| c.is_alphabetic() || *c == '\'' || *c == '\u{2019}')
        .map(|c| {
            if c == '\u{2019}' {
                '\''
            } else {
                c.to_lowercase().next().unwrap_or(c)
            }
        })
        .collect();
    while cleaned.ends_with('\'') {
        cleaned.pop();
    }
    cleaned
}

/// Drop apostrophes, keeping letters only
pub fn strip_apostrophes(word: &str) -> String {
    word.chars().filter(|c| c.is_alphabetic()).collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Count maximal vowel runs in a letters-only word
pub fn count_vowel_groups(letters: &str) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for c in letters.chars() {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
                in_group = true;
            }
        } else {
            in_group = false;
        }
    }
    groups
}

/// Heuristic syllable count: vowel groups with silent-`e`, `-ed` and `-es`
/// adjustments, floored at 1 for any word with letters.
pub fn count_syllables(word: &str) -> usize {
    let letters = strip_apostrophes(&word.to_lowercase());
    if letters.is_empty() {
        return 0;
    }

    let chars: Vec<char> = letters.chars().collect();
    let mut count = count_vowel_groups(&letters);

    // Silent final e ("compare", "lease") - but not syllabic "-le" ("able")
    if count > 1 && chars.len() > 2 && chars[chars.len() - 1] == 'e' && !is_vowel(chars[chars.len() - 2]) {
        let syllabic_le =
            chars[chars.len() - 2] == 'l' && !is_vowel(chars[chars.len() - 3]);
        if !syllabic_le {
            count -= 1;
        }
    }

    // Non-syllabic -ed ("looked", "diverged") - syllabic after t/d ("wanted")
    if count > 1 && chars.len() > 3 && letters.ends_with("ed") {
        let before = chars[chars.len() - 3];
        if !is_vowel(before) && before != 't' && before != 'd' {
            count -= 1;
        }
    }

    // Non-syllabic -es ("makes") - syllabic after sibilants ("roses")
    if count > 1 && chars.len() > 3 && letters.ends_with("es") {
        let before = chars[chars.len() - 3];
        let sibilant = matches!(before, 's' | 'x' | 'z' | 'c' | 'g')
            || letters.ends_with("shes")
            || letters.ends_with("ches");
        if !is_vowel(before) && !sibilant {
            count -= 1;
        }
    }

    count.max(1)
}

/// Resolve a word token to its base stress pattern.
///
/// The pattern length equals the word's linguistic syllable count; tokens
/// with no letters resolve to an empty pattern. Pure function of the word
/// and the (optionally absent) lexicon.
pub fn resolve_stress(word: &str, lexicon: Option<&Lexicon>) -> String {
    let cleaned = clean_word(word);
    if cleaned.is_empty() {
        return String::new();
    }

    // 1. Manual exception table
    if let Some(pattern) = STRESS_EXCEPTIONS.get(cleaned.as_str()) {
        return (*pattern).to_string();
    }

    // 2. Pronunciation lexicon
    if let Some(lexicon) = lexicon {
        if lexicon.is_loaded() {
            if let Some(codes) = lexicon.stress_codes(&cleaned) {
                if !codes.is_empty() {
                    return codes
                        .iter()
                        .map(|code| if *code == 0 { 'u' } else { '/' })
                        .collect();
                }
            }
        }
    }

    // 3. Heuristic fallback
    heuristic_stress(&cleaned)
}

/// Rule-of-thumb stress placement for words absent from every table
fn heuristic_stress(word: &str) -> String {
    let count = count_syllables(word);
    let letters = strip_apostrophes(word);
    // Possessives keep the base word's shape for suffix matching
    let base = letters
        .strip_suffix('s')
        .filter(|_| word.ends_with("'s"))
        .unwrap_or(&letters);

    match count {
        0 => String::new(),
        1 => "/".to_string(),
        2 => {
            if TROCHAIC_SUFFIXES.iter().any(|s| base.ends_with(s)) {
                "/u".to_string()
            } else if VERB_PREFIXES
                .iter()
                .any(|p| base.starts_with(p) && base.len() > p.len() + 1)
            {
                "u/".to_string()
            } else {
                "/u".to_string()
            }
        }
        3 => {
            if ["tion", "sion", "cian", "ion", "ic"]
                .iter()
                .any(|s| base.ends_with(s))
            {
                "u/u".to_string()
            } else {
                // Antepenultimate default also covers -ity/-ety/-ify/-ogy/-phy
                "/uu".to_string()
            }
        }
        4 => {
            if ["tion", "sion"].iter().any(|s| base.ends_with(s)) {
                "uu/u".to_string()
            } else {
                "u/uu".to_string()
            }
        }
        n => {
            // Long words: primary stress three syllables from the end,
            // with an initial beat when enough room precedes it
            let mut pattern = vec!['u'; n];
            pattern[n - 3] = '/';
            if n >= 5 {
                pattern[0] = '/';
            }
            pattern.into_iter().collect()
        }
    }
}
