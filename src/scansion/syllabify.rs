/*!
 * Orthographic syllabification.
 *
 * Splits a cleaned word into a target number of substrings whose
 * concatenation reconstructs the input exactly. The contract is correct
 * concatenation and a stable, deterministic split - not phonetic precision
 * below the word level. Resolution order: manual override table,
 * vowel-nucleus split, proportional fallback.
 */

use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Exact breakdowns for high-frequency or ambiguous words.
///
/// An override is used only when its length matches the requested count.
pub static SYLLABLE_OVERRIDES: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("beautiful", vec!["beau", "ti", "ful"]);
    m.insert("poetry", vec!["po", "e", "try"]);
    m.insert("quiet", vec!["qui", "et"]);
    m.insert("being", vec!["be", "ing"]);
    m.insert("every", vec!["eve", "ry"]);
    m.insert("heaven", vec!["heav", "en"]);
    m.insert("flower", vec!["flow", "er"]);
    m.insert("power", vec!["pow", "er"]);
    m.insert("over", vec!["o", "ver"]);
    m.insert("even", vec!["e", "ven"]);
    m.insert("open", vec!["o", "pen"]);
    m.insert("lovely", vec!["love", "ly"]);
    m.insert("ocean", vec!["o", "cean"]);
    m.insert("science", vec!["sci", "ence"]);
    m.insert("diverged", vec!["di", "verged"]);
    m
});

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Maximal vowel runs as (start, end) char-index ranges
fn vowel_nuclei(chars: &[char]) -> Vec<(usize, usize)> {
    let mut nuclei = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in chars.iter().enumerate() {
        if is_vowel(*c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            nuclei.push((s, i));
        }
    }
    if let Some(s) = start {
        nuclei.push((s, chars.len()));
    }

    // A trailing lone silent e folds into the previous nucleus
    if nuclei.len() > 1 {
        let (last_start, last_end) = nuclei[nuclei.len() - 1];
        let lone_final_e =
            last_end == chars.len() && last_end - last_start == 1 && chars[last_start] == 'e';
        if lone_final_e {
            nuclei.pop();
        }
    }

    nuclei
}

/// Split a cleaned word into `target` substrings.
///
/// Concatenating the result always reconstructs `word`.
pub fn syllabify(word: &str, target: usize) -> Vec<String> {
    if word.is_empty() || target == 0 {
        return Vec::new();
    }
    if target == 1 {
        return vec![word.to_string()];
    }

    if let Some(parts) = SYLLABLE_OVERRIDES.get(word) {
        if parts.len() == target {
            return parts.iter().map(|s| (*s).to_string()).collect();
        }
    }

    let chars: Vec<char> = word.chars().collect();
    if chars.len() < target {
        return proportional_split(&chars, chars.len().max(1));
    }

    let nuclei = vowel_nuclei(&chars);
    if nuclei.len() == target {
        return nucleus_split(&chars, &nuclei);
    }

    proportional_split(&chars, target)
}

/// Place boundaries between adjacent nuclei: a single intervening consonant
/// attaches to the following syllable, larger clusters split in half.
fn nucleus_split(chars: &[char], nuclei: &[(usize, usize)]) -> Vec<String> {
    let mut boundaries = Vec::with_capacity(nuclei.len() + 1);
    boundaries.push(0);

    for pair in nuclei.windows(2) {
        let cluster_start = pair[0].1;
        let cluster_end = pair[1].0;
        let cluster_len = cluster_end - cluster_start;
        let boundary = match cluster_len {
            0 => cluster_start,
            1 => cluster_start,
            n => cluster_start + n / 2,
        };
        boundaries.push(boundary);
    }
    boundaries.push(chars.len());

    boundaries
        .windows(2)
        .map(|w| chars[w[0]..w[1]].iter().collect())
        .collect()
}

/// Deterministic even split by character count
fn proportional_split(chars: &[char], target: usize) -> Vec<String> {
    let len = chars.len();
    (0..target)
        .map(|i| {
            let start = i * len / target;
            let end = ((i + 1) * len / target).max(start + 1).min(len);
            chars[start..end].iter().collect()
        })
        .collect()
}
