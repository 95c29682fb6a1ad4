/*!
 * Foot identification and meter classification.
 *
 * Segments a finished stress pattern into named metrical feet and matches
 * the whole pattern against a static table of standard meters, each with its
 * own minimum match ratio. Classification ambiguity is data, not an error:
 * an unmatched line gets an empty meter name.
 */

/// A named standard meter with its acceptance threshold
#[derive(Debug, Clone, Copy)]
pub struct MeterTemplate {
    /// Canonical stress pattern over `{'u','/'}`
    pub pattern: &'static str,
    /// Display name, e.g. "iambic pentameter"
    pub name: &'static str,
    /// Minimum match ratio this template requires
    pub min_match_ratio: f64,
}

/// Standard meters in priority order: earlier entries win exact score ties
pub static METER_TEMPLATES: &[MeterTemplate] = &[
    MeterTemplate { pattern: "u/u/", name: "iambic dimeter", min_match_ratio: 0.9 },
    MeterTemplate { pattern: "u/u/u/", name: "iambic trimeter", min_match_ratio: 0.8 },
    MeterTemplate { pattern: "u/u/u/u/", name: "iambic tetrameter", min_match_ratio: 0.8 },
    MeterTemplate { pattern: "u/u/u/u/u/", name: "iambic pentameter", min_match_ratio: 0.8 },
    MeterTemplate { pattern: "u/u/u/u/u/u/", name: "iambic hexameter", min_match_ratio: 0.85 },
    MeterTemplate { pattern: "u/u/u/u/u/u/u/", name: "iambic heptameter", min_match_ratio: 0.85 },
    MeterTemplate { pattern: "/u/u/u", name: "trochaic trimeter", min_match_ratio: 0.85 },
    MeterTemplate { pattern: "/u/u/u/u", name: "trochaic tetrameter", min_match_ratio: 0.8 },
    MeterTemplate { pattern: "/u/u/u/", name: "trochaic tetrameter catalectic", min_match_ratio: 0.85 },
    MeterTemplate { pattern: "/u/u/u/u/u", name: "trochaic pentameter", min_match_ratio: 0.85 },
    MeterTemplate { pattern: "uu/uu/uu/", name: "anapestic trimeter", min_match_ratio: 0.85 },
    MeterTemplate { pattern: "uu/uu/uu/uu/", name: "anapestic tetrameter", min_match_ratio: 0.85 },
    MeterTemplate { pattern: "/uu/uu/uu/uu", name: "dactylic tetrameter", min_match_ratio: 0.9 },
    MeterTemplate { pattern: "/uu/uu/uu/uu/uu/uu", name: "dactylic hexameter", min_match_ratio: 0.9 },
];

/// Segment a stress pattern into named feet, greedily left to right.
///
/// Three-character feet are tested before two-character ones so anapests and
/// dactyls are reachable; among equal lengths the order is iamb, trochee,
/// spondee, pyrrhic. A single trailing syllable is labeled catalectic.
pub fn identify_feet(pattern: &str) -> Vec<String> {
    let mut feet = Vec::new();
    let mut rest = pattern;

    while !rest.is_empty() {
        let (name, width) = if rest.starts_with("uu/") {
            ("anapest", 3)
        } else if rest.starts_with("/uu") {
            ("dactyl", 3)
        } else if rest.starts_with("u/") {
            ("iamb", 2)
        } else if rest.starts_with("/u") {
            ("trochee", 2)
        } else if rest.starts_with("//") {
            ("spondee", 2)
        } else if rest.starts_with("uu") {
            ("pyrrhic", 2)
        } else {
            ("catalectic", 1)
        };
        feet.push(name.to_string());
        rest = &rest[width..];
    }

    feet
}

/// Fraction of positions a pattern shares with a template.
///
/// Equal lengths compare position by position; lengths off by one (the
/// catalectic case) compare over the shorter length at a 0.95 discount;
/// anything else scores zero.
pub fn match_ratio(pattern: &str, template: &str) -> f64 {
    let n = pattern.len();
    let m = template.len();
    if n == 0 || m == 0 {
        return 0.0;
    }

    if n == m {
        let matching = pattern
            .bytes()
            .zip(template.bytes())
            .filter(|(a, b)| a == b)
            .count();
        matching as f64 / n as f64
    } else if n.abs_diff(m) == 1 {
        let shorter = n.min(m);
        let matching = pattern
            .bytes()
            .zip(template.bytes())
            .take(shorter)
            .filter(|(a, b)| a == b)
            .count();
        (matching as f64 / shorter as f64) * 0.95
    } else {
        0.0
    }
}

/// Classify a whole-line pattern against the standard meter table.
///
/// Returns the winning meter name and whether the line counts as regular;
/// an empty name means no template cleared its threshold.
pub fn classify_meter(pattern: &str) -> (String, bool) {
    let mut best_name = "";
    let mut best_score = 0.0f64;

    for template in METER_TEMPLATES {
        let score = match_ratio(pattern, template.pattern);
        if score >= template.min_match_ratio && score > best_score {
            best_score = score;
            best_name = template.name;
        }
    }

    (best_name.to_string(), !best_name.is_empty())
}
