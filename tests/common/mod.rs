/*!
 * Common test utilities for the meterwise test suite
 */

use std::collections::HashMap;
use std::sync::Arc;

use meterwise::lexicon::{Lexicon, Pronunciation};
use meterwise::scansion::ScansionService;

/// Sonnet 18's opening quatrain
pub const SONNET_QUATRAIN: &str = "\
Shall I compare thee to a summer's day?
Thou art more lovely and more temperate:
Rough winds do shake the darling buds of May,
And summer's lease hath all too short a date:";

/// The first stanza of Frost's "The Road Not Taken"
pub const FROST_STANZA: &str = "\
Two roads diverged in a yellow wood,
And sorry I could not travel both
And be one traveler, long I stood
And looked down one as far as I could
To where it bent in the undergrowth;";

/// Initialize captured logging for tests; safe to call repeatedly
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A service with no lexicon attached (heuristics only)
pub fn heuristic_service() -> ScansionService {
    init_test_logging();
    ScansionService::new()
}

/// A service backed by a small fixture lexicon
pub fn fixture_service() -> ScansionService {
    ScansionService::new().with_lexicon(Arc::new(fixture_lexicon()))
}

/// Build a small in-memory lexicon covering fixture vocabulary
pub fn fixture_lexicon() -> Lexicon {
    let mut entries: HashMap<String, Vec<Pronunciation>> = HashMap::new();
    let mut add = |word: &str, codes: &[u8]| {
        entries.insert(
            word.to_string(),
            vec![Pronunciation::from_codes(codes.to_vec())],
        );
    };

    add("compare", &[0, 1]);
    add("summer", &[1, 0]);
    add("summer's", &[1, 0]);
    add("diverged", &[0, 1]);
    add("yellow", &[1, 0]);
    add("darling", &[1, 0]);
    add("garden", &[1, 0]);
    add("lovely", &[1, 0]);
    add("temperate", &[1, 0, 0]);
    add("undergrowth", &[1, 0, 2]);
    add("wood", &[1]);
    add("day", &[1]);

    Lexicon::from_entries(entries)
}
