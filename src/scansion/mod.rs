/*!
 * Metrical scansion engine.
 *
 * This module analyzes verse line by line and produces syllable-level
 * stress patterns, foot labels, per-line meter classification and a
 * poem-level summary:
 * - `stress`: lexical stress resolution (exception table, lexicon, heuristics)
 * - `elision`: poetic syllable adjustment and stress-pattern reduction
 * - `syllabify`: orthographic syllable splitting
 * - `optimizer`: constraint-scored stress promotion/demotion search
 * - `meter`: foot segmentation and standard-meter matching
 * - `service`: the per-line pipeline, poem aggregation and offset mapping
 */

pub mod stress;
pub mod elision;
pub mod syllabify;
pub mod optimizer;
pub mod meter;
pub mod service;

// Re-export main types
pub use service::{
    LineScansion, PoemAnalysis, ScansionConfig, ScansionService, StressedSyllableInstance,
    Syllable, WordScansion,
};
pub use meter::{METER_TEMPLATES, MeterTemplate};
