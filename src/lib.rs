/*!
 * # meterwise - Metrical Scansion for English Verse
 *
 * A Rust library for analyzing the meter of poetry.
 *
 * ## Features
 *
 * - Syllable-by-syllable stress patterns per line
 * - Pronunciation-lexicon lookup with heuristic fallback
 * - Table-driven poetic elision and contraction handling
 * - Constraint-scored stress promotion/demotion (metrical optimization)
 * - Foot segmentation and standard-meter classification
 * - Poem-level dominant meter and regularity scoring
 * - Character-offset syllable instances for editor highlighting
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `lexicon`: Injected, read-only pronunciation repository
 * - `scansion`: The analysis engine:
 *   - `scansion::stress`: Lexical stress resolution
 *   - `scansion::elision`: Poetic syllable adjustment
 *   - `scansion::syllabify`: Orthographic syllable splitting
 *   - `scansion::optimizer`: Metrical stress optimization
 *   - `scansion::meter`: Foot identification and meter classification
 *   - `scansion::service`: Line pipeline, aggregation and offset mapping
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod lexicon;
pub mod scansion;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, LexiconError, ScansionError};
pub use lexicon::{Lexicon, Pronunciation};
pub use scansion::{
    LineScansion, PoemAnalysis, ScansionConfig, ScansionService, StressedSyllableInstance,
    Syllable, WordScansion,
};
