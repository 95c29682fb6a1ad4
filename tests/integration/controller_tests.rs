/*!
 * Controller and rendering integration tests
 */

use std::path::Path;

use meterwise::app_config::{Config, OutputFormat};
use meterwise::app_controller::Controller;

use crate::common::SONNET_QUATRAIN;

#[test]
fn test_run_withPoemFile_shouldRenderTextOutput() {
    let dir = tempfile::tempdir().unwrap();
    let poem_path = dir.path().join("sonnet.txt");
    std::fs::write(&poem_path, SONNET_QUATRAIN).unwrap();

    let controller = Controller::new_for_test().unwrap();
    let output = controller.run(&poem_path, None).unwrap();

    assert!(output.contains("iambic pentameter"));
    assert!(output.contains("Dominant meter: iambic pentameter"));
    assert!(output.contains("Regularity: 100%"));
}

#[test]
fn test_run_withMissingFile_shouldFail() {
    let controller = Controller::new_for_test().unwrap();
    let result = controller.run(Path::new("/nonexistent/poem.txt"), None);

    assert!(result.is_err());
}

#[test]
fn test_run_withLineFilter_shouldRenderOffsets() {
    let dir = tempfile::tempdir().unwrap();
    let poem_path = dir.path().join("sonnet.txt");
    std::fs::write(&poem_path, SONNET_QUATRAIN).unwrap();

    let controller = Controller::new_for_test().unwrap();
    let output = controller.run(&poem_path, Some(0)).unwrap();

    // First line's first word appears with an offset range
    assert!(output.contains("Shall"));
    assert!(output.contains(".."));
}

#[test]
fn test_analyzeText_withJsonFormat_shouldRoundTripThroughSerde() {
    let mut config = Config::default();
    config.output.format = OutputFormat::Json;
    let controller = Controller::with_config(config).unwrap();

    let output = controller.analyze_text(SONNET_QUATRAIN, None).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["dominant_meter"], "iambic pentameter");
    assert_eq!(parsed["regularity_score"], 100);
    assert_eq!(parsed["lines"].as_array().unwrap().len(), 4);
    assert_eq!(parsed["lines"][0]["full_pattern"], "u/u/u/u/u/");
}

#[test]
fn test_withConfig_withLexiconPath_shouldLoadLexicon() {
    let dir = tempfile::tempdir().unwrap();
    let dict_path = dir.path().join("dict.txt");
    std::fs::write(&dict_path, "GARDEN  G AA1 R D AH0 N\n").unwrap();

    let mut config = Config::default();
    config.lexicon_path = Some(dict_path);
    let controller = Controller::with_config(config).unwrap();

    assert!(controller.has_lexicon());
}

#[test]
fn test_withConfig_withMissingLexicon_shouldFallBackToHeuristics() {
    let mut config = Config::default();
    config.lexicon_path = Some("/nonexistent/dict.txt".into());
    let controller = Controller::with_config(config).unwrap();

    assert!(!controller.has_lexicon());
    // Analysis still works without the lexicon
    let output = controller
        .analyze_text("Shall I compare thee to a summer's day?", None)
        .unwrap();
    assert!(output.contains("iambic pentameter"));
}
