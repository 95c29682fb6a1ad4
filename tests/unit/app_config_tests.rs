/*!
 * Tests for application configuration
 */

use meterwise::app_config::{Config, LogLevel, OutputFormat};

#[test]
fn test_defaultConfig_shouldMatchDocumentedDefaults() {
    let config = Config::default();

    assert!(config.lexicon_path.is_none());
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.output.show_feet);
    assert!(config.output.show_syllables);
    assert!(config.analysis.optimize);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_saveAndLoad_shouldRoundTrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.output.format = OutputFormat::Json;
    config.log_level = LogLevel::Debug;
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.output.format, OutputFormat::Json);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

#[test]
fn test_ensureConfigExists_shouldCreateDefaultFile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");
    assert!(!path.exists());

    let config = Config::ensure_config_exists(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.output.format, OutputFormat::Text);

    // A second call loads the existing file instead of rewriting it
    let reloaded = Config::ensure_config_exists(&path).unwrap();
    assert_eq!(reloaded.output.format, OutputFormat::Text);
}

#[test]
fn test_fromFile_withInvalidJson_shouldFail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_validate_withMissingLexicon_shouldNotFail() {
    let mut config = Config::default();
    config.lexicon_path = Some("/nonexistent/cmudict.txt".into());

    // Missing lexicon degrades to heuristics, it is not a hard error
    assert!(config.validate().is_ok());
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapAllLevels() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
