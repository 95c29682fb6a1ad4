use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::app_config::{Config, OutputFormat};
use crate::file_utils::FileManager;
use crate::lexicon::Lexicon;
use crate::scansion::{PoemAnalysis, ScansionService};

// @module: Application controller for scansion analysis

/// Main application controller for poem analysis
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Scansion engine
    service: ScansionService,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let mut service = ScansionService::with_config(config.analysis.clone());

        if let Some(path) = &config.lexicon_path {
            match Lexicon::load_from_path(path) {
                Ok(lexicon) => {
                    info!(
                        "Loaded pronunciation lexicon with {} entries from {}",
                        lexicon.len(),
                        path.display()
                    );
                    service = service.with_lexicon(Arc::new(lexicon));
                }
                Err(e) => {
                    warn!(
                        "Could not load lexicon from {} ({}); falling back to heuristics",
                        path.display(),
                        e
                    );
                }
            }
        }

        Ok(Controller { config, service })
    }

    /// Whether the underlying service has dictionary data attached
    pub fn has_lexicon(&self) -> bool {
        self.service.has_lexicon()
    }

    /// Access the scansion service, mainly for tests
    pub fn service(&self) -> &ScansionService {
        &self.service
    }

    /// Analyze a file, a directory of poem files, or stdin (`-`).
    ///
    /// Returns the rendered output for single inputs; directory batches
    /// print per-file and return an empty string.
    pub fn run(&self, input: &Path, line_filter: Option<usize>) -> Result<String> {
        if input.as_os_str() == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read poem from stdin")?;
            return self.analyze_text(&text, line_filter);
        }

        if FileManager::dir_exists(input) {
            if line_filter.is_some() {
                return Err(anyhow!("Line selection only applies to a single input"));
            }
            self.run_folder(input)?;
            return Ok(String::new());
        }

        if !FileManager::file_exists(input) {
            return Err(anyhow!("Input does not exist: {:?}", input));
        }

        let text = FileManager::read_to_string(input)?;
        self.analyze_text(&text, line_filter)
    }

    /// Analyze every poem file under a directory with a progress bar
    fn run_folder(&self, dir: &Path) -> Result<()> {
        let files = FileManager::find_poem_files(dir)?;
        if files.is_empty() {
            warn!("No poem files found under {:?}", dir);
            return Ok(());
        }

        let start_time = std::time::Instant::now();
        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for file in &files {
            progress.set_message(
                file.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            match FileManager::read_to_string(file) {
                Ok(text) => {
                    let rendered = self.analyze_text(&text, None)?;
                    progress.suspend(|| {
                        println!("=== {} ===", file.display());
                        println!("{}", rendered);
                    });
                }
                Err(e) => {
                    warn!("Skipping {:?}: {}", file, e);
                }
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
        info!(
            "Analyzed {} files in {:.2}s",
            files.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(())
    }

    /// Analyze a text and render it per the configured output format
    pub fn analyze_text(&self, text: &str, line_filter: Option<usize>) -> Result<String> {
        if let Some(index) = line_filter {
            return self.render_instances(text, index);
        }

        let analysis = self.service.analyze(text);
        debug!(
            "Rendering analysis of {} lines as {}",
            analysis.lines.len(),
            self.config.output.format
        );

        match self.config.output.format {
            OutputFormat::Json => serde_json::to_string_pretty(&analysis)
                .context("Failed to serialize analysis to JSON"),
            OutputFormat::Text => Ok(self.render_text(&analysis)),
        }
    }

    /// Render a single line's syllable instances with their offsets
    fn render_instances(&self, text: &str, line_index: usize) -> Result<String> {
        let instances = self.service.scansion_instances(text, Some(line_index));

        match self.config.output.format {
            OutputFormat::Json => serde_json::to_string_pretty(&instances)
                .context("Failed to serialize instances to JSON"),
            OutputFormat::Text => {
                let mut out = String::new();
                for instance in &instances {
                    out.push_str(&format!(
                        "{:>5}..{:<5} {} {}\n",
                        instance.start_offset,
                        instance.end_offset,
                        if instance.stressed { '/' } else { 'u' },
                        instance.text
                    ));
                }
                Ok(out)
            }
        }
    }

    /// Human-readable rendering of a poem analysis
    fn render_text(&self, analysis: &PoemAnalysis) -> String {
        let mut out = String::new();

        for line in &analysis.lines {
            out.push_str(&format!("{:>3} | {}\n", line.line_index + 1, line.text));

            if self.config.output.show_syllables {
                let syllables: Vec<String> = line
                    .words
                    .iter()
                    .flat_map(|w| w.syllables.iter())
                    .map(|s| s.text.clone())
                    .collect();
                out.push_str(&format!("    | {}\n", syllables.join("-")));
            }

            let meter = if line.meter_type.is_empty() {
                "unclassified"
            } else {
                line.meter_type.as_str()
            };
            out.push_str(&format!("    | {}  ({})\n", line.full_pattern, meter));

            if self.config.output.show_feet && !line.feet.is_empty() {
                out.push_str(&format!("    | feet: {}\n", line.feet.join(" | ")));
            }
        }

        out.push_str(&format!(
            "\nDominant meter: {}\nRegularity: {}%\n",
            analysis.dominant_meter, analysis.regularity_score
        ));
        out
    }
}
