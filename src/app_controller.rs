use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analysis::{self, DocumentAnalysis};
use crate::app_config::Config;
use crate::errors::ExtractionError;
use crate::extraction;
use crate::file_utils::{FileManager, FileType};
use crate::preferences::Theme;

// @module: Application controller for document analysis

/// Characters shown in the document preview region
const PREVIEW_MAX_CHARS: usize = 600;

/// Main application controller for document analysis
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Display theme for rendered output
    theme: Theme,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Self::new(config, Theme::default())
    }

    /// Create a new controller with the given configuration and theme
    pub fn new(config: Config, theme: Theme) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, theme })
    }

    /// Run the main workflow: extract, analyze, render, answer questions
    pub async fn run(
        &self,
        input_file: PathBuf,
        questions: &[String],
        interactive: bool,
    ) -> Result<()> {
        let analysis = self.analyze_file(&input_file).await?;
        self.render_analysis(&analysis);

        for question in questions {
            let question = question.trim();
            if question.is_empty() {
                warn!("Skipping empty question");
                continue;
            }
            self.render_answer(question, &analysis.answer(question));
        }

        if interactive {
            self.interactive_loop(&analysis)?;
        }

        Ok(())
    }

    /// Analyze every recognized document under a directory
    ///
    /// Per-file failures are logged and the remaining documents are still
    /// processed.
    pub async fn run_folder(&self, input_dir: PathBuf, questions: &[String]) -> Result<()> {
        info!("Analyzing documents in directory: {:?}", input_dir);

        let documents = FileManager::find_documents(&input_dir)?;
        if documents.is_empty() {
            warn!("No .txt or .pdf documents found in {:?}", input_dir);
            return Ok(());
        }

        let mut processed_count = 0;
        for document in documents {
            info!("Processing document: {:?}", document);
            if let Err(e) = self.run(document, questions, false).await {
                error!("Error processing document: {}", e);
            } else {
                processed_count += 1;
            }
        }

        info!("Finished processing {} documents", processed_count);
        Ok(())
    }

    /// Extract text from a single document and run the analysis pipeline
    pub async fn analyze_file(&self, input_file: &Path) -> Result<DocumentAnalysis> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!(
                "Input file does not exist: {:?}",
                input_file
            ));
        }

        // Reject unrecognized file types before any processing
        let file_type = FileManager::detect_file_type(input_file)?;
        if file_type == FileType::Unknown {
            return Err(ExtractionError::UnsupportedFileType(input_file.to_path_buf()).into());
        }

        let start_time = std::time::Instant::now();
        let spinner = self.start_spinner(&format!("Analyzing {:?}...", input_file))?;

        let extractor = extraction::extractor_for(&file_type, input_file)?;
        let text = match extractor.extract(input_file).await {
            Ok(text) => text,
            Err(e) => {
                spinner.finish_and_clear();
                // The whole analysis aborts; no partial results are shown
                return Err(e).context("Error processing document. Please try again");
            }
        };

        let analysis =
            analysis::analyze_document(&text, self.config.max_sentences, self.config.max_keywords);
        spinner.finish_and_clear();

        info!(
            "Analyzed {:?} ({} sentences, {} keywords) in {:?}",
            input_file,
            analysis.sentences.len(),
            analysis.keywords.len(),
            start_time.elapsed()
        );

        Ok(analysis)
    }

    /// Render the three analysis regions: preview, summary, keywords
    fn render_analysis(&self, analysis: &DocumentAnalysis) {
        println!("{}", self.heading("Document Preview"));
        println!("{}\n", preview_of(&analysis.text));

        println!("{}", self.heading("Summary"));
        println!("{}\n", analysis.summary);

        println!("{}", self.heading("Keywords"));
        println!("{}\n", analysis.keywords.join(", "));
    }

    /// Render the answer region for one question
    fn render_answer(&self, question: &str, answer: &str) {
        println!("{}", self.heading(&format!("Q: {}", question)));
        println!("{}\n", answer);
    }

    /// Prompt for questions on stdin until an empty line or EOF
    fn interactive_loop(&self, analysis: &DocumentAnalysis) -> Result<()> {
        let stdin = std::io::stdin();
        let mut line = String::new();

        loop {
            print!("question> ");
            std::io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let question = line.trim();
            if question.is_empty()
                || question.eq_ignore_ascii_case("exit")
                || question.eq_ignore_ascii_case("quit")
            {
                break;
            }
            self.render_answer(question, &analysis.answer(question));
        }

        Ok(())
    }

    fn start_spinner(&self, message: &str) -> Result<ProgressBar> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .context("Invalid spinner template")?,
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Ok(spinner)
    }

    /// Section heading colored for the active theme
    fn heading(&self, title: &str) -> String {
        let color = match self.theme {
            Theme::Light => "34",
            Theme::Dark => "96",
        };
        format!("\x1B[1;{}m== {} ==\x1B[0m", color, title)
    }
}

/// Truncated verbatim preview of the document text
fn preview_of(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
    if text.chars().count() > PREVIEW_MAX_CHARS {
        preview.push('\u{2026}');
    }
    preview
}
