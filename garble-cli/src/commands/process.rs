//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use garble_core::{Config, Input, Output, SpeechProcessor};

use crate::config::CliConfig;
use crate::input::resolve_patterns;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Render a single message given directly on the command line
    #[arg(short, long, value_name = "MESSAGE")]
    pub text: Option<String>,

    /// Listener comprehension level; values at or above 1.0 understand
    /// everything, values at or below 0.0 understand nothing
    #[arg(short, long, value_name = "LEVEL", allow_negative_numbers = true)]
    pub comprehension: Option<f32>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rendered message text
    Text,
    /// JSON array of messages with statistics
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting speech rendering");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let comprehension = self
            .comprehension
            .unwrap_or(file_config.processing.comprehension);
        log::debug!("Comprehension level: {}", comprehension);

        let core_config = Config::builder()
            .comprehension(comprehension)
            .markers(
                file_config.processing.open_marker.clone(),
                file_config.processing.close_marker.clone(),
            )
            .build()?;
        let processor = SpeechProcessor::with_config(core_config)?;

        let messages = self.collect_messages(&processor)?;

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, file_config.output.pretty_json))
            }
        };

        for (source, output) in &messages {
            formatter.format_message(source, output)?;
        }
        formatter.finish()?;

        log::info!("Rendered {} message(s)", messages.len());
        Ok(())
    }

    /// Gather and render messages from the command line, files, or stdin
    fn collect_messages(&self, processor: &SpeechProcessor) -> Result<Vec<(String, Output)>> {
        if let Some(text) = &self.text {
            let output = processor.process(Input::from_text(text.clone()))?;
            return Ok(vec![("<args>".to_string(), output)]);
        }

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::debug!("Resolved {} input file(s)", files.len());

            let reporter = ProgressReporter::for_files(files.len(), self.quiet);

            // The transform is pure, so files render in parallel with
            // no synchronization.
            let results: Result<Vec<(String, Output)>> = files
                .par_iter()
                .map(|path| {
                    let output = processor.process(Input::from_file(path))?;
                    reporter.file_completed(&path.display().to_string());
                    Ok((path.display().to_string(), output))
                })
                .collect();
            reporter.finish();
            return results;
        }

        let output = processor
            .process(Input::from_reader(io::stdin()))
            .context("Failed to render message from stdin")?;
        Ok(vec![("<stdin>".to_string(), output)])
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
