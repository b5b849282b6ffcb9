use anyhow::{Result, anyhow};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, TranslationProvider};
use crate::errors::{AppError, TranslationError};
use crate::file_utils::FileManager;
use crate::pipeline::{DocumentTranslation, PassagePipeline};
use crate::providers::Provider;
use crate::providers::caiyun::Caiyun;
use crate::providers::mock::MockProvider;
use crate::segmentation::RuleSegmenter;
use crate::translation::{RetryPolicy, TranslationService};

/// Application controller for document translation

/// Main application controller driving the document workflow
pub struct Controller {
    /// App configuration
    config: Config,
}

/// Outcome of processing one document, for the end-of-run summary
enum DocumentOutcome {
    Translated,
    Skipped,
    Failed,
}

impl Controller {
    /// Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Build the translation service for the configured provider
    fn build_service(&self) -> Result<TranslationService> {
        let common = &self.config.translation.common;
        let retry = RetryPolicy::new(common.retry_count, common.retry_backoff_ms);

        let provider: Box<dyn Provider> = match self.config.translation.provider {
            TranslationProvider::Caiyun => {
                let provider_config = self
                    .config
                    .translation
                    .selected_provider_config()
                    .ok_or_else(|| anyhow!("No Caiyun provider config"))?;
                Box::new(Caiyun::new(
                    &provider_config.endpoint,
                    &provider_config.api_key,
                    &provider_config.request_id,
                    provider_config.timeout_secs,
                )?)
            }
            TranslationProvider::Mock => Box::new(MockProvider::working()),
        };

        Ok(TranslationService::new(provider, retry))
    }

    /// Run the main workflow on a wikitext file or a directory of them
    pub async fn run(&self, input_path: PathBuf, force_overwrite: bool) -> Result<()> {
        let files = if FileManager::dir_exists(&input_path) {
            FileManager::find_wikitext_files(&input_path)?
        } else if FileManager::file_exists(&input_path) {
            vec![input_path.clone()]
        } else {
            return Err(anyhow!("Input path does not exist: {:?}", input_path));
        };

        if files.is_empty() {
            return Err(anyhow!("No wikitext files found under {:?}", input_path));
        }

        info!(
            "Translating {} document(s) from {} to {} using {}",
            files.len(),
            crate::language_utils::language_name(&self.config.source_language),
            crate::language_utils::language_name(&self.config.target_language),
            self.config.translation.provider.display_name()
        );

        let service = self.build_service()?;
        let pipeline = PassagePipeline::new(
            Box::new(RuleSegmenter::new()),
            service,
            self.config.translation.common.join_policy,
        );

        let progress = ProgressBar::new(files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style);

        let concurrency = self.config.translation.common.concurrent_documents.max(1);
        let outcomes: Vec<DocumentOutcome> = stream::iter(files)
            .map(|file| {
                let pipeline = &pipeline;
                let progress = progress.clone();
                async move {
                    let outcome = self.process_file(pipeline, &file, force_overwrite).await;
                    progress.inc(1);
                    outcome
                }
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;
        progress.finish_and_clear();

        let translated = outcomes
            .iter()
            .filter(|o| matches!(o, DocumentOutcome::Translated))
            .count();
        let skipped = outcomes
            .iter()
            .filter(|o| matches!(o, DocumentOutcome::Skipped))
            .count();
        let failed = outcomes
            .iter()
            .filter(|o| matches!(o, DocumentOutcome::Failed))
            .count();

        info!(
            "Done: {} translated, {} skipped, {} failed",
            translated, skipped, failed
        );

        if failed > 0 {
            return Err(anyhow!("{} document(s) failed to translate", failed));
        }
        Ok(())
    }

    /// Process one document file end to end
    async fn process_file(
        &self,
        pipeline: &PassagePipeline,
        file: &Path,
        force_overwrite: bool,
    ) -> DocumentOutcome {
        let output = FileManager::output_path(file);
        if FileManager::file_exists(&output) && !force_overwrite {
            warn!("Skipped {:?} (output {:?} exists)", file, output);
            return DocumentOutcome::Skipped;
        }

        match self.translate_file(pipeline, file, &output).await {
            Ok(()) => DocumentOutcome::Translated,
            // Unavailability is recovered at document granularity
            Err(AppError::Translation(TranslationError::Unavailable { attempts })) => {
                warn!(
                    "Skipped {:?}: translation unavailable after {} attempts",
                    file, attempts
                );
                DocumentOutcome::Skipped
            }
            Err(e) => {
                error!("Failed to translate {:?}: {}", file, e);
                DocumentOutcome::Failed
            }
        }
    }

    async fn translate_file(
        &self,
        pipeline: &PassagePipeline,
        file: &Path,
        output: &Path,
    ) -> Result<(), AppError> {
        let lines = FileManager::read_lines(file).map_err(AppError::from)?;
        let document = file.to_string_lossy();

        let result = pipeline
            .translate_document(
                &document,
                &lines,
                &self.config.source_language,
                &self.config.target_language,
            )
            .await?;

        let rendered = Self::render_interleaved(&lines, &result);
        FileManager::write_to_file(output, &rendered).map_err(AppError::from)?;
        info!("Wrote {:?}", output);
        Ok(())
    }

    /// Interleave the original line, its cleaned form, and its translation.
    ///
    /// Lines that contributed no prose (blank or skipped) emit only the
    /// original line, so the markup skeleton stays intact around the
    /// translated passages.
    pub fn render_interleaved(lines: &[String], result: &DocumentTranslation) -> String {
        let mut rendered = String::new();
        for ((raw, normalized), translated) in lines
            .iter()
            .zip(result.normalized.iter())
            .zip(result.translated.iter())
        {
            rendered.push_str(raw);
            rendered.push_str("\n\n");
            if !normalized.trim().is_empty() {
                rendered.push_str(normalized);
                rendered.push_str("\n\n");
                rendered.push_str(translated);
                rendered.push_str("\n\n");
            }
        }
        rendered
    }
}
