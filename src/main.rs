// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{Config, LogLevel, TranslationProvider};
use app_controller::Controller;

mod alignment;
mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod markup;
mod pipeline;
mod providers;
mod segmentation;
mod translation;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Caiyun,
    Mock,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Caiyun => TranslationProvider::Caiyun,
            CliTranslationProvider::Mock => TranslationProvider::Mock,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate wikitext documents (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for transwiki
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input wikitext file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Source language code (e.g. 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'zh')
    #[arg(short, long)]
    target_language: Option<String>,

    /// API key for the translation provider
    #[arg(short, long, env = "TRANSWIKI_API_KEY")]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// transwiki - wiki markup translation tool
///
/// Normalizes wikitext documents into prose, translates them sentence-aligned
/// through a batch translation API, and writes the translation interleaved
/// with the original lines.
#[derive(Parser, Debug)]
#[command(name = "transwiki")]
#[command(version = "1.0.0")]
#[command(about = "Sentence-aligned wiki markup translation")]
#[command(
    long_about = "transwiki strips wiki markup from documents and translates the prose \
sentence-aligned, reconstructing the original paragraph structure around the translations.

EXAMPLES:
    transwiki page.wiki                         # Translate using default config
    transwiki -f page.wiki                      # Force overwrite existing output
    transwiki -s en -t zh page.wiki             # Translate from English to Chinese
    transwiki -p mock page.wiki                 # Dry run with the mock provider
    transwiki --log-level debug pages/          # Process a directory with debug logging
    transwiki completions bash > transwiki.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED PROVIDERS:
    caiyun - Caiyun translation API (requires API token)
    mock   - In-process echo provider for dry runs"
)]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input wikitext file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Source language code (e.g. 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'zh')
    #[arg(short, long)]
    target_language: Option<String>,

    /// API key for the translation provider
    #[arg(short, long, env = "TRANSWIKI_API_KEY")]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Custom logger writing timestamped, colored lines to stderr
struct CustomLogger;

impl CustomLogger {
    /// Initialize the global logger; the effective level is whatever
    /// `log::max_level` says, so it can be tightened after config load
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_code(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[0m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} [{}] {}\x1B[0m",
                Self::color_code(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Load the config file, creating a default one when missing, and apply CLI overrides
fn resolve_config(args: &TranslateArgs) -> Result<Config> {
    let mut config = if file_utils::FileManager::file_exists(&args.config_path) {
        Config::from_file(&args.config_path)?
    } else {
        let config = Config::default();
        config
            .save_to_file(&args.config_path)
            .with_context(|| format!("Failed to create default config at {}", args.config_path))?;
        info!("Created default config at {}", args.config_path);
        config
    };

    if let Some(provider) = &args.provider {
        config.translation.provider = provider.clone().into();
    }
    if let Some(source) = &args.source_language {
        config.source_language = source.clone();
    }
    if let Some(target) = &args.target_language {
        config.target_language = target.clone();
    }
    if let Some(api_key) = &args.api_key {
        let wanted = config.translation.provider.to_lowercase_string();
        for provider_config in &mut config.translation.available_providers {
            if provider_config.provider_type == wanted {
                provider_config.api_key = api_key.clone();
            }
        }
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone().into();
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    let args = match options.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "transwiki", &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Translate(args)) => args,
        None => TranslateArgs {
            input_path: options
                .input_path
                .ok_or_else(|| anyhow::anyhow!("No input path given; see --help"))?,
            force_overwrite: options.force_overwrite,
            provider: options.provider,
            source_language: options.source_language,
            target_language: options.target_language,
            api_key: options.api_key,
            config_path: options.config_path,
            log_level: options.log_level,
        },
    };

    // Initialize logging before config resolution so early messages show;
    // the level is tightened once the config is known
    let initial_level = args
        .log_level
        .clone()
        .map(|l| LevelFilter::from(LogLevel::from(l)))
        .unwrap_or(LevelFilter::Info);
    CustomLogger::init(initial_level)
        .unwrap_or_else(|e| eprintln!("Failed to initialize logger: {}", e));

    let config = resolve_config(&args)?;
    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config)?;
    controller.run(args.input_path, args.force_overwrite).await
}
