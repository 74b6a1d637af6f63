mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use pcmscribe_core::{ConfigError, StreamConfig};
use std::ffi::OsString;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

const PROGRAM: &str = "pcmscribe";
const ENGINE: &str = "vosk";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Stream raw 16 kHz mono 16-bit PCM through a speech recognizer, printing
/// `PARTIAL <text>` and `FINAL <text>` lines.
#[derive(Parser, Debug)]
#[command(name = PROGRAM, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Directory of the recognition model
    #[arg(value_parser = clap::value_parser!(OsString))]
    model_path: OsString,

    /// Headerless PCM audio file
    #[arg(value_parser = clap::value_parser!(OsString))]
    pcm_path: OsString,
}

/// Exactly two positional arguments; anything else is a usage error.
///
/// The count is taken on the raw arguments, so `--`, empty strings and
/// hyphen-leading paths are ordinary values.
fn parse_args<I, T>(args: I) -> Result<Cli, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let usage = || ConfigError::Usage {
        program: PROGRAM.to_string(),
    };
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let [program, model_path, pcm_path]: [OsString; 3] = args.try_into().map_err(|_| usage())?;

    let literal = [program, OsString::from("--"), model_path, pcm_path];
    Cli::try_parse_from(literal).map_err(|e| {
        tracing::debug!("argument parsing failed: {e}");
        usage()
    })
}

fn init_tracing() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stdout carries the transcript; logs go to stderr only.
    let subscriber = tracing_subscriber::Registry::default().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false),
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

fn main() -> Result<()> {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(usage) => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };

    init_tracing()?;

    let config = StreamConfig::new(cli.model_path, cli.pcm_path);
    tracing::info!(
        model_path = %config.model_path.display(),
        audio_path = %config.audio_path.display(),
        sample_rate = config.sample_rate,
        "{PROGRAM} starting"
    );

    let registry = pcmscribe_engine::EngineRegistry::new();
    let engine = registry
        .create_initialized(ENGINE, config.engine_toml()?)
        .with_context(|| {
            format!(
                "failed to start '{ENGINE}' engine with model {:?} (available: {})",
                config.model_path,
                registry.list_engines().join(", ")
            )
        })?;

    let mut sink = pcmscribe_destination::LineSink::stdout();
    let stats = pipeline::run(engine, &config, &mut sink)?;

    tracing::info!(
        chunks = stats.chunks,
        finals = stats.finals,
        partials = stats.partials,
        "{PROGRAM} done"
    );
    Ok(())
}
