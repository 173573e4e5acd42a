//! CLI flag definitions, tracing setup, and the single run command.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

use fixgen_core::pipeline::{GenerateResult, ProgressReporter};
use fixgen_shared::{AppConfig, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// fixgen — regenerate round-trip test fixtures from the reference page.
///
/// Invoked bare, it reproduces the pinned-document defaults; flags override
/// config file values, which override defaults.
#[derive(Parser)]
#[command(
    name = "fixgen",
    version,
    about = "Turn the serialization reference page into round-trip test fixtures.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Source document URL (overrides config).
    #[arg(long)]
    pub url: Option<String>,

    /// Output artifact path (overrides config).
    #[arg(short, long)]
    pub out: Option<String>,

    /// Path to a TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "fixgen=info",
        1 => "fixgen=debug",
        _ => "fixgen=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Progress reporter that prints pipeline phases to the terminal.
struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn phase(&self, name: &str) {
        println!("→ {name}");
    }

    fn done(&self, _result: &GenerateResult) {}
}

/// Run the generator.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => AppConfig::default(),
    };

    if let Some(url) = cli.url {
        config.source.url = url;
    }
    if let Some(out) = cli.out {
        config.output.path = out;
    }

    info!(url = %config.source.url, out = %config.output.path, "starting run");

    let result = fixgen_core::generate(&config, &ConsoleProgress).await?;

    println!(
        "\nWrote {} — {} version(s), {} registration(s), {} fixture(s) in {:.1}s",
        result.output_path.display(),
        result.versions,
        result.registrations,
        result.fixtures,
        result.elapsed.as_secs_f64(),
    );
    println!("source sha256: {}", result.source_hash);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::parse_from([
            "fixgen",
            "--url",
            "https://example.com/io",
            "--out",
            "out.rs",
            "-vv",
        ]);
        assert_eq!(cli.url.as_deref(), Some("https://example.com/io"));
        assert_eq!(cli.out.as_deref(), Some("out.rs"));
        assert_eq!(cli.verbose, 2);
    }
}
