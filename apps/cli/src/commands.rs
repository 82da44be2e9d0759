//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use typesharp_keywords::DocumentFormat;
use typesharp_readme::{GenerateResult, ProgressReporter};
use typesharp_scripts_shared::ScriptsConfig;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// tsdev: Typesharp developer scripts.
#[derive(Parser)]
#[command(
    name = "tsdev",
    version,
    about = "Dump Typesharp keywords and generate source-tree readmes.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Project root; every path is resolved against it. Defaults to the current directory.
    #[arg(long, global = true, env = "TSDEV_ROOT")]
    pub root: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Token document format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum TokenFormat {
    /// `Keywords:` header with ` - Name: "value"` entries.
    Text,
    /// `{"keywords": [{"name": .., "value": ..}]}`.
    Json,
}

impl From<TokenFormat> for DocumentFormat {
    fn from(format: TokenFormat) -> Self {
        match format {
            TokenFormat::Text => DocumentFormat::Text,
            TokenFormat::Json => DocumentFormat::Json,
        }
    }
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Extract the KeyWord enumeration into a token document.
    DumpTokens {
        /// Output file, relative to the project root.
        output: PathBuf,

        /// Document format.
        #[arg(short, long, default_value = "text")]
        format: TokenFormat,
    },

    /// Generate a Readme.md for every top-level directory of the source tree.
    GenReadme,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "typesharp=info,tsdev=info",
        1 => "typesharp=debug,tsdev=debug",
        _ => "typesharp=trace,tsdev=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.root.as_deref())?;

    match cli.command {
        Command::DumpTokens { output, format } => cmd_dump_tokens(&config, &output, format),
        Command::GenReadme => cmd_gen_readme(&config).await,
    }
}

/// Resolve the project root once and load the scripts config under it.
fn resolve_config(root: Option<&Path>) -> Result<ScriptsConfig> {
    let root = match root {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()
            .map_err(|e| eyre!("cannot determine working directory: {e}"))?,
    };

    Ok(ScriptsConfig::load(root)?)
}

fn cmd_dump_tokens(config: &ScriptsConfig, output: &Path, format: TokenFormat) -> Result<()> {
    info!(
        source = %config.keyword_path().display(),
        output = %output.display(),
        ?format,
        "dumping keywords"
    );

    let result = typesharp_keywords::dump_keywords(config, output, format.into())?;

    println!(
        "Wrote {} keywords to {}",
        result.records.len(),
        result.output_path.display()
    );

    Ok(())
}

async fn cmd_gen_readme(config: &ScriptsConfig) -> Result<()> {
    let reporter = CliProgress::new();
    let result = typesharp_readme::generate_readmes(config, &reporter).await?;

    println!();
    for readme in &result.readmes {
        println!(
            "  {:<16} {} entries  {}",
            readme.name,
            readme.entries.len(),
            readme.path.display()
        );
    }
    println!();
    println!(
        "  Generated {} readmes in {:.1}s",
        result.readmes.len(),
        result.elapsed.as_secs_f64()
    );
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .expect("valid spinner template")
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn directory_started(&self, name: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Generating readme [{current}/{total}] {name}"));
    }

    fn done(&self, _result: &GenerateResult) {
        self.spinner.finish_and_clear();
    }
}
