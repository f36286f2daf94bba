use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use otg_core::config::{self, CONFIG_FILE_NAME, OtgConfig, OutputFormat};
use otg_core::parse;
use otg_core::source::{SourceOptions, SpecSource, resolve_base_url};
use otg_core::transform::{MapOptions, RequestFilter, map_document};

#[derive(Parser)]
#[command(
    name = "otg",
    about = "Harvest testable HTTP requests from OpenAPI specs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map one or more OpenAPI specs to request descriptors
    Harvest {
        /// Paths to the spec files (YAML or JSON); config `inputs` when omitted
        #[arg(short, long)]
        input: Vec<PathBuf>,

        /// Base URL the target API is served from
        #[arg(short, long)]
        base_url: Option<String>,

        /// Populate parameter/property values from declared examples
        #[arg(long)]
        use_example_values: bool,

        /// Keep only these operation ids
        #[arg(long)]
        whitelist: Vec<String>,

        /// Drop these operation ids
        #[arg(long)]
        blacklist: Vec<String>,

        /// Output format
        #[arg(long)]
        format: Option<Format>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate an OpenAPI spec and report what would be harvested
    Validate {
        /// Path to the spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new otg configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Harvest {
            input,
            base_url,
            use_example_values,
            whitelist,
            blacklist,
            format,
            output,
        } => cmd_harvest(
            input,
            base_url,
            use_example_values,
            whitelist,
            blacklist,
            format,
            output,
        ),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "otg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OtgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

#[allow(clippy::too_many_arguments)]
fn cmd_harvest(
    input: Vec<PathBuf>,
    base_url: Option<String>,
    use_example_values: bool,
    whitelist: Vec<String>,
    blacklist: Vec<String>,
    format: Option<Format>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();

    let inputs: Vec<PathBuf> = if input.is_empty() {
        cfg.inputs.iter().map(PathBuf::from).collect()
    } else {
        input
    };

    let filter = if whitelist.is_empty() && blacklist.is_empty() {
        cfg.filter.clone()
    } else {
        RequestFilter {
            endpoint_name_whitelist: (!whitelist.is_empty()).then_some(whitelist),
            endpoint_name_blacklist: (!blacklist.is_empty()).then_some(blacklist),
        }
    };

    let source = SpecSource::new(SourceOptions {
        base_url: base_url.or(cfg.base_url),
        use_example_values: use_example_values || cfg.use_example_values,
        filter,
    });

    let descriptors = source.load(&inputs)?;

    let degraded = descriptors
        .iter()
        .filter(|d| !d.warnings.is_empty())
        .count();
    if degraded > 0 {
        eprintln!(
            "warning: {degraded} request(s) have incomplete body/response extraction (see `warnings`)"
        );
    }

    let format = format.map(OutputFormat::from).unwrap_or(cfg.format);
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&descriptors)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(&descriptors)?,
    };

    let output = output.or(cfg.output.map(PathBuf::from));
    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "Harvested {} testable request(s) from {} spec(s) into {}",
                descriptors.len(),
                inputs.len(),
                path.display()
            );
        }
        None => {
            println!("{rendered}");
            eprintln!(
                "Harvested {} testable request(s) from {} spec(s)",
                descriptors.len(),
                inputs.len()
            );
        }
    }

    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let doc = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };

    eprintln!("Valid OpenAPI {} spec: {}", doc.openapi, doc.info.title);
    eprintln!("  Version: {}", doc.info.version);
    eprintln!("  Paths: {}", doc.paths.len());

    // Also check the document maps cleanly.
    let base_url = resolve_base_url(None, &doc.servers);
    let descriptors = map_document(&base_url, &doc, &MapOptions::default())?;
    eprintln!("  Testable operations: {}", descriptors.len());

    let warnings: usize = descriptors.iter().map(|d| d.warnings.len()).sum();
    if warnings > 0 {
        eprintln!("  Extraction warnings: {warnings}");
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
