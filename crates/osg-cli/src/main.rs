use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use env_logger::Env;
use log::{debug, info};

use osg_core::GeneratedFile;
use osg_core::batch;
use osg_core::ids::IdGen;
use osg_core::parse;
use osg_core::scenario::StatusScenario;
use osg_junit::ApiDescriptor;

mod config;
use config::{CONFIG_FILE_NAME, OsgConfig};

#[derive(Parser)]
#[command(name = "osg", about = "OpenAPI mock stub generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate stub mappings from every spec in a directory
    Generate {
        /// Directory containing OpenAPI spec files (YAML or JSON)
        #[arg(short, long)]
        spec_dir: Option<PathBuf>,

        /// Output directory for mapping and content files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also emit JUnit/Spring test scaffolding
        #[arg(long)]
        junit: bool,
    },

    /// Validate a single OpenAPI spec
    Validate {
        /// Path to the spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new osg configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = Env::default().filter_or("RUST_LOG", if cli.verbose { "debug" } else { "info" });
    env_logger::init_from_env(env);

    match cli.command {
        Commands::Generate {
            spec_dir,
            output,
            junit,
        } => cmd_generate(spec_dir, output, junit),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "osg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OsgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(spec_dir: Option<PathBuf>, output: Option<PathBuf>, junit: bool) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let spec_dir = spec_dir.unwrap_or_else(|| PathBuf::from(&cfg.spec_dir));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let junit = junit || cfg.junit;

    let ids = IdGen::random();
    let (mut files, summary) = batch::run_batch(&spec_dir, &ids)?;

    if summary.processed.is_empty() && summary.failed.is_empty() {
        eprintln!("No API specifications found in {}", spec_dir.display());
        return Ok(());
    }

    if junit {
        let specs = batch::discover_specs(&spec_dir)?;
        let apis: Vec<ApiDescriptor> = specs
            .iter()
            .map(|spec| ApiDescriptor {
                api_name: spec.api_name.clone(),
                filename: spec.filename.clone(),
            })
            .collect();
        files.extend(osg_junit::emit_scaffold(&apis));
    }

    fs::create_dir_all(&output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;
    write_files(&output, &files)?;

    info!(
        "wrote {} files to {} ({} mappings, {} specs ok, {} failed)",
        files.len(),
        output.display(),
        summary.total_records,
        summary.processed.len(),
        summary.failed.len()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let document = parse::load_document(&input)?;

    eprintln!(
        "Valid spec: {} ({})",
        document.title().unwrap_or("untitled"),
        document.openapi.as_deref().unwrap_or("version not declared")
    );
    eprintln!("  Paths: {}", document.paths.len());

    if let Some(ref components) = document.components {
        eprintln!("  Schemas: {}", components.schemas.len());
        eprintln!("  Shared responses: {}", components.responses.len());
    }

    let operations: usize = document
        .paths
        .values()
        .map(|item| item.operations().count())
        .sum();
    eprintln!("  Operations: {}", operations);
    eprintln!(
        "  A generation pass would produce {} mappings.",
        operations * StatusScenario::ALL.len()
    );
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
