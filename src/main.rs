use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use sdd_mcp::cli::Settings;
use sdd_mcp::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "sdd-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Spec-driven Development workflows for coding agents", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root to inspect (default: current directory)
    #[arg(long, global = true, env = "SDD_PROJECT_ROOT")]
    project_root: Option<PathBuf>,

    /// Directory holding <command>.md workflow documents (default: the
    /// documents built into the binary)
    #[arg(long, global = true, env = "SDD_COMMANDS_DIR")]
    commands_dir: Option<PathBuf>,

    /// Enable debug logging (stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server over stdio (default)
    Serve,

    /// Show the detected project state and active spec
    Status {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Print a parsed workflow document
    Workflow {
        /// Command name (e.g., plan, create-spec)
        name: String,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// List available workflow commands
    #[command(name = "commands")]
    List,

    /// Show which project documents to fetch
    Docs {
        /// What you are about to work on
        intent: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool, configured: Option<&str>) {
    let filter = EnvFilter::try_from_env("SDD_MCP_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            configured
                .and_then(|level| EnvFilter::try_new(level).ok())
                .unwrap_or_else(|| EnvFilter::new("warn"))
        }
    });

    // stdout carries the protocol; logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "sdd-mcp", &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::resolve(cli.project_root.as_deref(), cli.commands_dir.as_deref())?;
    init_logging(cli.verbose, settings.config.log_level.as_deref());

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            sdd_mcp::cli::mcp_server::run(&settings).await?;
        }

        Commands::Status { json } => {
            sdd_mcp::cli::status::run(&settings, json)?;
        }

        Commands::Workflow { name, json } => {
            sdd_mcp::cli::workflow::show(&settings, &name, json)?;
        }

        Commands::List => {
            sdd_mcp::cli::workflow::list(&settings)?;
        }

        Commands::Docs { intent } => {
            sdd_mcp::cli::docs::run(&settings, intent.as_deref())?;
        }

        Commands::Completions { .. } => unreachable!("completions are handled before settings"),
    }

    Ok(())
}
