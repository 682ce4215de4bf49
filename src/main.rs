use changelog_cli::commands::*;
use changelog_cli::core::{
    config::Config,
    error::{ChangelogError, Result},
    print_error, print_usage,
    prompt::prompter_for,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "changelog")]
#[command(about = "Keep changelog entries as separate files and render them into release notes")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Never prompt for missing arguments
    #[arg(long, global = true)]
    no_input: bool,

    /// Project root containing the changelog folder (defaults to the current directory)
    #[arg(long, global = true, env = "CHANGELOG_ROOT", value_name = "PATH")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new unreleased entry
    New {
        /// added, changed, deprecated, removed, fixed or security
        category: Option<String>,
        /// Entry text; several words are joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        content: Vec<String>,
    },
    /// Create the changelog folder layout
    Init {
        /// Also write a .changelog.json with the current settings
        #[arg(long)]
        write_config: bool,
    },
    /// Move unreleased entries into a version and print its notes
    Release {
        /// Version as major.minor.patch
        version: Option<String>,
        /// Write the notes to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the notes for unreleased entries
    Unreleased {
        /// Write the notes to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = Config::load(root)?;
    let prompter = prompter_for(cli.no_input);

    match cli.command {
        Some(Commands::New { category, content }) => {
            execute_new(&config, prompter.as_ref(), category, content)?;
        }
        Some(Commands::Init { write_config }) => {
            execute_init(&config, write_config)?;
        }
        Some(Commands::Release { version, output }) => {
            execute_release(&config, prompter.as_ref(), version, output.as_deref())?;
        }
        Some(Commands::Unreleased { output }) => {
            execute_unreleased(&config, output.as_deref())?;
        }
        None => {
            execute_menu(&config, prompter.as_ref())?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag; RUST_LOG still wins
    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        match e {
            ChangelogError::MissingCommand => print_usage(),
            ref e if e.is_usage_error() => {
                print_error(&e.to_string());
                print_usage();
            }
            ref e => print_error(&e.to_string()),
        }
        std::process::exit(1);
    }
}
