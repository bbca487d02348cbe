//! Binary entry point for cinelog.
//!
//! This binary provides the CLI interface for the cinelog watchlist.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]

use cinelog::cli::{edit, kv};
use cinelog::config::CinelogConfig;
use cinelog::models::WatchFilter;
use cinelog::observability::{self, InitOptions, LogFormat};
use cinelog::services::WatchlistService;
use cinelog::storage::Store;
use clap::{CommandFactory, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Cinelog - a persistent movie watchlist for the command line.
#[derive(Parser)]
#[command(name = "cinelog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "CINELOG_CONFIG_PATH")]
    config: Option<String>,

    /// Log output format: pretty or json.
    #[arg(long, global = true, default_value = "pretty")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Add a movie to the watchlist.
    Add {
        /// Movie title (letters and spaces only).
        name: String,

        /// Four-digit release year.
        year: String,
    },

    /// List movies.
    List {
        /// Section to show: all, watched, or unwatched.
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Edit a movie interactively.
    Edit {
        /// Position of the movie in the full list.
        index: usize,
    },

    /// Delete a movie.
    Delete {
        /// Position of the movie in the full list.
        index: usize,

        /// Skip confirmation.
        #[arg(short, long)]
        force: bool,
    },

    /// Mark a movie as watched.
    Watch {
        /// Position of the movie in the full list.
        index: usize,
    },

    /// Mark a movie as not watched.
    Unwatch {
        /// Position of the movie in the full list.
        index: usize,
    },

    /// Show store status.
    Status,

    /// Manage configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },

    /// Raw key-value store operations.
    Kv {
        /// Store subcommand.
        #[command(subcommand)]
        action: KvAction,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Raw store subcommands.
#[derive(Subcommand)]
enum KvAction {
    /// Store a value under a key.
    Set {
        /// The key.
        key: String,
        /// The value (stored as a JSON string).
        value: String,
    },
    /// Print the value for a key.
    Get {
        /// The key.
        key: String,
    },
    /// Delete a key.
    Remove {
        /// The key.
        key: String,
    },
    /// Delete every key.
    Clear,
    /// List all keys.
    Keys,
    /// Print the number of stored keys.
    Len,
    /// Walk every entry in storage order.
    Iterate,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let options = InitOptions {
        verbose: cli.verbose,
        format: LogFormat::parse(&cli.log_format),
    };
    if let Err(e) = observability::init(options) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: &CinelogConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Add { name, year } => cmd_add(config, &name, &year),

        Commands::List { filter } => cmd_list(config, filter.as_deref()),

        Commands::Edit { index } => cmd_edit(config, index),

        Commands::Delete { index, force } => cmd_delete(config, index, force),

        Commands::Watch { index } => cmd_watched(config, index, true),

        Commands::Unwatch { index } => cmd_watched(config, index, false),

        Commands::Status => cmd_status(config),

        Commands::Config { show } => cmd_config(config, show),

        Commands::Kv { action } => cmd_kv(config, action),

        Commands::Completions { shell } => cmd_completions(shell),
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> Result<CinelogConfig, Box<dyn std::error::Error>> {
    if let Some(config_path) = path {
        return CinelogConfig::load_from_file(std::path::Path::new(config_path))
            .map_err(std::convert::Into::into);
    }

    Ok(CinelogConfig::load_default())
}

/// Opens the configured store instance.
fn open_store(config: &CinelogConfig) -> Store {
    Store::open(&config.data_dir, &config.store_name)
}

/// Opens and hydrates the watchlist.
fn open_watchlist(config: &CinelogConfig) -> Result<WatchlistService, Box<dyn std::error::Error>> {
    WatchlistService::open(open_store(config)).map_err(Into::into)
}

/// Parses a filter string, defaulting to showing everything.
fn parse_filter(s: &str) -> WatchFilter {
    WatchFilter::parse(s).unwrap_or_default()
}

/// Add command.
fn cmd_add(
    config: &CinelogConfig,
    name: &str,
    year: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut watchlist = open_watchlist(config)?;
    let index = watchlist.add(name, year)?;
    println!("Added {index}: {name} ({year})");
    Ok(())
}

/// List command.
fn cmd_list(
    config: &CinelogConfig,
    filter: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut watchlist = open_watchlist(config)?;
    let filter = filter.map_or(config.default_filter, parse_filter);
    watchlist.set_filter(filter);

    let visible = watchlist.visible();
    if visible.is_empty() {
        println!("No movies in this section.");
        return Ok(());
    }

    for (index, movie) in visible {
        let marker = if movie.is_watched { "[x]" } else { "[ ]" };
        println!("{index:>3} {marker} {} ({})", movie.name, movie.year);
    }

    Ok(())
}

/// Edit command.
fn cmd_edit(config: &CinelogConfig, index: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut watchlist = open_watchlist(config)?;
    edit::execute(&mut watchlist, index).map_err(Into::into)
}

/// Delete command.
fn cmd_delete(
    config: &CinelogConfig,
    index: usize,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut watchlist = open_watchlist(config)?;

    let Some(movie) = watchlist.movies().get(index) else {
        return Err(cinelog::Error::IndexOutOfRange {
            index,
            len: watchlist.len(),
        }
        .into());
    };

    if !force && !confirm(&format!("Delete {index}: {movie}? [y/N] "))? {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = watchlist.delete(index)?;
    println!("Deleted {index}: {removed}");
    Ok(())
}

/// Watch/unwatch command.
fn cmd_watched(
    config: &CinelogConfig,
    index: usize,
    watched: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut watchlist = open_watchlist(config)?;
    watchlist.set_watched(index, watched)?;

    let state = if watched { "watched" } else { "not watched" };
    println!("Marked {index} as {state}");
    Ok(())
}

/// Status command.
fn cmd_status(config: &CinelogConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Cinelog Status");
    println!("==============");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let data_status = if config.data_dir.exists() {
        "Configured"
    } else {
        "Will be created on first use"
    };
    println!("Data Directory: {data_status}");
    println!("  Path: {}", config.data_dir.display());

    let store_path = config.store_path();
    let store_status = if store_path.exists() {
        "Available"
    } else {
        "Not initialized"
    };
    println!("Store File: {store_status}");
    println!("  Path: {}", store_path.display());

    match open_watchlist(config) {
        Ok(watchlist) => println!("Movies: {}", watchlist.len()),
        Err(e) => println!("Movies: unreadable ({e})"),
    }

    println!();
    println!("Use 'cinelog config --show' to view full configuration");

    Ok(())
}

/// Config command.
fn cmd_config(config: &CinelogConfig, show: bool) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("Current Configuration");
        println!("=====================");
        println!();
        println!("Data Directory: {}", config.data_dir.display());
        println!("Store Name: {}", config.store_name);
        println!("Default Filter: {}", config.default_filter);
    } else {
        println!("Use --show to display configuration");
    }

    Ok(())
}

/// Kv command.
fn cmd_kv(config: &CinelogConfig, action: KvAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config);

    let result = match action {
        KvAction::Set { key, value } => kv::set(&store, &key, &value),
        KvAction::Get { key } => kv::get(&store, &key),
        KvAction::Remove { key } => kv::remove(&store, &key),
        KvAction::Clear => kv::clear(&store),
        KvAction::Keys => kv::keys(&store),
        KvAction::Len => kv::len(&store),
        KvAction::Iterate => kv::iterate(&store),
    };

    result.map_err(Into::into)
}

/// Completions command.
fn cmd_completions(shell: clap_complete::Shell) -> Result<(), Box<dyn std::error::Error>> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "cinelog", &mut io::stdout());
    Ok(())
}

/// Asks a yes/no question on the terminal.
fn confirm(prompt: &str) -> Result<bool, Box<dyn std::error::Error>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
