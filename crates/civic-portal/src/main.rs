use civic_portal_lib::{commands, config};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "civic-portal",
    about = "Community Engagement Portal for reporting municipal issues",
    version,
    long_about = "Report municipal issues from the terminal.\n\nExamples:\n  civic-portal                                   # Open the portal\n  civic-portal report -l \"Main St\" -d \"There is a large pothole here\"\n  civic-portal list                              # Show reported issues\n  civic-portal --ephemeral                       # Try the portal without saving anything"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with extensive details
    #[arg(long, global = true)]
    debug: bool,

    /// Issue store file (defaults to the platform data directory)
    #[arg(long, global = true, env = config::STORE_ENV_VAR)]
    store: Option<PathBuf>,

    /// Keep reports in memory only (overrides --store)
    #[arg(long, global = true)]
    ephemeral: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open the interactive portal (the default)
    Tui,

    /// Submit an issue report
    Report {
        /// Where the issue is
        #[arg(short, long)]
        location: String,

        /// What the problem is (at least 20 characters)
        #[arg(short, long)]
        description: String,
    },

    /// Check a report without submitting it
    Check {
        /// Where the issue is
        #[arg(short, long)]
        location: String,

        /// What the problem is (at least 20 characters)
        #[arg(short, long)]
        description: String,
    },

    /// List reported issues
    List,
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
        logging::info("Verbose mode enabled");
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    let store = config::resolve_store(cli.store.clone(), cli.ephemeral);

    match &cli.command {
        None | Some(Commands::Tui) => {
            let repository = config::open_repository(&store);
            if let Err(e) = ui::run_portal_tui(repository) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        Some(Commands::Report {
            location,
            description,
        }) => {
            let mut repository = config::open_repository(&store);
            match commands::report(&mut *repository, location, description) {
                Ok(id) => {
                    println!(
                        "{}",
                        format!("✅ Issue {} submitted. Thank you!", id.short()).green()
                    );
                    if cli.ephemeral {
                        println!("{}", "Note: --ephemeral was set, nothing was saved".yellow());
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", "❌".red(), e);
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Check {
            location,
            description,
        }) => match commands::check(location, description) {
            Ok(()) => println!("{}", "✅ Report is valid".green()),
            Err(e) => {
                eprintln!("{} {}", "❌".red(), e);
                std::process::exit(1);
            }
        },

        Some(Commands::List) => {
            let repository = config::open_repository(&store);
            match commands::list(&*repository) {
                Ok(lines) if lines.is_empty() => println!("No issues reported yet"),
                Ok(lines) => {
                    println!("{}", format!("{} reported issue(s):", lines.len()).bold());
                    for line in lines {
                        println!("  {}", line);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
