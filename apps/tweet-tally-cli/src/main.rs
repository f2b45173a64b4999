use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod error;
mod logging;

use error::{report_failure, CliResult, USER_ERROR_EXIT_CODE};
use logging::LogLevel;

#[derive(Parser)]
#[command(name = "tweet-tally")]
#[command(about = "Tweet Tally - Rank the most prolific authors in a tweets CSV")]
#[command(version)]
struct Cli {
    /// Log verbosity (logs go to stderr)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count tweets per author and print the top authors
    Tally {
        /// Tweets CSV file; the header must contain a "name" column
        file: PathBuf,

        /// YAML file overriding limits and report size
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Describe the specific input violation instead of a generic message
        #[arg(short, long)]
        debug: bool,
    },

    /// Generate a tweets CSV fixture
    GenerateFixtures {
        /// Number of tweets to generate
        #[arg(short, long)]
        count: usize,

        /// Seed for deterministic generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of distinct authors
        #[arg(short, long, default_value = "50")]
        authors: usize,

        /// Output file path
        #[arg(short, long, default_value = "tweets.csv")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(USER_ERROR_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = logging::init_logging(cli.log_level) {
        eprintln!("{}", err);
    }

    let mut debug = false;
    match run(cli.command, &mut debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, debug);
            err.exit_code()
        }
    }
}

/// Run one command. `debug` is set as soon as the command knows whether
/// failures should be reported in detail.
fn run(command: Commands, debug: &mut bool) -> CliResult<()> {
    match command {
        Commands::Tally {
            file,
            config,
            debug: debug_flag,
        } => {
            *debug = debug_flag;
            let mut tally_config = config::load_tally_config(config.as_deref())?;
            tally_config.debug |= debug_flag;
            *debug = tally_config.debug;

            commands::tally::execute(file, tally_config)
        }

        // Fixture generation has no input format to hide.
        Commands::GenerateFixtures {
            count,
            seed,
            authors,
            output,
        } => {
            *debug = true;
            commands::generate_fixtures::execute(count, seed, authors, output)
        }
    }
}
