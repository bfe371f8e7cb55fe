//! CLI frontend for the Tav character builder.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tav_core::{Ability, AbilityScores, ExportFormat};
use tav_mechanics::point_buy::DEFAULT_BUDGET;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tav",
    about = "Tav: roll, validate, and keep fantasy character sheets",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding saved characters (default: $TAV_STORE or the user data dir)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a random character
    Random {
        /// Character name
        #[arg(short, long, default_value = "Tav")]
        name: String,

        /// RNG seed for a reproducible character
        #[arg(short, long)]
        seed: Option<u64>,

        /// Point-buy budget
        #[arg(long, default_value_t = DEFAULT_BUDGET, allow_negative_numbers = true)]
        budget: i64,

        /// Save the character to the store
        #[arg(long)]
        save: bool,
    },

    /// Build a character from explicit choices and save it
    Create(commands::create::CreateArgs),

    /// Build a character step by step with interactive prompts
    Wizard,

    /// Show the point-buy cost of a set of scores
    Cost {
        /// Scores, e.g. STR=15,DEX=14,CON=13,INT=12,WIS=10,CHA=8
        scores: AbilityScores,

        /// Point-buy budget
        #[arg(long, default_value_t = DEFAULT_BUDGET, allow_negative_numbers = true)]
        budget: i64,
    },

    /// List saved characters
    List,

    /// Show a saved character sheet
    Show {
        /// Character ID or unique prefix
        id: String,
    },

    /// Export a saved character as txt, json, or html
    Export {
        /// Character ID or unique prefix
        id: String,

        /// Output format: txt, json, html
        format: ExportFormat,

        /// Output file path; `-` writes to stdout (default: derived from the name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a saved character
    Delete {
        /// Character ID or unique prefix
        id: String,

        /// Delete without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace a saved character's skills
    Reskill {
        /// Character ID or unique prefix
        id: String,

        /// New skills, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        skills: Vec<String>,
    },

    /// List rule-table entries (origins, races, classes, subclasses,
    /// backgrounds, skills, feats, costs)
    Rules {
        /// Which table to show (default: all)
        kind: Option<String>,

        /// Only show skills governed by this ability
        #[arg(long)]
        ability: Option<Ability>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = cli.store.as_deref();
    let result = match cli.command {
        Commands::Random {
            name,
            seed,
            budget,
            save,
        } => commands::random::run(store, &name, seed, budget, save),
        Commands::Create(args) => commands::create::run(store, args),
        Commands::Wizard => commands::wizard::run(store),
        Commands::Cost { scores, budget } => commands::cost::run(&scores, budget),
        Commands::List => commands::list::run(store),
        Commands::Show { id } => commands::show::run(store, &id),
        Commands::Export { id, format, output } => {
            commands::export::run(store, &id, format, output.as_deref())
        }
        Commands::Delete { id, yes } => commands::delete::run(store, &id, yes),
        Commands::Reskill { id, skills } => commands::reskill::run(store, &id, &skills),
        Commands::Rules { kind, ability } => commands::rules::run(kind.as_deref(), ability),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
