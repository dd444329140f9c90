use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{CliContext, RuleArg};
use surf_config::ConfigMode;

#[derive(Parser)]
#[command(name = "surf")]
#[command(about = "Surf camp roster: import bookings, query presence, plan lessons", long_about = None)]
struct Cli {
    /// Layered config paths in merge order (falls back to $SURF_CONFIG)
    #[arg(long = "config", global = true)]
    config_paths: Vec<String>,

    /// Fail instead of warn when the config carries keys the command never reads
    #[arg(long, global = true, default_value_t = false)]
    strict_config: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> site -> local)
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Reconcile a booking export into the guest ledger
    Import {
        /// Booking export (CSV)
        #[arg(long)]
        csv: String,
    },

    /// Guests on camp during a window
    Roster {
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: String,

        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end: String,

        /// Boundary-day rule
        #[arg(long, value_enum, default_value_t = RuleArg::Inclusive)]
        rule: RuleArg,

        /// Only guests at this skill level (e.g. "BEGINNER PLUS")
        #[arg(long)]
        level: Option<String>,
    },

    /// Guests eligible for lessons during a window (updates single-parent flags)
    Lessons {
        #[arg(long)]
        start: String,

        #[arg(long)]
        end: String,
    },

    /// Day plan for one date (stored; re-requests return the stored plan)
    Plan {
        /// YYYY-MM-DD; defaults to today at the camp
        #[arg(long)]
        date: Option<String>,
    },

    /// Day plans for the camp week (Sunday to Saturday) holding a date
    Week {
        #[arg(long)]
        date: Option<String>,

        /// Keep planning week by week through the camp week holding this date
        #[arg(long)]
        until: Option<String>,
    },

    /// Delete one guest from the ledger
    Delete {
        /// Guest id (UUID)
        #[arg(long)]
        id: String,
    },
}

impl Commands {
    fn mode(&self) -> Option<ConfigMode> {
        match self {
            Commands::ConfigHash { .. } => None,
            Commands::Import { .. } => Some(ConfigMode::Import),
            Commands::Roster { .. } | Commands::Lessons { .. } | Commands::Delete { .. } => {
                Some(ConfigMode::Roster)
            }
            Commands::Plan { .. } | Commands::Week { .. } => Some(ConfigMode::Plan),
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // Logs go to stderr; stdout carries command output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    // Best-effort: a missing .env.local is normal outside dev machines.
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let Some(mode) = cli.cmd.mode() else {
        init_tracing("info");
        if let Commands::ConfigHash { paths } = &cli.cmd {
            commands::config_hash(paths)?;
        }
        return Ok(());
    };

    let ctx = CliContext::load(&cli.config_paths, mode, cli.strict_config)?;
    init_tracing(&ctx.camp.log_filter);
    ctx.log_unused_keys();

    match cli.cmd {
        Commands::ConfigHash { .. } => {}
        Commands::Import { csv } => commands::import(&ctx, &csv)?,
        Commands::Roster {
            start,
            end,
            rule,
            level,
        } => commands::roster(&ctx, &start, &end, rule, level.as_deref())?,
        Commands::Lessons { start, end } => commands::lessons(&ctx, &start, &end)?,
        Commands::Plan { date } => commands::plan(&ctx, date.as_deref())?,
        Commands::Week { date, until } => {
            commands::week(&ctx, date.as_deref(), until.as_deref())?
        }
        Commands::Delete { id } => commands::delete(&ctx, &id)?,
    }
    Ok(())
}
