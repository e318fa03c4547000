//! # tierleague CLI Module
//!
//! This module implements the CLI interface for tierleague.
//!
//! ## Available Commands
//!
//! - `check` - Load a competition file and show the registered rosters
//! - `season` - Play a season from a competition file and show the tables
//! - `team` - Play a season and show one team's line

mod commands;

use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// tierleague - multi-tier league seasons
///
/// Plays a season described in a TOML competition file, ranks every tier and
/// applies promotion and relegation between neighbouring tiers.
#[derive(Parser, Debug)]
#[command(name = "tierleague")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a competition file and list its rosters
    Check {
        /// Path to the competition file (TOML)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Start a season, play the configured results and print the tables
    Season {
        /// Path to the competition file (TOML)
        #[arg(short, long)]
        file: PathBuf,

        /// Also end the season and apply promotion/relegation
        #[arg(short, long)]
        end_season: bool,
    },

    /// Show one team's statistics and form after the configured results
    Team {
        /// Path to the competition file (TOML)
        #[arg(short, long)]
        file: PathBuf,

        /// Tier index (0 is the highest division)
        #[arg(short, long)]
        tier: usize,

        /// Official name of the team
        #[arg(short, long)]
        name: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Check { file } => cmd_check(&file, json_mode),
        Commands::Season { file, end_season } => cmd_season(&file, json_mode, end_season),
        Commands::Team { file, tier, name } => cmd_team(&file, json_mode, tier, &name),
    }
}
