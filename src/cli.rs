//! Command line surface of the `linediet` binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ld_core::WeightUnit;

#[derive(Debug, Parser)]
#[command(name = "linediet")]
#[command(about = "Daily weight status: where today's weigh-in sits against your goal line")]
#[command(version)]
pub struct Cli {
    /// Config file (default: $LINEDIET_CONFIG, then <config_dir>/linediet/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Show today's status (the default)
    Show,

    /// Record a weigh-in, replacing any entry for the same date
    Log {
        /// Measured weight
        weight: f64,

        /// Weight is in kilograms instead of pounds
        #[arg(long)]
        kg: bool,

        /// Date of the weigh-in (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Set or replace the goal line
    Goal {
        /// First day of the line (YYYY-MM-DD)
        start_date: NaiveDate,

        /// Weight on the first day
        start_weight: f64,

        /// Day the goal weight should be reached (YYYY-MM-DD)
        goal_date: NaiveDate,

        /// Target weight
        goal_weight: f64,

        /// Weights are in kilograms instead of pounds
        #[arg(long)]
        kg: bool,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show)
    }
}

pub(crate) fn unit(kg: bool) -> WeightUnit {
    if kg {
        WeightUnit::Kilograms
    } else {
        WeightUnit::Pounds
    }
}
