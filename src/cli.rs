use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::client::DEFAULT_BASE_URL;
use crate::models::Audience;

/// MealAdvisor — looks up a school's daily meal menu and suggests a dinner
/// that balances the day's nutrients.
#[derive(Parser, Debug)]
#[command(name = "meal_advisor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Date to look up (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Override the meal API base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the day's meals with a dinner recommendation.
    Show {
        /// Audience whose nutrient thresholds to apply.
        #[arg(short, long, value_enum, default_value = "adult")]
        audience: Audience,
    },

    /// Show only the dinner recommendation.
    Recommend {
        /// Audience whose nutrient thresholds to apply.
        #[arg(short, long, value_enum, default_value = "adult")]
        audience: Audience,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Show {
            audience: Audience::Adult,
        }
    }
}
