use clap::{Parser, Subcommand, ValueEnum};

use crate::models::profile::{BudgetCategory, StudentProfile};
use crate::models::user::Theme;

#[derive(Parser, Debug)]
#[command(name = "eduguide", version, about = "AI college guidance from your terminal")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a display name and email locally
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Forget the identity and the saved shortlist (the theme is kept)
    Logout,
    /// Show or change the display theme
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeArg>,
    },
    /// Ask the engine for college recommendations
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,
        #[arg(long = "save", value_name = "COLLEGE_ID", help = "Toggle a returned college in the saved shortlist")]
        save: Vec<String>,
        #[arg(long = "compare", value_name = "COLLEGE_ID", help = "Add a returned college to the comparison (max 3)")]
        compare: Vec<String>,
    },
    /// List the saved shortlist
    Saved,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ProfileArgs {
    #[arg(long, help = "Board percentage, competitive rank, or exam score")]
    pub metric: String,
    #[arg(long)]
    pub course: String,
    #[arg(long, value_parser = parse_budget, help = "Budget tier A-E")]
    pub budget: BudgetCategory,
    #[arg(long)]
    pub location: String,
}

impl From<ProfileArgs> for StudentProfile {
    fn from(args: ProfileArgs) -> Self {
        StudentProfile {
            academic_metric: args.metric,
            preferred_course: args.course,
            budget_category: args.budget,
            preferred_location: args.location,
        }
    }
}

fn parse_budget(value: &str) -> Result<BudgetCategory, String> {
    value.parse()
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

impl ThemeArg {
    /// The explicit theme requested, or `None` for a toggle.
    pub fn theme(self) -> Option<Theme> {
        match self {
            ThemeArg::Light => Some(Theme::Light),
            ThemeArg::Dark => Some(Theme::Dark),
            ThemeArg::Toggle => None,
        }
    }
}
