use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dailyverse")]
#[command(version)]
#[command(about = "A poem for every day, colored by the mood of the news")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's poem
    Today,

    /// Fetch a new poem, replacing today's
    Refresh,

    /// Generate a poem from the mood of today's news
    Vibe,

    /// Generate a poem from your own prompt
    Write {
        /// What the poem should be about
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },

    /// Classify the mood of today's news
    Analyze {
        /// News JSON to analyze instead of the configured news source
        #[arg(short, long)]
        file: Option<String>,
    },

    /// View poem history
    History {
        /// Show statistics summary
        #[arg(long)]
        stats: bool,

        /// Group entries by day
        #[arg(long, conflicts_with = "stats")]
        grouped: bool,
    },

    /// Show the daily reading streak
    Streak,

    /// List favorite poems
    Favorites,

    /// Toggle a poem as favorite
    Favorite { poem_id: String },

    /// Delete one history entry
    Forget { entry_id: String },

    /// Delete all history
    #[command(name = "clear-history")]
    ClearHistory,

    /// Print version information
    Version,
}
