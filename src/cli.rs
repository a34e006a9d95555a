use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "model-caps",
    about = "Inspect model capability profiles and open sign-in links",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a JSON config file, read after MODEL_CAPS_* environment variables
    #[arg(long, short = 'c', env = "MODEL_CAPS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered models
    List {
        /// Only show models served by this provider (e.g. "openai", "openrouter")
        #[arg(long, short = 'p')]
        provider: Option<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the full capability record of one model
    Show {
        /// Provider name, e.g. "openai"
        provider: String,

        /// Model id within the provider, e.g. "openai/gpt-4o"
        model_id: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open an authenticated link to the web app in the browser
    SignIn {
        /// Web app path to land on after signing in
        #[arg(long, default_value = "/")]
        path: String,
    },

    /// Open a web app page without signing in
    Open {
        /// Web app path, e.g. "/pricing"
        path: String,
    },
}
