//! CLI module for the K-House 71 site server
//!
//! Provides command-line interface parsing and handling for the khouse-server binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod catalog;
pub mod init;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// K-House 71 site server
///
/// Multilingual brochure site with an AI room matcher, a chatbot and a
/// mock reservation form.
#[derive(Parser, Debug)]
#[command(
    name = "khouse-server",
    author = "K-House 71 <contact@k-house71.com>",
    version,
    about = "K-House 71 site server",
    long_about = "Server-rendered brochure site of K-House Sukhumvit 71 in five languages,\n\
                  with an AI room matcher and chatbot and a mock reservation form.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold a configuration.",
    after_help = "EXAMPLES:\n    \
                  khouse-server init                  # Write khouse.toml and .env.example\n    \
                  khouse-server                       # Start the server (requires khouse.toml)\n    \
                  khouse-server catalog check         # Verify the content catalog\n    \
                  khouse-server ask \"quiet studio\"    # Ask the room matcher once\n    \
                  khouse-server --config my.toml      # Use a custom config file"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "khouse.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a khouse.toml and .env.example
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Widgets to enable on the page
        #[arg(long, value_enum, default_value_t = InitVariant::All)]
        variant: InitVariant,
    },

    /// Show configuration information
    Config {
        /// Show the full configuration
        #[arg(short = 'f', long)]
        full: bool,

        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },

    /// Inspect the content catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Send one question through the AI bridge
    Ask {
        /// The question
        text: String,

        /// Ask the chatbot instead of the room matcher
        #[arg(long)]
        chat: bool,
    },
}

/// Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Verify every language against the English catalog and the property tables
    Check,

    /// Show the main strings of one language
    Show {
        /// Language code (th, en, jp, cn, ar)
        lang: String,
    },
}

/// Page widgets enabled by `init`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitVariant {
    /// Room matcher only
    Matcher,
    /// Chatbot only
    Chatbot,
    /// Reservation form only
    Reservation,
    /// Every widget
    All,
}

impl InitVariant {
    /// `(room_matcher, chatbot, reservation)`
    pub fn features(&self) -> (bool, bool, bool) {
        match self {
            InitVariant::Matcher => (true, false, false),
            InitVariant::Chatbot => (false, true, false),
            InitVariant::Reservation => (false, false, true),
            InitVariant::All => (true, true, true),
        }
    }

    /// Whether any enabled widget calls the AI backend
    pub fn uses_ai(&self) -> bool {
        let (matcher, chatbot, _) = self.features();
        matcher || chatbot
    }
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
