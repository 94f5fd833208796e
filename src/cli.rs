use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookhunt")]
#[command(author, version, about = "Personal library tracker")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file (overrides config and BOOKHUNT_DB)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every book in the collection, ordered by title
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a book to the collection
    Add {
        /// Book title
        #[arg(long)]
        title: String,

        /// Book author
        #[arg(long)]
        author: String,

        /// Genre
        #[arg(long)]
        genre: Option<String>,

        /// Publication year
        #[arg(long, allow_hyphen_values = true)]
        year: Option<i64>,

        /// Rating from 0 to 5
        #[arg(long, allow_hyphen_values = true)]
        rating: Option<f64>,

        /// Reading status (to-read, currently reading, completed, ...)
        #[arg(long, default_value = "to-read")]
        status: String,
    },

    /// Delete a book by its id
    Delete {
        /// Id of the book to delete
        id: i64,
    },

    /// Add the example book to the collection
    Seed,

    /// Start the web server
    Serve {
        /// Host to bind to (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
