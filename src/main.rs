mod cli;

use bookhunt::{config, listing, server};
use bookhunt_common::{BookId, ReadingStatus};
use bookhunt_db::{BookStore, NewBook};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "bookhunt=debug,bookhunt_db=debug,tower_http=debug".to_string()
        } else {
            "bookhunt=info,bookhunt_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List { json } => {
            let config = load_config(cli.config.as_deref(), cli.db)?;
            list_books(&config, json)
        }
        Commands::Add {
            title,
            author,
            genre,
            year,
            rating,
            status,
        } => {
            let config = load_config(cli.config.as_deref(), cli.db)?;
            let book = NewBook {
                title,
                author,
                genre,
                year,
                rating,
                status: ReadingStatus::from(status.as_str()),
            };
            add_book(&config, &book)
        }
        Commands::Delete { id } => {
            let config = load_config(cli.config.as_deref(), cli.db)?;
            delete_book(&config, BookId::from(id))
        }
        Commands::Seed => {
            let config = load_config(cli.config.as_deref(), cli.db)?;
            add_book(&config, &example_book())
        }
        Commands::Serve { host, port } => {
            let mut config = load_config(cli.config.as_deref(), cli.db)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref(), cli.db)
        }
        Commands::Version => {
            println!("bookhunt {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>, db_override: Option<PathBuf>) -> Result<config::Config> {
    let mut config = config::load_config_or_default(path)?;
    if let Some(db) = db_override {
        config::override_database_path(&mut config, db);
    }
    Ok(config)
}

fn open_store(config: &config::Config) -> Result<BookStore> {
    let path = &config.database.path;
    BookStore::open(path).with_context(|| format!("Failed to open book store at {:?}", path))
}

fn example_book() -> NewBook {
    NewBook::new("1984", "George Orwell")
        .with_genre("Dystopian Fiction")
        .with_year(1949)
        .with_rating(4.5)
        .with_status(ReadingStatus::Completed)
}

fn list_books(config: &config::Config, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let books = store.list_books()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else {
        println!("{}", listing::collection_heading(books.len()));
        println!();
        print!("{}", listing::render_table(&books));
    }

    store.close()?;
    Ok(())
}

fn add_book(config: &config::Config, book: &NewBook) -> Result<()> {
    let store = open_store(config)?;
    let created = store
        .create_book(book)
        .with_context(|| format!("Failed to add {:?}", book.title))?;
    println!("Added book {}: {}", created.id, created.title);
    store.close()?;
    Ok(())
}

fn delete_book(config: &config::Config, id: BookId) -> Result<()> {
    let store = open_store(config)?;
    if store.delete_book(id)? {
        println!("Deleted book {}", id);
    } else {
        println!("No book with id {}; nothing deleted", id);
    }
    store.close()?;
    Ok(())
}

fn serve(config: config::Config) -> Result<()> {
    tracing::info!("Starting BookHunt web server");
    let store = open_store(&config)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server::start_server(config, store))
}

fn validate_config(path: Option<&Path>, db_override: Option<PathBuf>) -> Result<()> {
    match path {
        Some(p) => println!("Validating config: {:?}", p),
        None => println!("No config file specified, using defaults"),
    }

    let config = load_config(path, db_override)?;
    if path.is_some() {
        println!("✓ Configuration is valid");
    }
    println!("  Database: {}", config.database.path.display());
    println!("  Server: {}:{}", config.server.host, config.server.port);

    Ok(())
}
