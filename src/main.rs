use anyhow::{Context, Result};
use book_elements::{
    find_elements, validate_selector, Catalog, ElementsQuery, FileTreeProvider, SourceCatalog,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

const CATALOG_ENV: &str = "BOOK_ELEMENTS_CATALOG";
const BOOKS_ROOT_ENV: &str = "PATH_TO_BOOKS";
const LOG_ENV: &str = "BOOK_ELEMENTS_LOG";
const DEFAULT_CATALOG: &str = "books.toml";

#[derive(Parser)]
#[command(name = "book-elements")]
#[command(about = "Count custom elements per section of structured textbooks", long_about = None)]
#[command(version)]
struct Cli {
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count elements matching a selector in every section of a book
    Elements {
        /// Book catalog (defaults to $BOOK_ELEMENTS_CATALOG, then ./books.toml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Book name as listed in the catalog (underscores read as spaces)
        #[arg(short, long)]
        book: String,

        /// Hybrid selector, e.g. "table:has(img)" or ".howto:hasText(Step)"
        #[arg(short, long)]
        element: String,

        /// Directory holding book files (overrides $PATH_TO_BOOKS and the catalog)
        #[arg(long)]
        books_root: Option<PathBuf>,

        /// Refuse book files larger than this many bytes
        #[arg(long)]
        max_bytes: Option<u64>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check a selector's syntax without opening any book
    Validate {
        /// Hybrid selector to check
        selector: String,
    },

    /// List the books available for searching
    Books {
        /// Book catalog (defaults to $BOOK_ELEMENTS_CATALOG, then ./books.toml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        Commands::Elements {
            catalog,
            book,
            element,
            books_root,
            max_bytes,
            compact,
        } => cmd_elements(catalog, &book, &element, books_root, max_bytes, compact),

        Commands::Validate { selector } => cmd_validate(&selector),

        Commands::Books { catalog, compact } => cmd_books(catalog, compact),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Resolve the catalog path.
///
/// Priority order:
/// 1. Explicit --catalog flag
/// 2. BOOK_ELEMENTS_CATALOG environment variable
/// 3. ./books.toml
fn resolve_catalog(cli_catalog: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_catalog {
        return path;
    }

    if let Ok(env_path) = env::var(CATALOG_ENV) {
        if !env_path.trim().is_empty() {
            return PathBuf::from(env_path);
        }
    }

    PathBuf::from(DEFAULT_CATALOG)
}

/// Resolve the directory book files are read from.
///
/// Priority order:
/// 1. Explicit --books-root flag
/// 2. PATH_TO_BOOKS environment variable
/// 3. `settings.books_root` of the catalog, else the catalog's directory
fn resolve_books_root(cli_root: Option<PathBuf>, catalog: &Catalog) -> Result<PathBuf> {
    if let Some(path) = cli_root {
        return Ok(path);
    }

    if let Ok(env_path) = env::var(BOOKS_ROOT_ENV) {
        let path = PathBuf::from(&env_path);
        if path.is_dir() {
            return Ok(path);
        }
        eprintln!(
            "{}",
            format!(
                "Warning: {BOOKS_ROOT_ENV} is set but is not a directory: {}",
                env_path
            )
            .yellow()
        );
    }

    catalog
        .books_root()
        .map(Path::to_path_buf)
        .context("could not determine where book files live; pass --books-root")
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_elements(
    catalog: Option<PathBuf>,
    book: &str,
    element: &str,
    books_root: Option<PathBuf>,
    max_bytes: Option<u64>,
    compact: bool,
) -> Result<()> {
    // 1. Load the catalog
    let catalog_path = resolve_catalog(catalog);
    let catalog = Catalog::from_path(&catalog_path)?;

    // 2. Build the provider over the books root
    let root = resolve_books_root(books_root, &catalog)?;
    let mut provider = FileTreeProvider::new(root);
    if let Some(limit) = max_bytes {
        provider = provider.with_max_bytes(limit);
    }

    // 3. Validate, load, scan
    let query = ElementsQuery::from_request(book, element);
    tracing::info!(book = %query.book_name, selector = %query.selector, "GET elements");

    match find_elements(&catalog, &provider, &query, catalog.settings().text_match) {
        Ok(report) => {
            print_json(&report, compact)?;
            eprintln!(
                "{}",
                format!(
                    "Found {} sections ({} instances) with given selector ({}).",
                    report.results.len(),
                    report.total_instances(),
                    query.selector
                )
                .dimmed()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", "✗".red(), err);
            std::process::exit(1);
        }
    }
}

fn cmd_validate(selector: &str) -> Result<()> {
    let outcome = validate_selector(selector);

    if outcome.ok {
        println!("{} {}", "✓".green(), outcome.message);
        Ok(())
    } else {
        eprintln!("{} {}", "✗".red(), outcome.message);
        std::process::exit(1);
    }
}

fn cmd_books(catalog: Option<PathBuf>, compact: bool) -> Result<()> {
    let catalog_path = resolve_catalog(catalog);
    let catalog = Catalog::from_path(&catalog_path)?;
    print_json(&catalog.books(), compact)
}
