use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use movie_collection_catalog::CatalogEndpoint;
use movie_collection_core::SortDirection;
use movie_collection_models::MovieStatus;

mod commands;
mod logging;
mod output;

use commands::{add, config, dashboard, discover, edit, export, list, remove};

#[derive(Parser)]
#[command(name = "reelvault")]
#[command(about = "ReelVault - Track the movies you want, own, and have watched")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse or search the movie catalog
    #[command(long_about = "Search TMDB by title or browse a category (popular, top-rated, upcoming, trending). Use the listed TMDB ids with 'reelvault add' to put a movie in your collection.")]
    Discover {
        /// Search the catalog by title
        #[arg(short, long, conflicts_with = "category")]
        query: Option<String>,

        /// Category to browse: popular, top-rated, upcoming, trending
        #[arg(short, long, value_parser = parse_category)]
        category: Option<CatalogEndpoint>,

        /// Result page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Catalog language as a BCP 47 tag (overrides the configured one)
        #[arg(long, value_name = "TAG")]
        language: Option<String>,

        /// Resolve genre ids to genre names in the results
        #[arg(long, action = ArgAction::SetTrue)]
        genres: bool,
    },
    /// Add a movie from the catalog to your collection
    #[command(long_about = "Fetch a movie's details from TMDB by id and add it to your collection on the wishlist. Movies without a valid release date cannot be added.")]
    Add {
        /// TMDB id of the movie to add
        tmdb_id: u64,

        /// Catalog language as a BCP 47 tag (overrides the configured one)
        #[arg(long, value_name = "TAG")]
        language: Option<String>,
    },
    /// Show your collection, filtered and sorted
    #[command(long_about = "List the movies in your collection. Filters combine: a title query, genre filters, and status filters must all match. At most one sort is active; --sort-rating takes precedence over --sort-year.")]
    List {
        /// Only titles containing this text (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,

        /// Only movies with this genre (repeatable)
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,

        /// Only movies with this status (repeatable): wishlist, owned, watched
        #[arg(long = "status", value_name = "STATUS", value_parser = parse_status)]
        statuses: Vec<MovieStatus>,

        /// Sort by rating: none, asc, desc
        #[arg(long, default_value = "none", value_parser = parse_sort)]
        sort_rating: SortDirection,

        /// Sort by release year: none, asc, desc (ignored while --sort-rating is active)
        #[arg(long, default_value = "none", value_parser = parse_sort)]
        sort_year: SortDirection,
    },
    /// Show collection statistics
    #[command(long_about = "Show the dashboard for your collection: totals per status, estimated value, movies watched per month over the last year, your most collected genres, and the status distribution.")]
    Dashboard,
    /// Edit a movie in your collection
    #[command(long_about = "Change a movie's status or personal metadata. Ratings and reviews only apply to watched movies and a price only to owned or watched movies; fields the new status does not permit are cleared. Moving a movie to watched records the watch date.")]
    Edit {
        /// Collection id of the movie (a unique prefix is enough)
        id: String,

        /// New status: wishlist, owned, watched
        #[arg(long, value_parser = parse_status)]
        status: Option<MovieStatus>,

        /// Star rating 1-5; 0 clears it
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
        rating: Option<u8>,

        /// Remove the rating
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "rating")]
        clear_rating: bool,

        /// Personal review text; an empty string clears it
        #[arg(long)]
        review: Option<String>,

        /// Estimated price
        #[arg(long)]
        price: Option<f64>,

        /// Remove the estimated price
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "price")]
        clear_price: bool,

        /// Custom poster URL overriding the catalog poster
        #[arg(long, value_name = "URL")]
        poster: Option<String>,

        /// Remove the custom poster
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "poster")]
        clear_poster: bool,
    },
    /// Remove a movie from your collection
    Remove {
        /// Collection id of the movie (a unique prefix is enough)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Export your collection
    #[command(long_about = "Export the full collection as CSV or JSON, to stdout by default or to a file with --out.")]
    Export {
        /// Export format
        #[arg(long, default_value = "csv", value_enum)]
        format: export::ExportFormat,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Configure credentials and settings
    #[command(long_about = "Manage configuration and credentials for ReelVault. Running without a subcommand shows the current configuration with secrets masked.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks sensitive data)
    Show,

    /// Store the TMDB API read access token
    #[command(long_about = "Store the TMDB API read access token used for catalog requests. Create one at https://www.themoviedb.org/settings/api. If not provided, you will be prompted.")]
    Token {
        /// TMDB API Read Access Token (if not provided, will prompt)
        #[arg(long)]
        token: Option<String>,
    },

    /// Set the catalog language
    Language {
        /// BCP 47 language tag, e.g. en-US (if not provided, will prompt)
        #[arg(long, value_name = "TAG")]
        language: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Discover {
            query,
            category,
            page,
            language,
            genres,
        } => discover::run_discover(query, category, page, language, genres, &output).await,
        Commands::Add { tmdb_id, language } => add::run_add(tmdb_id, language, &output).await,
        Commands::List {
            query,
            genres,
            statuses,
            sort_rating,
            sort_year,
        } => list::run_list(query, genres, statuses, sort_rating, sort_year, &output).await,
        Commands::Dashboard => dashboard::run_dashboard(&output).await,
        Commands::Edit {
            id,
            status,
            rating,
            clear_rating,
            review,
            price,
            clear_price,
            poster,
            clear_poster,
        } => {
            edit::run_edit(
                id,
                status,
                rating,
                clear_rating,
                review,
                price,
                clear_price,
                poster,
                clear_poster,
                &output,
            )
            .await
        }
        Commands::Remove { id, yes } => remove::run_remove(id, yes, &output).await,
        Commands::Export { format, out } => export::run_export(format, out, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &output).await
        }
    }
}

fn parse_status(s: &str) -> Result<MovieStatus, String> {
    s.parse()
}

fn parse_sort(s: &str) -> Result<SortDirection, String> {
    s.parse()
}

fn parse_category(s: &str) -> Result<CatalogEndpoint, String> {
    let endpoint = s.parse::<CatalogEndpoint>()?;
    match endpoint {
        CatalogEndpoint::Search | CatalogEndpoint::Details => Err(format!(
            "Invalid category: {}. Use 'popular', 'top-rated', 'upcoming', or 'trending'",
            s
        )),
        _ => Ok(endpoint),
    }
}
