use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_collection_config::PathManager;
use movie_collection_core::{apply_view, CollectionStore, SortDirection, ViewParams};
use movie_collection_models::{
    coerce_price, format_currency, rating_stars, FieldPolicy, Movie, MovieStatus,
};

pub async fn run_list(
    query: Option<String>,
    genres: Vec<String>,
    statuses: Vec<MovieStatus>,
    sort_rating: SortDirection,
    sort_year: SortDirection,
    output: &Output,
) -> Result<()> {
    let path_manager = PathManager::default();
    let store = CollectionStore::new(path_manager.collection_file());
    let movies = store
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load collection: {}", e))?;

    let params = ViewParams {
        query: query.unwrap_or_default(),
        genres,
        statuses,
        rating_sort: sort_rating,
        year_sort: sort_year,
    };
    let filtered = apply_view(&movies, &params);

    if output.format() != OutputFormat::Human {
        let value = serde_json::to_value(&filtered)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize collection: {}", e))?;
        output.json(&value);
        return Ok(());
    }

    if movies.is_empty() {
        output.info("Your collection is empty. Use 'reelvault discover' to find movies to add.");
        return Ok(());
    }
    if filtered.is_empty() {
        output.info("No movies match the current filters.");
        return Ok(());
    }

    print_collection_table(&filtered);
    output.info(&format!("{} of {} movies", filtered.len(), movies.len()));

    Ok(())
}

fn print_collection_table(movies: &[Movie]) {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Year")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Status")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Rating")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Genres")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Price")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Watched")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
    ]);

    for movie in movies {
        table.add_row(vec![
            Cell::new(short_id(&movie.id)),
            Cell::new(&movie.title),
            Cell::new(
                movie
                    .release_year
                    .map(|year| year.to_string())
                    .unwrap_or_else(|| "—".to_string()),
            ),
            status_cell(movie.status),
            Cell::new(rating_display(movie)),
            Cell::new(movie.genre_labels().join(", ")),
            Cell::new(format_currency(coerce_price(movie.estimated_price.as_ref()))),
            Cell::new(movie.watched_date_label().unwrap_or_default()),
        ]);
    }

    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
}

fn status_cell(status: MovieStatus) -> Cell {
    let color = match status {
        MovieStatus::Wishlist => comfy_table::Color::Yellow,
        MovieStatus::Owned => comfy_table::Color::Green,
        MovieStatus::Watched => comfy_table::Color::Cyan,
    };
    Cell::new(status.label()).fg(color)
}

/// Stars only when the status still permits a rating; stale values stay hidden
fn rating_display(movie: &Movie) -> String {
    let policy = FieldPolicy::for_status(movie.status);
    match movie.rating {
        Some(rating) if policy.rating => rating_stars(rating),
        _ => String::new(),
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
