use super::load_tmdb_token;
use super::spinner::FetchSpinner;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_collection_catalog::{CatalogClient, CatalogEndpoint, CatalogRequest, MovieListResponse};
use movie_collection_config::{Config, PathManager};

pub async fn run_discover(
    query: Option<String>,
    category: Option<CatalogEndpoint>,
    page: u32,
    language: Option<String>,
    genres: bool,
    output: &Output,
) -> Result<()> {
    let path_manager = PathManager::default();
    let config = Config::load_or_default(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;
    let token = load_tmdb_token(&path_manager)?;
    let client = CatalogClient::new(token);

    let endpoint = if query.is_some() {
        CatalogEndpoint::Search
    } else {
        category.unwrap_or(CatalogEndpoint::Popular)
    };
    let request = CatalogRequest {
        query,
        page: Some(page),
        language: Some(language.unwrap_or(config.language)),
        include_genres: genres,
        ..Default::default()
    };

    let spinner = FetchSpinner::new("Fetching movies from TMDB...");
    let result = client.fetch_list(endpoint, &request).await;
    spinner.finish_and_clear();
    let mut list = result.map_err(|e| color_eyre::eyre::eyre!("Failed to fetch movies: {}", e))?;

    if endpoint == CatalogEndpoint::Search {
        // Most-voted first
        list.results
            .sort_by(|a, b| b.vote_count.unwrap_or(0).cmp(&a.vote_count.unwrap_or(0)));
    }

    if output.format() != OutputFormat::Human {
        let value = serde_json::to_value(&list)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize results: {}", e))?;
        output.json(&value);
        return Ok(());
    }

    if list.results.is_empty() {
        output.info("No movies found.");
        return Ok(());
    }

    print_results_table(&list, genres);
    output.info(&format!(
        "Page {} of {} ({} movies)",
        list.page, list.total_pages, list.total_results
    ));

    Ok(())
}

fn print_results_table(list: &MovieListResponse, show_genres: bool) {
    let mut table = Table::new();
    let mut header = vec![
        Cell::new("TMDB ID")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Year")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Score")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Votes")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
    ];
    if show_genres {
        header.push(
            Cell::new("Genres")
                .fg(comfy_table::Color::Cyan)
                .add_attribute(comfy_table::Attribute::Bold),
        );
    }
    table.set_header(header);

    for movie in &list.results {
        let mut row = vec![
            Cell::new(movie.id.to_string()),
            Cell::new(&movie.title),
            Cell::new(
                movie
                    .release_year()
                    .map(|year| year.to_string())
                    .unwrap_or_else(|| "—".to_string()),
            ),
            Cell::new(
                movie
                    .vote_average
                    .map(|score| format!("{:.1}", score))
                    .unwrap_or_else(|| "—".to_string()),
            ),
            Cell::new(
                movie
                    .vote_count
                    .map(|votes| votes.to_string())
                    .unwrap_or_else(|| "—".to_string()),
            ),
        ];
        if show_genres {
            row.push(Cell::new(movie.genre_names().join(", ")));
        }
        table.add_row(row);
    }

    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
}
