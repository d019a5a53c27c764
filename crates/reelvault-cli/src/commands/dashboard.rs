use crate::output::{Output, OutputFormat};
use chrono::Utc;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_collection_config::{Config, PathManager};
use movie_collection_core::{
    status_distribution, summarize, top_genres, watched_history, CollectionStore,
    CollectionSummary, GenreCount, MonthBucket, StatusSlice,
};
use movie_collection_models::{format_currency, MovieStatus};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_dashboard(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = Config::load_or_default(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;
    let store = CollectionStore::new(path_manager.collection_file());
    let movies = store
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load collection: {}", e))?;

    let now = Utc::now();
    let summary = summarize(&movies, now);
    let history = watched_history(&movies, now);
    let genres = top_genres(&movies, config.top_genres_limit);
    let distribution = status_distribution(&movies);

    if output.format() != OutputFormat::Human {
        output.json(&json!({
            "summary": summary,
            "watched_history": history,
            "top_genres": genres,
            "status_distribution": distribution,
        }));
        return Ok(());
    }

    if output.is_quiet() {
        return Ok(());
    }

    // Header
    println!("\n{}", "╔════════════════════════════════════════════════════════════╗".bright_white());
    println!("{}", "║".bright_white());
    println!("{} {}", "║".bright_white(), "Dashboard".bright_cyan().bold());
    println!("{}", "╚════════════════════════════════════════════════════════════╝".bright_white());
    println!();

    print_summary_table(&summary);
    println!();

    if movies.is_empty() {
        output.info("Your collection is empty. Use 'reelvault discover' to find movies to add.");
        return Ok(());
    }

    print_history_table(&history);
    println!();

    if genres.is_empty() {
        println!("{}", "Top Genres: no genre data yet".bright_black());
    } else {
        print_genres_table(&genres);
    }
    println!();

    print_distribution_table(&distribution);
    println!();

    Ok(())
}

fn print_summary_table(summary: &CollectionSummary) {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Collection Summary")
        .fg(comfy_table::Color::Cyan)
        .add_attribute(comfy_table::Attribute::Bold)]);
    table.add_row(vec![
        Cell::new("Total Movies"),
        Cell::new(summary.total.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Wishlist"),
        Cell::new(summary.status_counts.wishlist.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Owned"),
        Cell::new(summary.status_counts.owned.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Watched"),
        Cell::new(summary.status_counts.watched.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Watched This Year"),
        Cell::new(summary.watched_this_year.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Total Value"),
        Cell::new(format_currency(summary.total_value)),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
}

fn print_history_table(history: &[MonthBucket]) {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Watch History (Last 12 Months)")
        .fg(comfy_table::Color::Cyan)
        .add_attribute(comfy_table::Attribute::Bold)]);
    for bucket in history {
        table.add_row(vec![
            Cell::new(bucket.label()),
            Cell::new(bucket.count.to_string()),
            Cell::new(history_bar(bucket.count)),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
}

fn print_genres_table(genres: &[GenreCount]) {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Top Genres")
        .fg(comfy_table::Color::Cyan)
        .add_attribute(comfy_table::Attribute::Bold)]);
    for genre in genres {
        table.add_row(vec![
            Cell::new(&genre.name),
            Cell::new(genre.count.to_string()),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
}

fn print_distribution_table(distribution: &[StatusSlice]) {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Status Breakdown")
        .fg(comfy_table::Color::Cyan)
        .add_attribute(comfy_table::Attribute::Bold)]);
    for slice in distribution {
        let color = match slice.status {
            MovieStatus::Wishlist => comfy_table::Color::Yellow,
            MovieStatus::Owned => comfy_table::Color::Green,
            MovieStatus::Watched => comfy_table::Color::Cyan,
        };
        table.add_row(vec![
            Cell::new(&slice.label).fg(color),
            Cell::new(slice.count.to_string()),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
}

// Capped so one binge month cannot blow out the column width
fn history_bar(count: usize) -> String {
    "█".repeat(count.min(30))
}
