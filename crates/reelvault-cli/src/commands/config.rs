use super::prompts;
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_collection_config::{Config, CredentialStore, PathManager};
use serde_json::json;

pub async fn run_config(cmd: crate::ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(output).await,
        crate::ConfigCommands::Token { token } => set_token(token, output).await,
        crate::ConfigCommands::Language { language } => set_language(language, output).await,
    }
}

async fn show_config(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    let config = Config::load_or_default(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    let mut credentials = CredentialStore::new(path_manager.credentials_file());
    credentials
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load credentials: {}", e))?;
    let token = credentials.get_tmdb_token().cloned().unwrap_or_default();

    match output.format() {
        crate::output::OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            // Config file location
            let mut info_table = Table::new();
            info_table.set_header(vec![
                Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
                Cell::new(config_file.display().to_string()),
            ]);
            info_table.load_preset(comfy_table::presets::UTF8_FULL);
            info_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", info_table);
            println!();

            let mut settings_table = Table::new();
            settings_table.set_header(vec![Cell::new("ReelVault Configuration")
                .fg(comfy_table::Color::Cyan)
                .add_attribute(comfy_table::Attribute::Bold)]);
            settings_table.add_row(vec![
                Cell::new("Catalog Language"),
                Cell::new(&config.language),
            ]);
            settings_table.add_row(vec![
                Cell::new("Top Genres Limit"),
                Cell::new(config.top_genres_limit.to_string()),
            ]);
            settings_table.add_row(vec![
                Cell::new("TMDB Token"),
                Cell::new(mask_string(&token)),
            ]);
            settings_table.load_preset(comfy_table::presets::UTF8_FULL);
            settings_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", settings_table);
        }
        crate::output::OutputFormat::Json | crate::output::OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "language": config.language,
                "top_genres_limit": config.top_genres_limit,
                "tmdb_token": mask_string(&token),
            }));
        }
    }

    Ok(())
}

async fn set_token(token_arg: Option<String>, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create configuration directories: {}", e))?;

    let token = match token_arg {
        Some(token) => token,
        None => prompts::prompt_password("TMDB API Read Access Token")?,
    };
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(color_eyre::eyre::eyre!("Token cannot be empty"));
    }

    let mut credentials = CredentialStore::new(path_manager.credentials_file());
    credentials
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load credentials: {}", e))?;
    credentials.set_tmdb_token(token);
    credentials
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save credentials: {}", e))?;

    output.success("TMDB token saved");

    Ok(())
}

async fn set_language(language_arg: Option<String>, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create configuration directories: {}", e))?;

    let config_file = path_manager.config_file();
    let mut config = Config::load_or_default(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    let language = match language_arg {
        Some(language) => {
            let language = language.trim().to_string();
            validate_language_tag(&language)
                .map_err(|e| color_eyre::eyre::eyre!("Invalid language tag: {}", e))?;
            language
        }
        None => loop {
            let input =
                prompts::prompt_string("Catalog language (BCP 47 tag)", Some(&config.language))?;
            let input = input.trim().to_string();
            match validate_language_tag(&input) {
                Ok(()) => break input,
                Err(e) => {
                    output.error(&format!("Validation error: {}", e));
                    output.info("Use a tag like en-US, de-DE, or fr");
                    continue;
                }
            }
        },
    };
    config.language = language;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Invalid configuration: {}", e))?;
    config
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    output.success(&format!("Catalog language set to {}", config.language));

    Ok(())
}

/// Validates a BCP 47 language tag like "en-US"
fn validate_language_tag(input: &str) -> Result<(), &'static str> {
    if input.is_empty() {
        return Err("Language cannot be empty");
    }
    let primary = input.split('-').next().unwrap_or("");
    if primary.len() < 2 || primary.len() > 3 || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err("Language should be a tag like en-US or de");
    }
    Ok(())
}

fn mask_string(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    if s.len() <= 4 {
        return "*".repeat(s.len());
    }
    format!("{}***{}", &s[..2], &s[s.len() - 2..])
}
