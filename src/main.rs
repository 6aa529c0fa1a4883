use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

mod app;
mod config;
mod resolver;
mod utils;

use app::{AppState, Session};
use resolver::{LinkResolver, ResolvedMedia};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Video link to resolve
    link: String,

    /// Print the resolved media as JSON
    #[arg(long)]
    json: bool,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<String>,
}

fn get_config_path(args: &Args) -> Option<String> {
    if let Some(path) = &args.config {
        return Some(path.clone());
    }

    if let Ok(path) = std::env::var("CONFIG_FILE") {
        return Some(path);
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        let config_dir = format!("{}/tiksave", xdg_config_home);
        let config_path = format!("{}/config.toml", config_dir);
        if std::path::Path::new(&config_path).exists() {
            return Some(config_path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let config_dir = format!("{}/.config/tiksave", home.display());
        let config_path = format!("{}/config.toml", config_dir);
        if std::path::Path::new(&config_path).exists() {
            return Some(config_path);
        }
    }

    None
}

fn render(media: &ResolvedMedia, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(media)?);
        return Ok(());
    }

    let title = if media.title.is_empty() {
        "(untitled)"
    } else {
        media.title.as_str()
    };

    println!("Title:    {}", title);
    println!(
        "Author:   {} (@{})",
        media.author.nickname, media.author.unique_id
    );
    println!("Duration: {}", utils::format_duration(media.duration));
    if !media.cover.is_empty() {
        println!("Cover:    {}", media.cover);
    }
    println!();
    if !media.play.is_empty() {
        println!("Without watermark: {}", media.play);
    }
    if !media.wmplay.is_empty() {
        println!("With watermark:    {}", media.wmplay);
    }
    if !media.music.is_empty() {
        println!("Audio (MP3):       {}", media.music);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let config = if let Some(config_path) = get_config_path(&args) {
        config::Config::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path))?
    } else {
        config::Config::default()
    };

    if config.get_logging_format() == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    info!("Starting TikSave...");

    let state = AppState::default();
    debug!(?state, "Initial application state");

    let link_resolver = LinkResolver::new(&config.api);
    let mut session = Session::new();

    if let Some(seq) = session.submit(&args.link) {
        let outcome = link_resolver.resolve(session.input()).await;
        session.finish(seq, outcome);
    }

    if let Some(err) = session.error() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    if let Some(media) = session.result() {
        render(media, args.json)?;
    }

    Ok(())
}
