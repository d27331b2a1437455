use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use std::{fs, path::PathBuf};

mod site;

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from markdown pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and generate every page into the public folder
    Build {
        /// Prefix for root-relative links, e.g. `/my-repo/`
        base_path: Option<String>,

        /// Config file (defaults to ./sitegen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Markdown content directory
        #[arg(long)]
        content: Option<PathBuf>,

        /// Static assets directory
        #[arg(long = "static")]
        static_dir: Option<PathBuf>,

        /// Output directory (emptied before building)
        #[arg(long)]
        public: Option<PathBuf>,

        /// Page template with {{ Title }} and {{ Content }} placeholders
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Print the HTML fragment of a single markdown file
    Render {
        /// Input markdown file
        input: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Build {
            base_path,
            config,
            content,
            static_dir,
            public,
            template,
        } => {
            let mut config = load_config(config)?;
            if let Some(base_path) = base_path {
                config.base_path = base_path;
            }
            if let Some(content) = content {
                config.content_dir = content;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }
            if let Some(public) = public {
                config.public_dir = public;
            }
            if let Some(template) = template {
                config.template_path = template;
            }
            build(&config)
        }
        Command::Render { input, output } => render(input, output),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.clone().unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if path.is_some() => {
            anyhow::bail!("Config file not found: {}", config_path.display())
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn build(config: &Config) -> Result<()> {
    log::info!("Copying static files from {}", config.static_dir.display());
    site::prepare_public_dir(&config.public_dir)?;
    let copied = site::copy_static(&config.static_dir, &config.public_dir)
        .context("Failed to copy static files")?;
    log::info!("Copied {copied} static files");

    log::info!("Base url: {}", config.base_path);
    let pages = site::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.public_dir,
        &config.base_path,
    )
    .context("Failed to generate pages")?;
    log::info!(
        "Generated {} pages into {}",
        pages.len(),
        config.public_dir.display()
    );
    Ok(())
}

fn render(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let markdown = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let html = markdown_sitegen_engine::markdown_to_html(&markdown)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    match output {
        Some(output) => {
            fs::write(&output, html)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            log::info!("Created {}", output.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}
