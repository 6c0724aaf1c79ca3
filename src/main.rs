use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sitegen::Config;

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Convert Markdown content into a static HTML site")]
struct Cli {
    /// Config file
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and generate every content page
    Build,

    /// Convert one Markdown file to an HTML fragment
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Build => {
            let pages = sitegen::build_site(&config.site, &config.markdown)?;
            println!(
                "Generated {} pages in {}",
                pages,
                config.site.public_dir.display()
            );
        }
        Command::Render { input, output } => {
            let markdown = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let html = sitegen::markdown_to_html_with_options(&markdown, &config.markdown)
                .with_context(|| format!("converting {}", input.display()))?;

            match output {
                Some(output) => {
                    fs::write(&output, html)
                        .with_context(|| format!("writing {}", output.display()))?;
                    println!("Created {}", output.display());
                }
                None => println!("{html}"),
            }
        }
    }

    Ok(())
}
