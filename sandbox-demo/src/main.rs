mod config;
mod event_loop;
mod page;
mod paths;
mod terminal;

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{error, info};
use simplelog::{Config, WriteLogger};

use config::DemoConfig;
use page::DemoPage;

#[derive(Parser, Debug)]
#[command(
    name = "sandbox-demo",
    version,
    about = "Interactive demo and component docs for the sandbox widget kit"
)]
struct Cli {
    /// Read settings from this JSON file instead of the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the search debounce delay (milliseconds)
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the demo page (default)
    Run,
    /// Print the component documentation
    Stories {
        /// Only show stories of this component
        component: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = DemoConfig::load(cli.config.as_deref())?;
    if let Some(ms) = cli.debounce_ms {
        config.debounce_ms = ms;
    }

    let log_file = File::create(&config.log_file)
        .with_context(|| format!("failed to create log file {}", config.log_file.display()))?;
    WriteLogger::init(config.level_filter()?, Config::default(), log_file)
        .context("failed to initialize logger")?;
    info!("Loaded config: {:?}", config);

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => event_loop::run(DemoPage::new(&config)).await,
        Command::Stories { component } => {
            print_stories(component.as_deref());
            Ok(())
        }
    }
}

fn print_stories(component: Option<&str>) {
    for story in sandbox::stories::stories() {
        if component.is_some_and(|c| !c.eq_ignore_ascii_case(story.component)) {
            continue;
        }
        for line in story.framed() {
            println!("{}", line.text);
        }
        println!("{}\n", story.description);
    }
}
