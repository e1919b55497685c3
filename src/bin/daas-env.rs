use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use daas_env::{
    api::Alias,
    cli::{
        ConfigClient, Console, commands,
        editor::{default_editor, edit_text, read_text},
    },
    config::Config,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "DAAS_ENV_CONFIG")]
    config: Option<PathBuf>,

    /// Config service base URL, overrides the configuration file.
    #[arg(short, long, env = "DAAS_ENV_URL")]
    url: Option<String>,

    /// More logging; repeat for debug output.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List running containers with their environment.
    List,
    /// Print the environment of one container.
    Show { alias: String },
    /// Replace the environment of a container and save it.
    Edit(EditArgs),
    /// Set variables on a container and save it.
    Set {
        alias: String,
        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },
    /// Remove variables from a container and save it.
    Unset {
        alias: String,
        #[arg(required = true, value_name = "KEY")]
        keys: Vec<String>,
    },
}

#[derive(Args)]
struct EditArgs {
    alias: String,
    /// Read the new environment from a file (`-` for stdin) instead of
    /// opening an editor.
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Editor command, defaults to $VISUAL or $EDITOR.
    #[arg(long, conflicts_with = "file")]
    editor: Option<String>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration from {path:?}"))?,
        None => Config::default(),
    };
    if let Some(url) = &cli.url {
        config.server.url = url.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let client = ConfigClient::new(&config.server)
        .with_context(|| format!("cannot use server {}", config.server.url))?;
    let mut console = Console::start(client);
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::List => commands::list(&console, &mut out)?,
        Commands::Show { alias } => commands::show(&console, &Alias::from(alias), &mut out)?,
        Commands::Edit(args) => {
            let alias = Alias::from(args.alias);
            let text = match args.file {
                Some(file) => read_text(&file)
                    .with_context(|| format!("failed to read {}", file.display()))?,
                None => {
                    let initial = commands::draft_text(&console, &alias)?;
                    let editor = args.editor.unwrap_or_else(default_editor);
                    edit_text(&editor, &initial)?
                }
            };
            commands::edit(&mut console, &alias, &text, &mut out)?
        }
        Commands::Set { alias, assignments } => {
            commands::set(&mut console, &Alias::from(alias), &assignments, &mut out)?
        }
        Commands::Unset { alias, keys } => {
            commands::unset(&mut console, &Alias::from(alias), &keys, &mut out)?
        }
    };
    Ok(())
}
