use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pathsh::{LineReader, Shell};
use pathsh_cli::terminal::{ConsoleWriter, StdioReader};
use pathsh_cli::{Catalog, CatalogClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pathsh",
    version,
    about = "Interactive shell over a hierarchical command catalog"
)]
struct Cli {
    #[arg(long, help = "Catalog JSON file (defaults to the built-in demo catalog)")]
    catalog: Option<PathBuf>,
    #[arg(long, help = "Prompt template; %PATH% is replaced by the current path")]
    prompt: Option<String>,
    #[arg(long, default_value = "warn", help = "Log filter when RUST_LOG is unset")]
    log_level: String,
    #[arg(long, help = "Print every reachable command and exit")]
    list: bool,
    #[arg(long, help = "Plain line input and unstyled output")]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::demo().context("loading demo catalog")?,
    };

    let mut config = catalog.shell.clone();
    if let Some(prompt) = cli.prompt {
        config = config.with_prompt(prompt);
    }

    let client = CatalogClient::new(&catalog, io::stdout())?;
    let mut shell = Shell::new(client, config);
    shell
        .set_commands(&catalog.patterns)
        .context("registering catalog patterns")?;

    if cli.list {
        for command in shell.available_commands()? {
            println!("{}", command);
        }
        return Ok(());
    }

    let interactive = io::stdin().is_terminal() && !cli.plain;
    let mut writer = ConsoleWriter::detect(io::stdout(), cli.plain);
    let mut reader = line_reader(interactive)?;

    let exit = shell.run(reader.as_mut(), &mut writer)?;
    tracing::debug!(?exit, "exiting");
    Ok(())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "readline")]
fn line_reader(interactive: bool) -> anyhow::Result<Box<dyn LineReader>> {
    if interactive {
        let editor = pathsh_cli::terminal::EditorReader::new().context("starting line editor")?;
        return Ok(Box::new(editor));
    }
    Ok(Box::new(StdioReader::new(io::stdin().lock(), io::stdout())))
}

#[cfg(not(feature = "readline"))]
fn line_reader(_interactive: bool) -> anyhow::Result<Box<dyn LineReader>> {
    Ok(Box::new(StdioReader::new(io::stdin().lock(), io::stdout())))
}
