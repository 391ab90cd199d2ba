use anyhow::{Context, Result};
use clap::Parser;
use gqlmongo::{compile_json_ast, compile_sdl, Config};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// gqlmongo - compile a Relay GraphQL schema into collection schemas
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Schema file to compile
    #[arg(default_value = "schema.graphql")]
    schema: PathBuf,

    /// JSON configuration file with custom scalar mappings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read the schema as a graphql-js JSON AST instead of SDL
    #[arg(long)]
    json_ast: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Write the output to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Config::default(),
    };

    let input = fs::read_to_string(&cli.schema)
        .with_context(|| format!("Failed to read schema {}", cli.schema.display()))?;

    let collections = if cli.json_ast {
        compile_json_ast(&input, &config)
    } else {
        compile_sdl(&input, &config)
    }
    .with_context(|| format!("Failed to compile {}", cli.schema.display()))?;

    info!(
        "Compiled {} collections from {}",
        collections.len(),
        cli.schema.display()
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&collections)?
    } else {
        serde_json::to_string(&collections)?
    };

    match &cli.output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}

fn main() -> ExitCode {
    // Defaults to WARN, can be overridden with RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
