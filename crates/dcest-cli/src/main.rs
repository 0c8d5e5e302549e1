use clap::Parser;
use clap_complete::{generate, Shell};
use std::fs;
use std::io;
use std::path::Path;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

use dcest_cli::cli::{build_cli_command, Cli, Commands};

mod commands;

fn generate_completions(shell: Shell, out: Option<&Path>) -> anyhow::Result<()> {
    let mut cmd = build_cli_command();
    if let Some(path) = out {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = fs::File::create(path)?;
        generate(shell, &mut cmd, "dcest", &mut file);
        println!("Wrote {shell:?} completion to {}", path.display());
    } else {
        let stdout = &mut io::stdout();
        generate(shell, &mut cmd, "dcest", stdout);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for piped table/JSON output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let result = match &cli.command {
        Commands::Buses {
            config,
            format,
            out,
        } => commands::buses::handle(config.as_deref(), *format, out.as_deref()),
        Commands::Cost {
            config,
            format,
            out,
        } => commands::cost::handle(config.as_deref(), *format, out.as_deref()),
        Commands::Template { kind, out } => commands::template::handle(*kind, out.as_deref()),
        Commands::Completions { shell, out } => generate_completions(*shell, out.as_deref()),
    };

    if let Err(err) = result {
        error!("Command failed: {err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
