use std::{fs::File, io::BufReader};

use clap::Parser;

use settings::{AppConfig, Args, OutputFormat};

mod error;
mod input;
mod report;
mod settings;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let settings = settings::load(&args)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "pozo={level},engine={level}",
            level = settings.level
        ))
        .with_writer(std::io::stderr)
        .init();

    run(&args, &settings)?;
    Ok(())
}

fn run(args: &Args, settings: &AppConfig) -> error::Result<()> {
    let csv = match &args.input {
        Some(path) => {
            tracing::info!("reading contributions from {}", path.display());
            Some(BufReader::new(File::open(path)?))
        }
        None => None,
    };
    let roster = input::build_roster(csv, &args.add)?;

    let settlement = engine::settle_participants(roster.participants());
    tracing::info!(
        participants = roster.len(),
        transfers = settlement.debts.len(),
        "pool settled"
    );

    let output = match settings.format {
        OutputFormat::Text => {
            report::render_text(roster.participants(), &settlement, &settings.currency_symbol)
        }
        OutputFormat::Json => report::render_json(&settlement)?,
    };
    print!("{output}");
    Ok(())
}
