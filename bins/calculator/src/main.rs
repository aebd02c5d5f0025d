//! flipcalc terminal calculator
//!
//! Renders the profitability report, then reads one command per line from
//! stdin. Every edit updates the state, recomputes all figures and renders
//! again.

mod command;
mod render;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command::Command;
use flipcalc_core::{FinancialState, Report, derive};
use flipcalc_shared::{AppConfig, AppError, OutputFormat};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flipcalc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let format = config.display.format;

    let mut state = FinancialState::from_seed(&config.seed)
        .map_err(AppError::from)
        .context("Invalid seed ledger")?;
    command::check_ids(state.expenses()).context("Invalid seed ledger")?;
    info!(
        expenses = state.expenses().len(),
        property_amount = %state.property_amount(),
        commercial_price = %state.commercial_price(),
        "Calculator ready"
    );

    let mut out = io::stdout().lock();
    show(&mut out, &state, format)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;

        match command::parse(&line, state.expenses()) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => {
                out.write_all(command::help(state.expenses()).as_bytes())?;
                out.flush()?;
            }
            Ok(Some(Command::Show)) => show(&mut out, &state, format)?,
            Ok(Some(Command::Edit(edit))) => {
                debug!(?edit, "Applying edit");
                state.apply(edit);
                show(&mut out, &state, format)?;
            }
            Err(err) => eprintln!("{err}. Escribe `ayuda` para ver los comandos."),
        }
    }

    Ok(())
}

/// Recomputes every figure from `state` and writes it out.
fn show(out: &mut impl Write, state: &FinancialState, format: OutputFormat) -> anyhow::Result<()> {
    let figures = derive(state);

    let rendered = match format {
        OutputFormat::Table => render::table(&Report::build(state, &figures)),
        OutputFormat::Json => render::json(&figures).context("Failed to serialize figures")?,
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
