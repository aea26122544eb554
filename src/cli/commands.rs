//! Command implementations for the chuva processor CLI
//!
//! Contains logging setup, workspace loading with progress reporting,
//! the non-interactive report command and the interactive exploration
//! session. The session is deliberately thin: it prompts, delegates to
//! the aggregation services and renders whatever table comes back.

use std::time::{Duration, Instant};

use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::models::{Season, ViewKind};
use crate::app::services::aggregation::{
    annual_totals, rain_day_tables, seasonal_mean, seasonal_sum,
};
use crate::app::services::loader::{self, LoadResult, StationData};
use crate::cli::args::{Args, Commands, SessionArgs};
use crate::cli::input::{self, StationChoice};
use crate::cli::render;
use crate::{Error, Result};

/// Main command dispatcher
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Report(session)) => run_report(session).await,
        Some(Commands::Explore(session)) => run_explore(session).await,
        None => Err(Error::configuration("no subcommand provided")),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(session: &SessionArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chuva_processor={}", session.log_level)));

    if session.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", session.log_level);
    Ok(())
}

/// Load the workspace with a spinner while parsing runs
async fn load_with_progress(session: &SessionArgs) -> Result<LoadResult> {
    let config = session.to_config();

    let progress = if !session.quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!(
            "Loading station files from {}...",
            config.workspace.display()
        ));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = loader::load_workspace(&config).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    result
}

/// Non-interactive workspace summary
async fn run_report(session: SessionArgs) -> Result<()> {
    setup_logging(&session)?;
    session.validate()?;

    let start_time = Instant::now();
    info!("Starting workspace report for {}", session.workspace.display());

    let result = load_with_progress(&session).await?;

    render::print_load_summary(&result);
    if !session.quiet {
        println!(
            "\nDone in {}",
            HumanDuration(start_time.elapsed()).to_string().bold()
        );
    }

    Ok(())
}

/// Interactive exploration session.
///
/// Invalid selections are reported and re-prompted; only I/O failures on
/// the terminal itself end the session with an error.
async fn run_explore(session: SessionArgs) -> Result<()> {
    setup_logging(&session)?;
    session.validate()?;

    let result = load_with_progress(&session).await?;

    if !session.quiet && result.stats.files_failed > 0 {
        println!(
            "{}",
            format!(
                "Warning: {} station file(s) could not be loaded and were skipped",
                result.stats.files_failed
            )
            .yellow()
        );
    }

    render::print_station_menu(&result.stations);

    loop {
        let line = input::prompt("\nEscolha uma estação pelo número (ou 0 para sair): ")?;
        let index = match input::parse_station_choice(&line, result.stations.len()) {
            Ok(StationChoice::Exit) => break,
            Ok(StationChoice::Station(index)) => index,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        let data = &result.stations[index];
        info!("Selected station '{}'", data.station.name);

        render::print_view_menu();
        let line = input::prompt("Escolha uma opção: ")?;
        let choice = match input::parse_view_choice(&line) {
            Ok(Some(choice)) => choice,
            Ok(None) => break,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        let view = match ViewKind::from_choice(choice) {
            Ok(view) => view,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        // Views are computed per request and discarded after rendering
        let outcome = match view {
            ViewKind::MonthlyAccumulated => {
                render::print_monthly_table(data);
                Ok(())
            }
            ViewKind::AnnualComparison => {
                let rows = annual_totals(&data.table);
                render::print_annual_table(data, &rows);
                Ok(())
            }
            ViewKind::SeasonalMean => show_seasonal(data, SeasonalStat::Mean),
            ViewKind::SeasonalSum => show_seasonal(data, SeasonalStat::Sum),
            ViewKind::RainDaysByStationYear => show_rain_days(&result, &data.station.name),
        };

        if let Err(e) = outcome {
            if e.is_user_recoverable() {
                println!("{}", e.to_string().red());
            } else {
                return Err(e);
            }
        }
    }

    Ok(())
}

/// Which seasonal statistic to render
#[derive(Debug, Clone, Copy)]
enum SeasonalStat {
    Mean,
    Sum,
}

/// Prompt for a season and render the seasonal view
fn show_seasonal(data: &StationData, stat: SeasonalStat) -> Result<()> {
    render::print_season_menu();
    let line = input::prompt("Digite o número da estação do ano escolhida: ")?;
    let season = Season::from_input(&line)?;

    match stat {
        SeasonalStat::Mean => {
            let rows = seasonal_mean(&data.table, season);
            render::print_seasonal_table(data, season.name, "Médias", &rows);
        }
        SeasonalStat::Sum => {
            let rows = seasonal_sum(&data.table, season);
            render::print_seasonal_table(data, season.name, "Acumulados", &rows);
        }
    }

    Ok(())
}

/// Prompt for a year and render the rain-day view for one station.
///
/// The rain-day tables span every loaded station; the rendering step
/// filters down to the selected one afterwards.
fn show_rain_days(result: &LoadResult, station: &str) -> Result<()> {
    let line = input::prompt("Digite o ano desejado: ")?;
    let year = input::parse_year(&line)?;

    let tables = rain_day_tables(&result.stations);
    render::print_rain_days(station, year, &tables.monthly_for(station, year));

    Ok(())
}
