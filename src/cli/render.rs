//! Plain-text rendering of menus and result tables
//!
//! Thin presentation glue: every function takes a computed table and
//! prints it as aligned columns. Nothing here is persisted; tables are
//! rendered and discarded.

use colored::Colorize;

use crate::app::models::{AnnualRow, RainDayMonthlyRow, SeasonalRow, ViewKind};
use crate::app::services::loader::{LoadResult, StationData};
use crate::constants::SEASONS;

/// Width of one numeric value column
const VALUE_WIDTH: usize = 12;

/// Stations shown per menu line
const STATIONS_PER_LINE: usize = 4;

/// Print the numbered station menu, several stations per line
pub fn print_station_menu(stations: &[StationData]) {
    println!("\n{}", "Estações disponíveis:".bold());
    for (line_start, chunk) in stations.chunks(STATIONS_PER_LINE).enumerate() {
        let line: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(offset, data)| {
                format!(
                    "{}. {}",
                    line_start * STATIONS_PER_LINE + offset + 1,
                    data.station.name
                )
            })
            .collect();
        println!("{}", line.join(" | "));
    }
}

/// Print the numbered view menu
pub fn print_view_menu() {
    println!("\n{}", "Opções de visualização:".bold());
    for (i, view) in ViewKind::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, view.label());
    }
}

/// Print the numbered season menu
pub fn print_season_menu() {
    println!("\n{}", "Selecione uma estação do ano:".bold());
    for (i, season) in SEASONS.iter().enumerate() {
        println!("{}. {}", i + 1, season.name);
    }
}

/// Render a station's monthly accumulated table
pub fn print_monthly_table(data: &StationData) {
    println!(
        "\n{} {}",
        "Acumulado mensal de precipitação -".bold(),
        data.station.name.bold()
    );

    print_header("Mês/Ano", &data.table.columns);
    for row in &data.table.rows {
        print_values(&row.month.label(), &row.totals);
    }
    println!("({} meses)", data.table.rows.len());
}

/// Render the annual comparison table
pub fn print_annual_table(data: &StationData, rows: &[AnnualRow]) {
    println!(
        "\n{} {}",
        "Acumulado anual de precipitação -".bold(),
        data.station.name.bold()
    );

    print_header("Ano", &data.table.columns);
    for row in rows {
        print_values(&row.year.to_string(), &row.totals);
    }
}

/// Render a seasonal table; `value_label` distinguishes mean from sum
pub fn print_seasonal_table(
    data: &StationData,
    season_name: &str,
    value_label: &str,
    rows: &[SeasonalRow],
) {
    println!(
        "\n{} {} - {}",
        value_label.bold(),
        format!("de precipitação na estação {}", season_name).bold(),
        data.station.name.bold()
    );

    print_header("Ano", &data.table.columns);
    for row in rows {
        print_values(&row.year.to_string(), &row.values);
    }
}

/// Render monthly rain days for one station and year
pub fn print_rain_days(station: &str, year: i32, rows: &[&RainDayMonthlyRow]) {
    if rows.is_empty() {
        println!("Nenhum dado disponível para o ano {}.", year);
        return;
    }

    println!(
        "\n{}",
        format!("Dias de chuva mensais - {} - Ano {}", station, year).bold()
    );

    println!("{:<10} {:>width$}", "Mês/Ano", "DiasChuva", width = VALUE_WIDTH);
    for row in rows {
        println!(
            "{:<10} {:>width$.0}",
            row.month.label(),
            row.rain_days,
            width = VALUE_WIDTH
        );
    }
}

/// Render the batch loading summary
pub fn print_load_summary(result: &LoadResult) {
    println!("\n{}", "Workspace summary".bold());
    println!("  Station files discovered: {}", result.stats.files_discovered);
    println!(
        "  Loaded: {}",
        result.stats.files_loaded.to_string().green()
    );
    if result.stats.files_failed > 0 {
        println!(
            "  Failed: {}",
            result.stats.files_failed.to_string().red()
        );
        for failure in &result.stats.failures {
            println!("    {}", failure.red());
        }
    }

    println!("\n{}", "Stations".bold());
    for data in &result.stations {
        println!(
            "  {:<12} {:>4} monthly rows, {}/{} records aggregated, columns: {}",
            data.station.name.green(),
            data.table.rows.len(),
            data.stats.records_aggregated,
            data.stats.total_records,
            data.table.columns.join(", ")
        );
    }
}

fn print_header(key_label: &str, columns: &[String]) {
    let mut header = format!("{:<10}", key_label);
    for column in columns {
        header.push_str(&format!(" {:>width$}", column, width = VALUE_WIDTH));
    }
    println!("{}", header);
}

fn print_values(key: &str, values: &[f64]) {
    let mut line = format!("{:<10}", key);
    for value in values {
        line.push_str(&format!(" {:>width$.1}", value, width = VALUE_WIDTH));
    }
    println!("{}", line);
}
