use chuva_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Chuva Processor - ANA Rainfall Data Aggregator");
    println!("==============================================");
    println!();
    println!("Aggregate ANA 'Chuvas' station CSV exports into monthly, annual and");
    println!("seasonal precipitation series for interactive exploration.");
    println!();
    println!("USAGE:");
    println!("    chuva-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    explore     Interactively explore stations and aggregate views");
    println!("    report      Print a non-interactive summary of the workspace");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Explore the default workspace (./dados_chuvaANA):");
    println!("    chuva-processor explore");
    println!();
    println!("    # Summarize a specific workspace:");
    println!("    chuva-processor report --workspace /data/chuvas");
    println!();
    println!("For detailed help on any command, use:");
    println!("    chuva-processor <COMMAND> --help");
}
