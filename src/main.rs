// ===== phigauge/src/main.rs =====
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use phigauge::config::ScoringParams;
use phigauge::scorer::Scorer;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Measure how close a selected image region is to the golden ratio", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring parameters (explicit flags still win).
    #[arg(global = true, long)]
    params: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single selection.
    Measure(cmd::measure::MeasureArgs),
    /// Score every selection listed in a CSV file.
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    // Raw matches let us tell user-typed flags from clap defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cli_params = match &cli.command {
        Commands::Measure(args) => &args.params,
        Commands::Batch(args) => &args.params,
    };

    let params = match &cli.params {
        Some(path) => {
            info!("⚖️  Loading scoring params from: {}", path);
            let mut file_params = ScoringParams::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            if let Some((_, sub_matches)) = matches.subcommand() {
                file_params.merge_from_cli(cli_params, sub_matches);
            }
            file_params
        }
        None => {
            if *cli_params != ScoringParams::default() {
                warn!("⚠️  Using non-default scoring parameters: {:?}", cli_params);
            }
            cli_params.clone()
        }
    };

    let scorer = match Scorer::new(params) {
        Ok(s) => s,
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING SCORER: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Measure(args) => cmd::measure::run(args, scorer),
        Commands::Batch(args) => cmd::batch::run(args, &scorer),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
