use crate::reports;
use clap::Args;
use phigauge::batch;
use phigauge::config::ScoringParams;
use phigauge::error::PgResult;
use phigauge::scorer::Scorer;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub params: ScoringParams,

    /// CSV with header: label,x_start,y_start,x_end,y_end
    #[arg(short, long)]
    pub input: PathBuf,

    /// Rank rows by score instead of keeping file order.
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: BatchArgs, scorer: &Scorer) -> PgResult<()> {
    let mut entries = batch::run_file(&args.input, scorer)?;
    info!("🔎 Scored {} selections", entries.len());

    if args.sort {
        batch::rank(&mut entries);
    }

    if args.json {
        let values = entries
            .iter()
            .map(|e| e.to_json_value())
            .collect::<PgResult<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        reports::print_batch_report(&entries);
    }
    Ok(())
}
