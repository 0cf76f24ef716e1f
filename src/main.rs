mod data;
mod model;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use chrono::Local;
use clap::Parser;

use data::DataClient;
use model::MatchPrediction;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the prediction feed (JSON)
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    feed: Option<String>,

    /// Read predictions from a local JSON file instead of a feed URL
    #[arg(long)]
    file: Option<PathBuf>,

    /// Write the rendered page here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Re-fetch and re-render every N seconds (0 renders once and exits)
    #[arg(short, long, default_value_t = 0)]
    interval: u64,

    /// Only render the next N matches
    #[arg(short, long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let client = DataClient::new();

    loop {
        match render_once(&client, &args).await {
            Ok(count) => log::info!(
                "rendered {} cards at {}",
                count,
                Local::now().format("%H:%M:%S")
            ),
            Err(err) => {
                // One-shot runs fail hard; a refresh loop rides out bad passes.
                if args.interval == 0 {
                    return Err(err);
                }
                log::warn!("render pass failed: {err:#}");
            }
        }

        if args.interval == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_secs(args.interval)).await;
    }

    Ok(())
}

async fn render_once(client: &DataClient, args: &Args) -> Result<usize> {
    let mut matches: Vec<MatchPrediction> = if let Some(path) = &args.file {
        data::load_predictions(path)?
    } else if let Some(url) = &args.feed {
        client.fetch_predictions(url).await?
    } else {
        bail!("either --feed or --file is required");
    };

    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    let page = render::render_page(&matches)?;

    match &args.out {
        Some(path) => std::fs::write(path, &page)?,
        None => print!("{page}"),
    }

    Ok(matches.len())
}
