use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wim_info::{WimInfo, parse_wim_info, parse_wim_info_from_reader};

#[derive(Parser)]
#[command(author, version, about = "Parses wim info output and detects each image's Windows version.")]
struct Args {
    /// File holding the wim info output (reads stdin when omitted)
    path: Option<PathBuf>,

    /// Print the parsed sections as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let info: WimInfo = match &args.path {
        Some(path) => parse_wim_info(path)?,
        None => parse_wim_info_from_reader(std::io::stdin().lock())
            .context("Failed to parse wim info from stdin")?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!(
        "{:<6} | {:<40} | {:<8} | {:<8} | {:<8}",
        "Index", "Name", "Major", "Version", "Arch"
    );
    println!("{:-<82}", "");

    for index in 1..=info.image_count() {
        println!(
            "{:<6} | {:<40} | {:<8} | {:<8} | {:<8}",
            index,
            info.name(index),
            info.major_version(index),
            or_unknown(info.detect_version(index)),
            or_unknown(info.detect_architecture(index)),
        );
    }
    Ok(())
}

fn or_unknown(tag: &str) -> &str {
    if tag.is_empty() { "<unknown>" } else { tag }
}
