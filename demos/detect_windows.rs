use clap::Parser;
use tracing_subscriber::EnvFilter;
use wim_info::{detect_windows_architecture, detect_windows_version};

#[derive(Parser)]
#[command(author, version, about = "Maps Windows descriptions to version and architecture tags.")]
struct Args {
    /// One or more descriptions (e.g., "Windows Server 2012 R2 x64")
    #[arg(required = true, num_args = 1..)]
    descriptions: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    println!("{:<40} | {:<8} | {:<8}", "Description", "Version", "Arch");
    println!("{:-<62}", "");

    for desc in &args.descriptions {
        println!(
            "{:<40} | {:<8} | {:<8}",
            desc,
            detect_windows_version(desc),
            detect_windows_architecture(desc)
        );
    }
    Ok(())
}
