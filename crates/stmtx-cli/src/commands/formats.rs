//! Formats command - list supported statement formats.

use clap::Args;
use console::style;

use stmtx_core::formats;

/// Arguments for the formats command.
#[derive(Args)]
pub struct FormatsArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: FormatsArgs) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&formats::infos())?);
        return Ok(());
    }

    println!("{}", style("Supported statement formats:").bold());
    println!();

    for format in formats::all() {
        println!(
            "  {:<22} {:<18} {}",
            style(format.id).cyan(),
            format.bank,
            format.kind
        );
    }

    println!();
    println!("Use: stmtx convert <file> --format <id>");

    Ok(())
}
