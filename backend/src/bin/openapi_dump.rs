//! Print the OpenAPI document as JSON.

use clap::Parser;
use color_eyre::eyre::Result;
use userlab::doc::ApiDoc;
use utoipa::OpenApi;

/// Dump the userlab OpenAPI document to stdout.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", version)]
struct Args {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let json = if args.pretty {
        doc.to_pretty_json()?
    } else {
        doc.to_json()?
    };
    println!("{json}");
    Ok(())
}
