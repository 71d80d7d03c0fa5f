use std::io::Write;

use ivg_strutture::Selection;

use super::{DataSource, ExitCode};
use crate::render;

#[derive(clap::Args)]
pub struct Args {
    /// Prints the province list in JSON format
    #[arg(long)]
    json: bool,
}

pub async fn main(source: &DataSource, args: Args) -> anyhow::Result<ExitCode> {
    let catalog = source.load().await?;
    let mut out = std::io::stdout().lock();

    if args.json {
        writeln!(out, "{}", serde_json::to_string(catalog.provinces())?)?;
    } else {
        render::province_options(&mut out, catalog.provinces(), &Selection::None, false)?;
    }
    Ok(ExitCode::Ok)
}
