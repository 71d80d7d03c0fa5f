use std::io::Write;

use ivg_strutture::{FacilityRecord, Selection, ViewContent};
use serde::Serialize;

use super::{DataSource, ExitCode};
use crate::render;

#[derive(clap::Args)]
pub struct Args {
    /// Province whose facilities are shown. Without it nothing is shown.
    #[arg(short, long)]
    pub province: Option<String>,

    /// Prints the facilities in JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
pub struct ProvinceFacilities<'a> {
    #[serde(rename = "provincia")]
    province: &'a str,
    #[serde(rename = "strutture")]
    facilities: &'a [&'a FacilityRecord],
}

pub async fn main(source: &DataSource, args: Args) -> anyhow::Result<ExitCode> {
    let catalog = source.load().await?;
    let selection = Selection::resolve(
        args.province.as_deref().unwrap_or_default(),
        catalog.provinces(),
    );
    let content = ViewContent::for_selection(catalog.dataset(), &selection);

    let mut out = std::io::stdout().lock();
    if args.json {
        if let Some(province) = selection.province() {
            let facilities = match &content {
                ViewContent::Facilities(records) => records.as_slice(),
                _ => &[],
            };
            writeln!(
                out,
                "{}",
                serde_json::to_string(&ProvinceFacilities {
                    province,
                    facilities,
                })?
            )?;
        }
    } else {
        render::content(&mut out, &content)?;
    }

    Ok(match content {
        ViewContent::NotFound => ExitCode::RequestUnsatisfied,
        _ => ExitCode::Ok,
    })
}
