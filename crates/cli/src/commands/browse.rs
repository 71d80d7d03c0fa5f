use std::io::Write;

use ivg_strutture::{ProvinceView, Selection, SelectionError};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{DataSource, ExitCode};
use crate::render;

const QUIT: &str = "q";

#[derive(clap::Args)]
pub struct Args {
    /// Start with this province already selected
    #[arg(short, long)]
    province: Option<String>,
}

/// Applies one line of user input: a position in the list, a province name,
/// or a blank line for the placeholder.
fn apply_input(view: &mut ProvinceView, input: &str) -> Result<(), SelectionError> {
    match input.trim().parse::<usize>() {
        Ok(index) => view.select_index(index),
        Err(_) => view.select(Selection::resolve(input, view.provinces())),
    }
}

fn redraw(view: &ProvinceView) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", render::SELECT_PROMPT)?;
    render::province_options(&mut out, view.provinces(), view.selection(), true)?;
    writeln!(out)?;
    render::content(&mut out, &view.content())?;
    write!(out, "> ")?;
    out.flush()
}

pub async fn main(source: &DataSource, args: Args) -> anyhow::Result<ExitCode> {
    let mut view = ProvinceView::new(source.load().await?);
    if let Some(province) = args.province {
        if let Err(err) = view.select(Selection::resolve(&province, view.provinces())) {
            eprintln!("{}", err);
            return Ok(ExitCode::FaultOrArgsError);
        }
    }

    render::header(&mut std::io::stdout().lock())?;
    redraw(&view)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == QUIT {
            break;
        }
        if let Err(err) = apply_input(&mut view, &line) {
            eprintln!("{}", err);
        }
        redraw(&view)?;
    }
    println!();
    Ok(ExitCode::Ok)
}
