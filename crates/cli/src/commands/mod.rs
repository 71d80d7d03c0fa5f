use std::{path::PathBuf, process::Termination};

use anyhow::bail;
use ivg_strutture::{Catalog, DEFAULT_DATASET_PATH, LoadState};

use crate::render;

pub mod browse;
pub mod provinces;
pub mod show;

#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    FaultOrArgsError = 1,
    RequestUnsatisfied = 2,
}

impl Termination for ExitCode {
    fn report(self) -> std::process::ExitCode {
        std::process::ExitCode::from(self as u8)
    }
}

#[derive(clap::Args)]
pub struct DataSource {
    /// Path of the JSON facility dataset
    #[arg(long, global = true, default_value = DEFAULT_DATASET_PATH)]
    pub data: PathBuf,

    /// Fail when the dataset cannot be loaded instead of showing no data
    #[arg(long, global = true)]
    pub strict: bool,
}

impl DataSource {
    /// Runs the startup load, showing the loading indicator meanwhile.
    pub async fn load(&self) -> anyhow::Result<Catalog> {
        let mut state = LoadState::default();
        render::loading(&mut std::io::stderr())?;
        let catalog = state.finish(Catalog::load(&self.data).await).clone();

        if self.strict {
            if let Some(failure) = catalog.load_failure() {
                bail!("Failed to load data: {}", failure);
            }
        }
        Ok(catalog)
    }
}
