use std::{collections::BTreeSet, path::Path, sync::Arc};

use anyhow::Context;
use log::{debug, error};

use crate::FacilityRecord;

/// Location of the dataset when none is given on the command line.
pub const DEFAULT_DATASET_PATH: &str = "ivg_dati.json";

/// The full, immutable list of facility records in dataset order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[FacilityRecord]>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<FacilityRecord>) -> Self {
        Dataset {
            records: records.into(),
        }
    }

    /// Parses a JSON document whose root is an array of facility objects.
    pub fn parse(body: &str) -> anyhow::Result<Self> {
        let records: Vec<FacilityRecord> =
            serde_json::from_str(body).context("Parsing facility dataset")?;
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Distinct province names present in the dataset, in plain code point
/// order. Records without a province do not contribute an entry.
pub fn province_list(dataset: &Dataset) -> Vec<String> {
    dataset
        .records()
        .iter()
        .filter_map(|record| record.province.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub async fn load_dataset(path: impl AsRef<Path>) -> anyhow::Result<Dataset> {
    let path = path.as_ref();
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Reading dataset file {}", path.display()))?;
    let dataset =
        Dataset::parse(&body).with_context(|| format!("Loading dataset {}", path.display()))?;
    debug!(
        "Loaded {} facility records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// State reached once the startup load has completed, successfully or not.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dataset: Dataset,
    provinces: Vec<String>,
    load_failure: Option<String>,
}

impl Catalog {
    pub fn new(dataset: Dataset) -> Self {
        let provinces = province_list(&dataset);
        Catalog {
            dataset,
            provinces,
            load_failure: None,
        }
    }

    /// Reads the dataset at `path`. A failed read or parse is logged and
    /// yields an empty catalog; the failure message stays available through
    /// [`Catalog::load_failure`].
    pub async fn load(path: impl AsRef<Path>) -> Self {
        match load_dataset(path).await {
            Ok(dataset) => Self::new(dataset),
            Err(err) => {
                error!("Failed to load facility data: {:#}", err);
                Catalog {
                    load_failure: Some(format!("{:#}", err)),
                    ..Default::default()
                }
            }
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn provinces(&self) -> &[String] {
        &self.provinces
    }

    pub fn load_failure(&self) -> Option<&str> {
        self.load_failure.as_deref()
    }
}

/// Startup lifecycle: loading until the first catalog arrives, then ready
/// for good.
#[derive(Debug, Default)]
pub struct LoadState {
    ready: Option<Catalog>,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        self.ready.is_none()
    }

    /// Completes the load and returns the ready catalog. Once ready the
    /// state never changes, so a second completion is ignored.
    pub fn finish(&mut self, catalog: Catalog) -> &Catalog {
        self.ready.get_or_insert(catalog)
    }
}
