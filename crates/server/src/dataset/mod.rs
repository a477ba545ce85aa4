//! Loading and caching of the case and hearing tables.
//!
//! Both tables are fetched once, parsed into typed rows and kept behind an
//! `Arc` for the rest of the process. Nothing mutates them after load, so
//! every request reads them without locking.

pub mod parse;
pub mod source;

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use shared_types::{Case, Hearing};
use tokio::sync::OnceCell;

pub use parse::{parse_cases, parse_hearings};
pub use source::{DataSource, DatasetSources};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Cases,
    Hearings,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Cases => write!(f, "cases"),
            TableKind::Hearings => write!(f, "hearings"),
        }
    }
}

/// Why a dataset could not be made available.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to fetch {table} from {location}: {source}")]
    Fetch {
        table: TableKind,
        location: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{table} source {location} answered HTTP {status}")]
    Status {
        table: TableKind,
        location: String,
        status: u16,
    },
    #[error("failed to read {table} from {path}: {source}")]
    Read {
        table: TableKind,
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{table} table is missing required column(s): {cols}", cols = .columns.join(", "))]
    MissingColumns {
        table: TableKind,
        columns: Vec<String>,
    },
    #[error("malformed {table} data: {source}")]
    Csv {
        table: TableKind,
        #[source]
        source: csv::Error,
    },
    #[error("no dataset sources configured")]
    NotConfigured,
    #[error("dataset parsing task failed: {0}")]
    Task(String),
}

/// The loaded tables. Immutable once constructed.
#[derive(Debug)]
pub struct DataContext {
    cases: Vec<Case>,
    hearings: Vec<Hearing>,
    loaded_at: DateTime<Utc>,
}

impl DataContext {
    pub fn new(cases: Vec<Case>, hearings: Vec<Hearing>) -> Self {
        Self {
            cases,
            hearings,
            loaded_at: Utc::now(),
        }
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn hearings(&self) -> &[Hearing] {
        &self.hearings
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Fetch and parse both tables.
///
/// The two fetches run concurrently; parsing happens on the blocking pool.
/// Either table failing fails the whole load.
pub async fn load(
    client: &reqwest::Client,
    sources: &DatasetSources,
) -> Result<DataContext, LoadError> {
    let started = Instant::now();
    tracing::info!(
        cases = %sources.cases.location(),
        hearings = %sources.hearings.location(),
        "Loading datasets"
    );

    let (case_bytes, hearing_bytes) = tokio::try_join!(
        sources.cases.fetch(client, TableKind::Cases),
        sources.hearings.fetch(client, TableKind::Hearings),
    )?;

    let (cases, hearings) = tokio::task::spawn_blocking(move || {
        let cases = parse_cases(&case_bytes)?;
        let hearings = parse_hearings(&hearing_bytes)?;
        Ok::<_, LoadError>((cases, hearings))
    })
    .await
    .map_err(|e| LoadError::Task(e.to_string()))??;

    tracing::info!(
        cases = cases.len(),
        hearings = hearings.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Datasets loaded"
    );

    Ok(DataContext::new(cases, hearings))
}

#[derive(Debug)]
struct Loader {
    client: reqwest::Client,
    sources: DatasetSources,
}

/// Process-wide cache of the loaded tables.
///
/// The first successful [`DatasetCache::get`] populates the cache and every
/// later call returns the same `Arc`. A failed load leaves the cache empty,
/// so the next request tries again.
#[derive(Debug)]
pub struct DatasetCache {
    loader: Option<Loader>,
    cell: OnceCell<Arc<DataContext>>,
}

impl DatasetCache {
    pub fn new(client: reqwest::Client, sources: DatasetSources) -> Self {
        Self {
            loader: Some(Loader { client, sources }),
            cell: OnceCell::new(),
        }
    }

    /// A cache that already holds `context` and never fetches.
    pub fn preloaded(context: DataContext) -> Self {
        Self {
            loader: None,
            cell: OnceCell::new_with(Some(Arc::new(context))),
        }
    }

    pub async fn get(&self) -> Result<Arc<DataContext>, LoadError> {
        let context = self
            .cell
            .get_or_try_init(|| async {
                let loader = self.loader.as_ref().ok_or(LoadError::NotConfigured)?;
                load(&loader.client, &loader.sources).await.map(Arc::new)
            })
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Dataset load failed"))?;
        Ok(Arc::clone(context))
    }

    /// The cached tables, if a load has already succeeded.
    pub fn loaded(&self) -> Option<Arc<DataContext>> {
        self.cell.get().cloned()
    }
}
