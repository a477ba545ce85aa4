use std::path::PathBuf;

use shared_types::DatasetConfig;

use super::{LoadError, TableKind};

/// Location of one source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched with an HTTP GET; redirects are followed.
    Http(String),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl DataSource {
    /// Classify a configured location. Anything that is not an `http(s)://`
    /// URL is treated as a file path, with an optional `file://` prefix.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Http(location.to_string())
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            DataSource::File(PathBuf::from(path))
        }
    }

    pub fn location(&self) -> String {
        match self {
            DataSource::Http(url) => url.clone(),
            DataSource::File(path) => path.display().to_string(),
        }
    }

    /// Fetch the raw bytes of the table.
    pub async fn fetch(
        &self,
        client: &reqwest::Client,
        table: TableKind,
    ) -> Result<Vec<u8>, LoadError> {
        match self {
            DataSource::Http(url) => {
                let response = client.get(url).send().await.map_err(|source| {
                    LoadError::Fetch {
                        table,
                        location: url.clone(),
                        source,
                    }
                })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status {
                        table,
                        location: url.clone(),
                        status: status.as_u16(),
                    });
                }

                let bytes = response.bytes().await.map_err(|source| LoadError::Fetch {
                    table,
                    location: url.clone(),
                    source,
                })?;
                tracing::debug!(%table, location = %url, bytes = bytes.len(), "Fetched table");
                Ok(bytes.to_vec())
            }
            DataSource::File(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Read {
                    table,
                    path: path.display().to_string(),
                    source,
                })?;
                tracing::debug!(%table, path = %path.display(), bytes = bytes.len(), "Read table");
                Ok(bytes)
            }
        }
    }
}

/// The pair of sources the dashboard is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSources {
    pub cases: DataSource,
    pub hearings: DataSource,
}

impl DatasetSources {
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self {
            cases: DataSource::parse(&config.cases_url),
            hearings: DataSource::parse(&config.hearings_url),
        }
    }
}
