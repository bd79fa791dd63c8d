use crate::error::IngestError;
use crate::model::Rack;
use crate::normalizer;
use crate::store::RackStore;
use tracing::{error, info, warn};

/// Lifecycle of the one startup ingestion.
///
/// `Loading` moves exactly once, to `Ready` or to `Failed`. Both are terminal:
/// a failed feed is not retried for the rest of the session.
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(RackStore),
    Failed(IngestError),
}

impl LoadState {
    /// Applies the ingestion result. Ignored unless still `Loading`.
    pub fn complete(&mut self, result: Result<Vec<Rack>, IngestError>) {
        if !self.is_loading() {
            warn!("ingestion result arrived after the session settled, ignoring");
            return;
        }
        *self = match result {
            Ok(racks) => {
                info!(racks = racks.len(), "rack registry loaded");
                Self::Ready(RackStore::from_racks(racks))
            }
            Err(e) => {
                error!(error = ?e, "rack feed ingestion failed");
                Self::Failed(e)
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn store(&self) -> Option<&RackStore> {
        match self {
            Self::Ready(store) => Some(store),
            _ => None,
        }
    }

    pub fn store_mut(&mut self) -> Option<&mut RackStore> {
        match self {
            Self::Ready(store) => Some(store),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&IngestError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<String, IngestError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

/// Fetches the feed once and normalizes it. No retry on failure.
pub async fn ingest_feed(client: &reqwest::Client, url: &str) -> Result<Vec<Rack>, IngestError> {
    let body = fetch_feed(client, url).await?;
    normalizer::ingest(&body)
}
