//! Remote source adapters.

use std::time::Duration;

use serde_json::Value;
use tracing::warn;

use super::error::RemoteFetchError;
use super::record::RemoteRecord;

/// Something that can produce a batch of remote tariffs.
///
/// Closures returning a batch implement this, which keeps tests short:
///
/// ```ignore
/// let source = || -> Result<Vec<RemoteRecord>, RemoteFetchError> {
///     Ok(vec![RemoteRecord::new(100, "A")])
/// };
/// let service = SyncService::new(source, store);
/// ```
pub trait RemoteSource: Send + Sync {
    /// Fetch the current batch. An empty batch means nothing to merge.
    fn fetch(&self) -> Result<Vec<RemoteRecord>, RemoteFetchError>;
}

impl<F> RemoteSource for F
where
    F: Fn() -> Result<Vec<RemoteRecord>, RemoteFetchError> + Send + Sync,
{
    fn fetch(&self) -> Result<Vec<RemoteRecord>, RemoteFetchError> {
        self()
    }
}

/// Reads the batch from a JSON endpoint with a blocking HTTP client.
///
/// The blocking client owns its own runtime; build and use it outside of
/// async contexts (e.g. on the sync worker thread).
pub struct HttpRemoteSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpRemoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteFetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteFetchError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RemoteSource for HttpRemoteSource {
    fn fetch(&self) -> Result<Vec<RemoteRecord>, RemoteFetchError> {
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteFetchError::Status(status.as_u16()));
        }

        let body: Option<Vec<Value>> = response.json()?;
        Ok(decode_batch(body.unwrap_or_default()))
    }
}

/// Decode array elements one by one so a single bad element does not sink
/// the batch.
pub(crate) fn decode_batch(values: Vec<Value>) -> Vec<RemoteRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(position, error = %e, "dropping undecodable remote tariff");
                None
            }
        })
        .collect()
}
