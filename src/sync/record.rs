//! Remote tariff records as they arrive from the feed.

use serde::{Deserialize, Serialize};

use super::error::SyncError;
use crate::tariff::{Prices, TariffFields};

/// A tariff as published by the remote feed.
///
/// The feed's `id` is its own identifier, i.e. our `remote_id`. Decoding is
/// lenient; `validate` decides whether the record can be merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoteRecord {
    #[serde(default, rename = "id")]
    pub remote_id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub prices: Option<Prices>,
}

/// A validated remote tariff, ready to upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteTariff {
    pub remote_id: u64,
    pub fields: TariffFields,
}

impl RemoteRecord {
    pub fn new(remote_id: u64, name: impl Into<String>) -> Self {
        Self {
            remote_id: Some(remote_id),
            name: Some(name.into()),
            features: None,
            prices: None,
        }
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.get_or_insert_with(Vec::new).push(feature.into());
        self
    }

    pub fn with_price(mut self, plan: impl Into<String>, price: f64) -> Self {
        self.prices
            .get_or_insert_with(Prices::new)
            .insert(plan.into(), price);
        self
    }

    /// Missing `id` or `name` makes the record unusable. Absent features
    /// and prices are taken as empty.
    pub fn validate(self) -> Result<RemoteTariff, SyncError> {
        let remote_id = self
            .remote_id
            .ok_or_else(|| SyncError::MalformedInput("missing id".into()))?;
        let name = self.name.ok_or_else(|| {
            SyncError::MalformedInput(format!("remote tariff {} has no name", remote_id))
        })?;

        Ok(RemoteTariff {
            remote_id,
            fields: TariffFields {
                name,
                features: self.features.unwrap_or_default(),
                prices: self.prices.unwrap_or_default(),
            },
        })
    }
}
