//! Tariff - the pricing entity held by the registry.
//!
//! A `Tariff` is identified locally by `id`, assigned by the store and never
//! reused. `remote_id` is the foreign identity handed out by the remote feed
//! and is only consulted when reconciling.
//!
//! ## Example
//!
//! ```ignore
//! use tariff_sync::{TariffInput, TariffStore};
//!
//! let store = TariffStore::new();
//! let created = store.create(TariffInput::named("Basic"))?;
//! assert_eq!(created.id, 1);
//! assert_eq!(created.remote_id, None);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Plan name (e.g. `"monthly"`) to price.
pub type Prices = BTreeMap<String, f64>;

/// A stored tariff record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub prices: Prices,
    #[serde(default)]
    pub remote_id: Option<u64>,
}

impl Tariff {
    /// The mutable part of this record.
    pub fn fields(&self) -> TariffFields {
        TariffFields {
            name: self.name.clone(),
            features: self.features.clone(),
            prices: self.prices.clone(),
        }
    }

    /// Replace the mutable fields, leaving `id` and `remote_id` alone.
    pub fn apply(&mut self, fields: TariffFields) {
        self.name = fields.name;
        self.features = fields.features;
        self.prices = fields.prices;
    }
}

/// The fields replaced wholesale by an update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TariffFields {
    pub name: String,
    pub features: Vec<String>,
    pub prices: Prices,
}

/// Request body for manual create and replace.
///
/// An `id` in the body is ignored; the store or the request path decides it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffInput {
    pub name: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub prices: Prices,
    #[serde(default)]
    pub remote_id: Option<u64>,
}

impl TariffInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn with_price(mut self, plan: impl Into<String>, price: f64) -> Self {
        self.prices.insert(plan.into(), price);
        self
    }

    pub fn with_remote_id(mut self, remote_id: u64) -> Self {
        self.remote_id = Some(remote_id);
        self
    }

    /// Build the stored record for the given local id.
    pub fn into_tariff(self, id: u64) -> Tariff {
        Tariff {
            id,
            name: self.name,
            features: self.features,
            prices: self.prices,
            remote_id: self.remote_id,
        }
    }
}
