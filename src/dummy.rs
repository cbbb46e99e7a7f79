//! Dummy tariff data, served by the stand-in remote feed endpoint.

use chrono::{SecondsFormat, Utc};
use rand::seq::index;
use rand::Rng;

use crate::tariff::{Prices, Tariff};

pub const REMOTE_TARIFF_COUNT: usize = 20;
pub const REMOTE_ID_MIN: u64 = 5000;
pub const REMOTE_ID_MAX: u64 = 5050;
pub const PRICE_MIN: f64 = 10.0;
pub const PRICE_MAX: f64 = 100.0;

/// Current UTC time, RFC 3339 with millisecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A batch shaped like the remote feed: `id` is the feed's own identifier,
/// unique within the batch and drawn from `REMOTE_ID_MIN..=REMOTE_ID_MAX`.
pub fn remote_tariffs<R: Rng + ?Sized>(rng: &mut R, timestamp: &str) -> Vec<Tariff> {
    let span = (REMOTE_ID_MAX - REMOTE_ID_MIN + 1) as usize;
    index::sample(rng, span, REMOTE_TARIFF_COUNT)
        .into_iter()
        .enumerate()
        .map(|(position, offset)| Tariff {
            id: REMOTE_ID_MIN + offset as u64,
            name: format!("Remote Tariff  {}", timestamp),
            features: vec![
                if position % 2 == 0 { "Fast" } else { "Faster" }.to_string(),
                if position % 3 == 0 { "Secure" } else { "More Secure" }.to_string(),
            ],
            prices: Prices::from([("monthly".to_string(), rng.gen_range(PRICE_MIN..PRICE_MAX))]),
            remote_id: None,
        })
        .collect()
}
