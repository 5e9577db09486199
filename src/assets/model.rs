//! Wire model for the `/v2/assets` listing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::FetchError;

/// One priced instrument as returned by the upstream API.
///
/// Numeric values arrive as text and stay text here; use the accessor
/// methods to get them as `f64`. Upstream fields not listed are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default, deserialize_with = "text")]
    pub rank: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub price_usd: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub market_cap_usd: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub supply: Option<String>,
    #[serde(default, rename = "volumeUsd24Hr", deserialize_with = "optional_text")]
    pub volume_usd_24h: Option<String>,
}

impl Asset {
    pub fn price(&self) -> Option<f64> {
        parse_numeric(self.price_usd.as_deref())
    }

    pub fn market_cap(&self) -> Option<f64> {
        parse_numeric(self.market_cap_usd.as_deref())
    }

    pub fn circulating_supply(&self) -> Option<f64> {
        parse_numeric(self.supply.as_deref())
    }

    pub fn volume_24h(&self) -> Option<f64> {
        parse_numeric(self.volume_usd_24h.as_deref())
    }
}

/// Parses a numeric-as-text field.
///
/// Missing, blank, unparseable and non-finite values all yield `None`.
pub fn parse_numeric(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Decodes a response body shaped `{ "data": [Asset, ...] }`.
///
/// Only invalid JSON is an error. A body without a `data` array decodes to an
/// empty list, and entries that are not asset objects are skipped.
pub fn decode_assets(body: &[u8]) -> Result<Vec<Asset>, FetchError> {
    let value: Value = serde_json::from_slice(body)?;
    let Some(Value::Array(items)) = value.get("data") else {
        tracing::debug!("Assets response has no data array; treating as empty");
        return Ok(Vec::new());
    };

    let assets: Vec<Asset> = items
        .iter()
        .filter_map(|item| Asset::deserialize(item).ok())
        .collect();

    let skipped = items.len() - assets.len();
    if skipped > 0 {
        tracing::debug!(skipped, "Skipped malformed asset entries");
    }
    Ok(assets)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}
