//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports, unreachable_code)]

pub mod mock_upstream;

use async_trait::async_trait;
use coinboard::assets::{Asset, AssetSource, FetchError};
use coinboard::cache::{CompletionSink, FetchCache, FetchOutcome};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, Notify};

// -- Fixtures -----------------------------------------------------------------

pub fn asset(rank: usize, name: &str) -> Asset {
    Asset {
        rank: rank.to_string(),
        name: name.to_string(),
        symbol: Some(name.chars().take(3).collect::<String>().to_uppercase()),
        price_usd: Some(format!("{}.5", 1000 * rank)),
        market_cap_usd: Some("1234567".to_string()),
        supply: Some("999".to_string()),
        volume_usd_24h: Some("2500000000".to_string()),
    }
}

/// `count` assets ranked 1..=count and named "Coin <rank>".
pub fn numbered_assets(count: usize) -> Vec<Asset> {
    (1..=count).map(|rank| asset(rank, &format!("Coin {rank}"))).collect()
}

pub fn named_assets(names: &[&str]) -> Vec<Asset> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| asset(idx + 1, name))
        .collect()
}

/// JSON body shaped like the upstream listing.
pub fn assets_body(assets: &[Asset]) -> String {
    let data: Vec<Value> = assets
        .iter()
        .map(|a| {
            json!({
                "id": a.name.to_lowercase(),
                "rank": a.rank,
                "symbol": a.symbol,
                "name": a.name,
                "supply": a.supply,
                "maxSupply": null,
                "marketCapUsd": a.market_cap_usd,
                "volumeUsd24Hr": a.volume_usd_24h,
                "priceUsd": a.price_usd,
                "changePercent24Hr": "1.25",
                "vwap24Hr": "1000.0",
            })
        })
        .collect();
    json!({ "data": data, "timestamp": 1_700_000_000_000u64 }).to_string()
}

pub fn status_error(status: u16) -> FetchError {
    FetchError::Status {
        endpoint: "http://stub".to_string(),
        status,
    }
}

// -- Stub source --------------------------------------------------------------

/// Scripted asset source. Each fetch pops the next scripted result; an
/// exhausted script yields an empty list. When gated, each fetch waits for
/// one `release()` before returning.
pub struct StubSource {
    script: Mutex<VecDeque<Result<Vec<Asset>, FetchError>>>,
    gate: Option<Notify>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new(script: Vec<Result<Vec<Asset>, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn gated(script: Vec<Result<Vec<Asset>, FetchError>>) -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::new(script)
        }
    }

    /// Lets one pending (or the next) fetch return.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetSource for StubSource {
    fn endpoint(&self) -> &str {
        "stub://assets"
    }

    async fn fetch_assets(&self) -> Result<Vec<Asset>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Panics on every fetch.
pub struct PanickingSource;

#[async_trait]
impl AssetSource for PanickingSource {
    fn endpoint(&self) -> &str {
        "stub://panics"
    }

    async fn fetch_assets(&self) -> Result<Vec<Asset>, FetchError> {
        panic!("upstream decoder blew up");
    }
}

// -- Cache helpers ------------------------------------------------------------

/// A fetch cache on the current runtime whose outcomes land in the returned
/// channel instead of a UI event loop.
pub fn cache_with<S: AssetSource + 'static>(
    source: Arc<S>,
) -> (FetchCache, mpsc::UnboundedReceiver<FetchOutcome>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink: CompletionSink = Arc::new(move |outcome| {
        let _ = tx.send(outcome);
    });
    let cache = FetchCache::new(source, tokio::runtime::Handle::current(), sink);
    (cache, rx)
}

/// Waits for the next fetch outcome, failing the test after two seconds.
pub async fn next_outcome(rx: &mut mpsc::UnboundedReceiver<FetchOutcome>) -> FetchOutcome {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for fetch outcome")
        .expect("sink dropped")
}
