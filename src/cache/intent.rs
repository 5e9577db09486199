use std::time::SystemTime;

use super::state::{FetchFailure, RequestId};
use crate::assets::Asset;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum FetchIntent {
    /// A fetch was issued.
    Started { request: RequestId },
    /// A fetch returned a list. Ignored unless `request` is the one in flight.
    Succeeded {
        request: RequestId,
        assets: Vec<Asset>,
        at: SystemTime,
    },
    /// A fetch failed. Ignored unless `request` is the one in flight.
    Failed {
        request: RequestId,
        failure: FetchFailure,
    },
}

impl Intent for FetchIntent {}
