//! Asset records and where they come from.
//!
//! [`AssetSource`] is the seam between the fetch cache and the network;
//! [`HttpAssetSource`] is the production implementation.

mod error;
mod model;
mod source;

pub use error::FetchError;
pub use model::{decode_assets, parse_numeric, Asset};
pub use source::{AssetSource, HttpAssetSource};
