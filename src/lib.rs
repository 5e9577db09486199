//! coinboard: a terminal price board for crypto assets.
//!
//! ```text
//! AssetSource ──→ FetchCache ──→ pipeline::derive_view ──→ ui::render
//!                     ↑                  ↑
//!               fetch outcome     ViewState (search, page)
//! ```

pub mod assets;
pub mod cache;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod ui;
