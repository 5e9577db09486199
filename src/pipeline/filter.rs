//! Name search.

use crate::assets::Asset;

/// Case-insensitive substring match on `name`. An empty term matches all.
pub fn filter_assets<'a>(assets: &'a [Asset], search_term: &str) -> Vec<&'a Asset> {
    let needle = search_term.to_lowercase();
    assets
        .iter()
        .filter(|asset| needle.is_empty() || asset.name.to_lowercase().contains(&needle))
        .collect()
}
