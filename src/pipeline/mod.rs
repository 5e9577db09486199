//! Pure derivation of what the table shows.
//!
//! `(assets, search term, page, page size) -> ViewModel`: filter by name,
//! paginate, then format each numeric column. Recomputed on every frame, so
//! nothing here caches or mutates.

mod filter;
mod format;
mod paginate;

pub use filter::filter_assets;
pub use format::{format_compact, format_price, format_quantity, format_usd_compact, PLACEHOLDER};
pub use paginate::{clamp_page, page_slice, total_pages, PageBounds, DEFAULT_PAGE_SIZE};

use crate::assets::Asset;

/// One table row, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub rank: String,
    pub name: String,
    pub symbol: Option<String>,
    pub price: String,
    pub market_cap: String,
    pub supply: String,
    pub volume_24h: String,
}

impl DisplayRow {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            rank: asset.rank.clone(),
            name: asset.name.clone(),
            symbol: asset.symbol.clone(),
            price: format_price(asset.price()),
            market_cap: format_usd_compact(asset.market_cap()),
            supply: format_quantity(asset.circulating_supply()),
            volume_24h: format_usd_compact(asset.volume_24h()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    Rows,
    /// Nothing matched the search term. Informational, not an error.
    NoResults { term: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub rows: Vec<DisplayRow>,
    /// Always within `[1, max(total_pages, 1)]`.
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub outcome: ViewOutcome,
}

impl ViewModel {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

pub fn derive_view(
    assets: &[Asset],
    search_term: &str,
    current_page: usize,
    page_size: usize,
) -> ViewModel {
    let filtered = filter_assets(assets, search_term);
    let total_pages = total_pages(filtered.len(), page_size);
    let current_page = clamp_page(current_page, total_pages);
    let rows = page_slice(&filtered, current_page, page_size)
        .iter()
        .map(|asset| DisplayRow::from_asset(asset))
        .collect();
    let outcome = if filtered.is_empty() {
        ViewOutcome::NoResults {
            term: search_term.to_string(),
        }
    } else {
        ViewOutcome::Rows
    };

    ViewModel {
        rows,
        current_page,
        total_pages,
        filtered_count: filtered.len(),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(count: usize) -> Vec<Asset> {
        (1..=count)
            .map(|rank| Asset {
                rank: rank.to_string(),
                name: format!("Coin {rank}"),
                price_usd: Some("1234.5".to_string()),
                market_cap_usd: Some("1234567".to_string()),
                supply: Some("999".to_string()),
                volume_usd_24h: Some("not-a-number".to_string()),
                ..Asset::default()
            })
            .collect()
    }

    fn ranks(view: &ViewModel) -> Vec<&str> {
        view.rows.iter().map(|row| row.rank.as_str()).collect()
    }

    #[test]
    fn first_page_of_twelve() {
        let view = derive_view(&assets(12), "", 1, DEFAULT_PAGE_SIZE);
        assert_eq!(ranks(&view), ["1", "2", "3", "4", "5"]);
        assert_eq!(view.total_pages, 3);
        assert!(!view.has_prev());
        assert!(view.has_next());
        assert_eq!(view.outcome, ViewOutcome::Rows);
    }

    #[test]
    fn last_page_of_twelve() {
        let view = derive_view(&assets(12), "", 3, DEFAULT_PAGE_SIZE);
        assert_eq!(ranks(&view), ["11", "12"]);
        assert!(view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let view = derive_view(&assets(12), "", 7, DEFAULT_PAGE_SIZE);
        assert_eq!(view.current_page, 3);
        let view = derive_view(&assets(12), "", 0, DEFAULT_PAGE_SIZE);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn rows_are_formatted() {
        let view = derive_view(&assets(1), "", 1, DEFAULT_PAGE_SIZE);
        let row = &view.rows[0];
        assert_eq!(row.price, "$1,234.50");
        assert_eq!(row.market_cap, "$1.23M");
        assert_eq!(row.supply, "999");
        assert_eq!(row.volume_24h, PLACEHOLDER);
    }

    #[test]
    fn no_match_reports_term() {
        let view = derive_view(&assets(12), "zzz", 1, DEFAULT_PAGE_SIZE);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.current_page, 1);
        assert!(!view.has_prev());
        assert!(!view.has_next());
        assert_eq!(
            view.outcome,
            ViewOutcome::NoResults {
                term: "zzz".to_string()
            }
        );
    }

    #[test]
    fn search_narrows_pages() {
        // "Coin 1", "Coin 10", "Coin 11", "Coin 12"
        let view = derive_view(&assets(12), "coin 1", 1, DEFAULT_PAGE_SIZE);
        assert_eq!(view.filtered_count, 4);
        assert_eq!(view.total_pages, 1);
    }
}
