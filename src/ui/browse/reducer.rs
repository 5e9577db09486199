use crate::pipeline::{clamp_page, PageBounds};
use crate::ui::browse::intent::ViewIntent;
use crate::ui::browse::state::ViewState;
use crate::ui::mvi::Reducer;

/// Search and pagination transitions.
///
/// Any change to the search term lands on page 1. Page moves are clamped to
/// the bounds of the current filter and never wrap.
pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;
    type Context = PageBounds;

    fn reduce(state: Self::State, intent: Self::Intent, bounds: &PageBounds) -> Self::State {
        let total = bounds.total_pages;
        match intent {
            ViewIntent::SearchChanged { term } => first_page(term),
            ViewIntent::SearchInput(ch) => {
                let mut term = state.search_term;
                term.push(ch);
                first_page(term)
            }
            ViewIntent::SearchBackspace => {
                if state.search_term.is_empty() {
                    return state;
                }
                let mut term = state.search_term;
                term.pop();
                first_page(term)
            }
            ViewIntent::SearchCleared => first_page(String::new()),
            ViewIntent::PrevPage => ViewState {
                current_page: clamp_page(state.current_page.saturating_sub(1), total),
                ..state
            },
            ViewIntent::NextPage => ViewState {
                current_page: clamp_page(state.current_page.saturating_add(1), total),
                ..state
            },
            ViewIntent::FirstPage => ViewState {
                current_page: 1,
                ..state
            },
            ViewIntent::LastPage => ViewState {
                current_page: total.max(1),
                ..state
            },
            ViewIntent::Reconcile => ViewState {
                current_page: clamp_page(state.current_page, total),
                ..state
            },
        }
    }
}

fn first_page(search_term: String) -> ViewState {
    ViewState {
        search_term,
        current_page: 1,
    }
}
