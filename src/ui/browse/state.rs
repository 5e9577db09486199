use crate::ui::mvi::UiState;

/// Search term and page number. Everything else on screen is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
        }
    }
}

impl UiState for ViewState {}
