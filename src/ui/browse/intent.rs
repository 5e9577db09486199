use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    /// Replace the whole search term.
    SearchChanged { term: String },
    /// Append a typed character.
    SearchInput(char),
    /// Delete the last character. No-op on an empty term.
    SearchBackspace,
    SearchCleared,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    /// The asset list changed underneath; re-clamp the page.
    Reconcile,
}

impl Intent for ViewIntent {}
