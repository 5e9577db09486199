use crate::cache::{FetchCacheState, FetchStatus};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const STATUS_WIDTH: u16 = 32;

/// Search input, always focused.
pub struct SearchBox<'a> {
    term: &'a str,
}

impl<'a> SearchBox<'a> {
    pub fn new(term: &'a str) -> Self {
        Self { term }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let line = if self.term.is_empty() {
            Line::from(Span::styled(
                "Search by name...",
                Style::default().fg(MUTED_TEXT),
            ))
        } else {
            Line::from(vec![
                Span::styled(self.term, Style::default().fg(HEADER_TEXT)),
                Span::styled("▏", Style::default().fg(ACCENT)),
            ])
        };

        Paragraph::new(line).block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Refresh control state shown next to the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshIndicator {
    /// Refresh available.
    Ready,
    /// Fetch in flight; the refresh control is disabled.
    InFlight { label: &'static str, spinner: char },
    /// Last fetch failed. Cached rows, if any, are still on screen.
    Failed { summary: &'static str },
}

impl RefreshIndicator {
    pub fn from_state(state: &FetchCacheState, spinner: char) -> Self {
        match state.status {
            FetchStatus::Loading => Self::InFlight {
                label: "Loading...",
                spinner,
            },
            FetchStatus::Refreshing => Self::InFlight {
                label: "Refreshing...",
                spinner,
            },
            FetchStatus::Error => Self::Failed {
                summary: state
                    .last_error
                    .as_ref()
                    .map_or("Refresh failed", |failure| failure.summary),
            },
            FetchStatus::Idle | FetchStatus::Success => Self::Ready,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = match self {
            Self::Ready => Line::from(vec![
                Span::styled("● ", Style::default().fg(STATUS_OK)),
                Span::styled("Ctrl+R Refresh", Style::default().fg(HEADER_TEXT)),
            ]),
            Self::InFlight { label, spinner } => Line::from(vec![
                Span::styled(format!("{spinner} "), Style::default().fg(ACCENT)),
                Span::styled(
                    *label,
                    Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
                ),
            ]),
            Self::Failed { summary } => Line::from(vec![
                Span::styled("✖ ", Style::default().fg(STATUS_ERROR)),
                Span::styled(*summary, Style::default().fg(STATUS_ERROR)),
            ]),
        };

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
