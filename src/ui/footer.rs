use crate::pipeline::ViewModel;
use crate::ui::theme::{ACCENT, DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ←/→: Page │ Home/End: First/Last │ Esc: Clear │ Ctrl+R: Refresh │ Ctrl+Q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, view: &ViewModel) -> Paragraph<'static> {
        let enabled = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(DISABLED_TEXT);
        let pager = Line::from(vec![
            Span::styled("◀ Prev", if view.has_prev() { enabled } else { disabled }),
            Span::styled(
                format!("   Page {} of {}   ", view.current_page, view.total_pages),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled("Next ▶", if view.has_next() { enabled } else { disabled }),
        ])
        .alignment(Alignment::Center);

        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = HINTS.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let hints = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(vec![pager, hints]).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
