use crate::cache::FetchStatus;
use crate::pipeline::ViewOutcome;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::{RefreshIndicator, SearchBox, STATUS_WIDTH};
use crate::ui::layout::{centered_rect_by_size, header_columns, layout_regions};
use crate::ui::table::AssetTable;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (search, status) = header_columns(header, STATUS_WIDTH);
    let view = app.view_model();

    frame.render_widget(SearchBox::new(&app.view_state().search_term).widget(), search);
    frame.render_widget(
        RefreshIndicator::from_state(app.cache().state(), app.spinner()).widget(),
        status,
    );

    frame.render_widget(Clear, body);
    let cache = app.cache().state();
    if !cache.has_data() {
        if cache.status == FetchStatus::Error {
            let detail = cache
                .last_error
                .as_ref()
                .map_or("Unknown error", |failure| failure.detail.as_str());
            draw_load_error(frame, body, detail);
        } else {
            draw_loading(frame, body, app.spinner());
        }
    } else {
        match &view.outcome {
            ViewOutcome::Rows => frame.render_widget(AssetTable::new(&view.rows).widget(), body),
            ViewOutcome::NoResults { term } => draw_no_results(frame, body, term),
        }
    }

    frame.render_widget(Footer::new().widget(footer, &view), footer);
}

fn body_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect, spinner: char) {
    frame.render_widget(body_block(" Assets "), body);
    let line = Line::from(vec![
        Span::styled(format!("{spinner} "), Style::default().fg(ACCENT)),
        Span::styled("Loading assets...", Style::default().fg(HEADER_TEXT)),
    ]);
    let area = centered_rect_by_size(body, line.width() as u16, 1);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_no_results(frame: &mut Frame<'_>, body: Rect, term: &str) {
    frame.render_widget(body_block(" Assets "), body);
    let message = format!("No results found for \"{term}\"");
    let width = message.chars().count() as u16;
    let area = centered_rect_by_size(body, width.min(body.width.saturating_sub(2)), 1);
    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(MUTED_TEXT))),
        area,
    );
}

fn draw_load_error(frame: &mut Frame<'_>, body: Rect, detail: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Could not load assets",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail.to_string(), Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            "Press Ctrl+R to retry",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let height = lines.len() as u16 + 2;
    let width = body.width.saturating_sub(4).min(72);
    let area = centered_rect_by_size(body, width, height);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(body_block(" Error ")),
        area,
    );
}
