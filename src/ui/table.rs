use crate::pipeline::DisplayRow;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, ROW_STRIPE};
use ratatui::layout::{Alignment, Constraint};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

pub const COLUMNS: [&str; 6] = ["Rank", "Name", "Price", "Market Cap", "Supply", "Volume(24hr)"];

const WIDTHS: [Constraint; 6] = [
    Constraint::Length(6),
    Constraint::Min(18),
    Constraint::Length(16),
    Constraint::Length(12),
    Constraint::Length(12),
    Constraint::Length(14),
];

/// One page of assets.
pub struct AssetTable<'a> {
    rows: &'a [DisplayRow],
}

impl<'a> AssetTable<'a> {
    pub fn new(rows: &'a [DisplayRow]) -> Self {
        Self { rows }
    }

    pub fn widget(&self) -> Table<'a> {
        let header = Row::new(COLUMNS.iter().enumerate().map(|(idx, title)| {
            let line = Line::from(*title);
            Cell::from(if idx >= 2 { line.alignment(Alignment::Right) } else { line })
        }))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

        let rows = self.rows.iter().enumerate().map(|(idx, row)| {
            let mut name = vec![Span::styled(row.name.as_str(), Style::default().fg(HEADER_TEXT))];
            if let Some(symbol) = row.symbol.as_deref() {
                name.push(Span::styled(format!(" {symbol}"), Style::default().fg(MUTED_TEXT)));
            }
            let style = if idx % 2 == 1 {
                Style::default().bg(ROW_STRIPE)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.rank.as_str()),
                Cell::from(Line::from(name)),
                numeric(&row.price),
                numeric(&row.market_cap),
                numeric(&row.supply),
                numeric(&row.volume_24h),
            ])
            .style(style)
        });

        Table::new(rows, WIDTHS).header(header).column_spacing(2).block(
            Block::default()
                .title(" Assets ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn numeric(text: &str) -> Cell<'_> {
    Cell::from(Line::from(text).alignment(Alignment::Right))
}
