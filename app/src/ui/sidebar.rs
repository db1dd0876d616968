//! Sidebar: brand header plus the section menu

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use haven_core::PanelSection;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::new().borders(Borders::RIGHT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [brand_area, menu_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            "⛨ Haven",
            Style::new()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "simulated secure shell",
            Style::new().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(brand, brand_area);

    let view = app.browser.view();
    let items: Vec<ListItem> = PanelSection::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let selected = view.panel_open && view.active_section == *section;
            let marker = if selected { "▸" } else { " " };
            let style = if selected {
                Style::new()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::new()
            };

            let extra = match section {
                PanelSection::Extensions => {
                    format!(" ({})", app.browser.extensions().enabled_count())
                }
                PanelSection::History => format!(" ({})", app.browser.history().len()),
                PanelSection::Bookmarks => format!(" ({})", app.browser.bookmarks().len()),
                PanelSection::Downloads => format!(" ({})", app.browser.downloads().len()),
                _ => String::new(),
            };

            ListItem::new(Line::from(Span::styled(
                format!("{marker} {} {}{extra}", i + 1, section.label()),
                style,
            )))
        })
        .collect();

    frame.render_widget(List::new(items), menu_area);
}
