//! Stateless rendering
//!
//! Every function here is a pure reader of the application state: state in,
//! widgets out. Nothing under `ui` mutates the browser.

mod content;
mod header;
mod sections;
mod sidebar;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode};

const SIDEBAR_WIDTH: u16 = 26;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main = if app.browser.view().sidebar_open {
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(area);
        sidebar::draw(frame, app, sidebar_area);
        main_area
    } else {
        area
    };

    let [header_area, tabs_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(main);

    header::draw_address_bar(frame, app, header_area);
    header::draw_tab_strip(frame, app, tabs_area);
    content::draw(frame, app, content_area);
    draw_status(frame, app, status_area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.mode {
        Mode::EditAddress => "Enter submit · Esc cancel",
        Mode::EditProfile(_) => "Enter save · Esc cancel",
        Mode::Browse => {
            "q quit · / address · t/w/u tabs · Tab switch · ←/→ back/fwd · r reload · g home · 1-6 panels · m sidebar · f star"
        }
    };

    let mut spans = vec![Span::styled(hints, Style::new().fg(Color::DarkGray))];

    if let Some(verdict) = app.browser.current_verdict() {
        let color = if verdict.is_safe() {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(verdict.message, Style::new().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Shorten a label to fit a cell, with an ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
