//! Header: toolbar, address bar and the tab strip

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs};
use ratatui::Frame;

use crate::app::{App, Mode};
use crate::ui::truncate;

/// Toolbar plus the address input, in one bordered row.
pub fn draw_address_bar(frame: &mut Frame, app: &App, area: Rect) {
    let browser = &app.browser;

    let dim = Style::new().fg(Color::DarkGray);
    let active = Style::new().fg(Color::White);

    let back = if browser.can_go_back() { active } else { dim };
    let forward = if browser.can_go_forward() { active } else { dim };
    let reload = if browser.tabs().active().is_blank() {
        dim
    } else {
        active
    };

    let mut spans = vec![
        Span::styled(" ⌂ ", active),
        Span::styled(" ◀ ", back),
        Span::styled(" ▶ ", forward),
        Span::styled(" ⟳ ", reload),
        Span::raw("  "),
    ];

    // Safety badge for the address as typed
    match browser.current_verdict() {
        Some(verdict) if !verdict.is_safe() => {
            spans.push(Span::styled("⚠ ", Style::new().fg(Color::Red)));
        }
        Some(verdict) if verdict.level == haven_core::SafetyLevel::Secure => {
            spans.push(Span::styled("🔒 ", Style::new().fg(Color::Green)));
        }
        Some(_) => {
            spans.push(Span::styled("○ ", Style::new().fg(Color::Yellow)));
        }
        None => spans.push(Span::raw("  ")),
    }

    let editing = app.mode == Mode::EditAddress;
    if browser.address_text().is_empty() && !editing {
        spans.push(Span::styled("Search or enter address", dim));
    } else {
        spans.push(Span::raw(browser.address_text().to_string()));
    }
    if editing {
        spans.push(Span::styled("▏", Style::new().fg(Color::Cyan)));
    }

    if browser.is_current_bookmarked() {
        spans.push(Span::styled(" ★ ", Style::new().fg(Color::Yellow)));
    } else {
        spans.push(Span::styled(" ☆ ", dim));
    }

    let line = Line::from(spans);

    let block = Block::bordered().border_style(if editing {
        Style::new().fg(Color::Cyan)
    } else {
        Style::new().fg(Color::DarkGray)
    });

    frame.render_widget(Paragraph::new(line).block(block), area);
}

pub fn draw_tab_strip(frame: &mut Frame, app: &App, area: Rect) {
    let strip = app.browser.tabs();

    let titles: Vec<Line> = strip
        .tabs()
        .iter()
        .map(|tab| {
            let glyph = if tab.is_secure {
                Span::styled("● ", Style::new().fg(Color::Green))
            } else {
                Span::styled("● ", Style::new().fg(Color::Red))
            };
            Line::from(vec![glyph, Span::raw(truncate(tab.display_title(), 18))])
        })
        .collect();

    let selected = strip.position(strip.active_id()).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::new()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::new().fg(Color::DarkGray)));

    frame.render_widget(tabs, area);
}
