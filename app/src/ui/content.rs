//! Main content area: home page, simulated page, warning interstitial and
//! search results

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use haven_core::ContentMode;

use crate::app::App;
use crate::ui::{sections, truncate};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    match app.browser.content_mode() {
        ContentMode::Panel(section) => sections::draw(frame, app, area, section),
        ContentMode::SearchResults => draw_search_results(frame, app, area),
        ContentMode::HomePage => draw_home(frame, app, area),
        ContentMode::Warning => draw_warning(frame, app, area),
        ContentMode::Page => draw_page(frame, app, area),
    }
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let [banner_area, sites_area, cards_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(4),
        Constraint::Length(6),
    ])
    .areas(area);

    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to Haven",
            Style::new()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A browser shell with reinforced protection against malicious sites",
            Style::new().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(banner, banner_area);

    // Popular sites: the bookmark tiles, selectable with the list cursor
    let items: Vec<ListItem> = app
        .browser
        .bookmarks()
        .list()
        .iter()
        .map(|bookmark| {
            ListItem::new(Line::from(vec![
                Span::styled("◉ ", Style::new().fg(Color::Cyan)),
                Span::raw(bookmark.title.clone()),
                Span::styled(
                    format!("  {}", bookmark.url),
                    Style::new().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::bordered().title(" Popular sites (Enter to open) "))
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(list, sites_area, &mut state);

    let [left, middle, right] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(cards_area);

    feature_card(
        frame,
        left,
        "Threat protection",
        "Every address is checked against known danger markers before it loads.",
    );
    feature_card(
        frame,
        middle,
        "Secure connections",
        "HTTPS pages are labeled so you always know when traffic is encrypted.",
    );
    feature_card(
        frame,
        right,
        "Privacy controls",
        "Tracker blocking and Do Not Track, one toggle away in Settings.",
    );
}

fn feature_card(frame: &mut Frame, area: Rect, title: &str, body: &str) {
    let card = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(format!(" {title} ")));
    frame.render_widget(card, area);
}

fn draw_warning(frame: &mut Frame, app: &App, area: Rect) {
    let tab = app.browser.tabs().active();

    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            "⚠  Warning! This site may be dangerous",
            Style::new()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw(truncate(
            &tab.url,
            (area.width as usize).saturating_sub(4),
        ))),
        Line::from(""),
        Line::from(Span::raw(
            "This site may contain malware or try to steal your data.",
        )),
        Line::from(Span::raw("We recommend not continuing.")),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Esc / g ",
                Style::new().bg(Color::Red).fg(Color::Black),
            ),
            Span::raw(" Return to safety    "),
            Span::styled(" p ", Style::new().bg(Color::DarkGray)),
            Span::raw(" Proceed (not recommended)"),
        ]),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_style(Style::new().fg(Color::Red))
                .title(" Blocked by safe browsing "),
        );
    frame.render_widget(paragraph, area);
}

fn draw_page(frame: &mut Frame, app: &App, area: Rect) {
    let tab = app.browser.tabs().active();

    if tab.is_blank() {
        let placeholder = Paragraph::new("Press / and type an address to start browsing")
            .style(Style::new().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    }

    let badge = if tab.is_secure {
        Span::styled("✓ Safe", Style::new().fg(Color::Green))
    } else {
        Span::styled("⚠ Dangerous", Style::new().fg(Color::Red))
    };

    let text = Text::from(vec![
        Line::from(""),
        Line::from(badge),
        Line::from(""),
        Line::from(Span::styled(
            tab.display_title().to_string(),
            Style::new().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Loading: {}", tab.url),
            Style::new().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "(simulated page: nothing is actually fetched)",
            Style::new().fg(Color::DarkGray),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::new().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

fn draw_search_results(frame: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.browser.search_session() else {
        return;
    };

    let items: Vec<ListItem> = session
        .results
        .iter()
        .map(|result| {
            let lock = if result.is_secure {
                Span::styled("🔒 ", Style::new().fg(Color::Green))
            } else {
                Span::styled("⚠ ", Style::new().fg(Color::Red))
            };

            ListItem::new(vec![
                Line::from(vec![
                    lock,
                    Span::styled(
                        result.title.clone(),
                        Style::new()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {}", result.url),
                    Style::new().fg(Color::Green),
                )),
                Line::from(Span::raw(format!("   {}", result.description))),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::bordered().title(format!(" Search results for \"{}\" ", session.query)))
        .highlight_style(Style::new().bg(Color::DarkGray));

    let mut state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(list, area, &mut state);
}
