//! Side-panel sections rendered into the content area

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use haven_core::{DownloadState, PanelSection, PrefToggle};

use crate::app::{App, Mode, ProfileField};

pub fn draw(frame: &mut Frame, app: &App, area: Rect, section: PanelSection) {
    match section {
        PanelSection::Extensions => draw_extensions(frame, app, area),
        PanelSection::Settings => draw_settings(frame, app, area),
        PanelSection::History => draw_history(frame, app, area),
        PanelSection::Bookmarks => draw_bookmarks(frame, app, area),
        PanelSection::Downloads => draw_downloads(frame, app, area),
        PanelSection::Profile => draw_profile(frame, app, area),
    }
}

fn panel_list(frame: &mut Frame, app: &App, area: Rect, title: &str, items: Vec<ListItem>) {
    let list = List::new(items)
        .block(Block::bordered().title(format!(" {title} ")))
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn switch(enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled("[on] ", Style::new().fg(Color::Green))
    } else {
        Span::styled("[off]", Style::new().fg(Color::DarkGray))
    }
}

fn draw_extensions(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .browser
        .extensions()
        .list()
        .iter()
        .map(|ext| {
            ListItem::new(vec![
                Line::from(vec![
                    switch(ext.enabled),
                    Span::raw(" "),
                    Span::styled(
                        ext.name.clone(),
                        Style::new().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("      {}", ext.description),
                    Style::new().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    panel_list(frame, app, area, "Extensions (Space to toggle)", items);
}

fn draw_settings(frame: &mut Frame, app: &App, area: Rect) {
    let prefs = app.browser.preferences();

    let mut items = Vec::new();
    for toggle in PrefToggle::ALL {
        items.push(ListItem::new(Line::from(vec![
            switch(prefs.get(toggle)),
            Span::raw(" "),
            Span::raw(toggle.label()),
            Span::styled(
                format!("  ({})", toggle.group()),
                Style::new().fg(Color::DarkGray),
            ),
        ])));
    }

    panel_list(frame, app, area, "Settings (Space to toggle)", items);
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.browser.history().entries();

    if entries.is_empty() {
        let empty = Paragraph::new("History is empty")
            .style(Style::new().fg(Color::DarkGray))
            .block(Block::bordered().title(" History "));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let lock = if entry.is_secure {
                Span::styled("🔒 ", Style::new().fg(Color::Green))
            } else {
                Span::styled("⚠ ", Style::new().fg(Color::Red))
            };
            ListItem::new(vec![
                Line::from(vec![
                    lock,
                    Span::styled(
                        entry.title.clone(),
                        Style::new().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "   {}  {}",
                        entry.url,
                        entry.visited_at.format("%Y-%m-%d %H:%M")
                    ),
                    Style::new().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    panel_list(
        frame,
        app,
        area,
        "History (Enter open · x remove · c clear all)",
        items,
    );
}

fn draw_bookmarks(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .browser
        .bookmarks()
        .list()
        .iter()
        .map(|bookmark| {
            let folder = bookmark
                .folder
                .as_deref()
                .map(|f| format!("  [{f}]"))
                .unwrap_or_default();
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("★ ", Style::new().fg(Color::Yellow)),
                    Span::styled(
                        bookmark.title.clone(),
                        Style::new().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(folder, Style::new().fg(Color::Cyan)),
                ]),
                Line::from(Span::styled(
                    format!("   {}", bookmark.url),
                    Style::new().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    panel_list(
        frame,
        app,
        area,
        "Bookmarks (Enter open · x remove)",
        items,
    );
}

fn draw_downloads(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .browser
        .downloads()
        .list()
        .iter()
        .map(|download| {
            let (badge, color) = match download.state {
                DownloadState::Completed => ("done", Color::Green),
                DownloadState::Downloading => ("downloading", Color::Cyan),
                DownloadState::Paused => ("paused", Color::Yellow),
            };

            let progress = if download.state == DownloadState::Completed {
                String::new()
            } else {
                format!("  {}%", download.progress)
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("⇣ ", Style::new().fg(Color::Cyan)),
                    Span::styled(
                        download.file_name.clone(),
                        Style::new().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  [{badge}]{progress}"),
                        Style::new().fg(color),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {}  {}", download.size_display(), download.url),
                    Style::new().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    panel_list(
        frame,
        app,
        area,
        "Downloads (Space pause/resume)",
        items,
    );
}

fn draw_profile(frame: &mut Frame, app: &App, area: Rect) {
    let profile = app.browser.profile();

    let field_line = |label: &str, value: &str, field: ProfileField| -> Line<'static> {
        if app.mode == Mode::EditProfile(field) {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::new().fg(Color::DarkGray)),
                Span::raw(app.input.clone()),
                Span::styled("▏", Style::new().fg(Color::Cyan)),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::new().fg(Color::DarkGray)),
                Span::raw(value.to_string()),
            ])
        }
    };

    let items = vec![
        ListItem::new(field_line("Name ", &profile.name, ProfileField::Name)),
        ListItem::new(field_line("Email", &profile.email, ProfileField::Email)),
    ];

    panel_list(frame, app, area, "Profile (Enter to edit a field)", items);
}
