// SPDX-License-Identifier: GPL-3.0-only

//! UI rendering

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::Tui;
use crate::{
    app::{
        AppModel,
        utils::presentation::{lookup_error_message, record_card, roster_line, status_lines},
    },
    fl,
};

/// Render the entire UI
pub fn render<A>(frame: &mut Frame, app: &AppModel<A>, tui: &mut Tui) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // List and details
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_search_input(frame, tui, chunks[0]);
    render_roster(frame, app, tui, panels[0]);
    render_details(frame, app, panels[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_search_input(frame: &mut Frame, tui: &Tui, area: Rect) {
    let input = Paragraph::new(tui.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", fl!("search"))),
    );
    frame.render_widget(input, area);

    // Inside the borders, stuck at the right edge once the text overflows
    let typed = u16::try_from(tui.input.chars().count()).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(1).saturating_add(typed);
    frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
}

/// The filtered roster, in roster order
fn render_roster<A>(frame: &mut Frame, app: &AppModel<A>, tui: &mut Tui, area: Rect) {
    let items: Vec<ListItem> = app
        .filtered()
        .into_iter()
        .map(|pokemon| ListItem::new(roster_line(pokemon)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", fl!("app-title"))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, area, &mut tui.list_state);
}

/// The selected Pokémon, or what happened to the last lookup
fn render_details<A>(frame: &mut Frame, app: &AppModel<A>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" {} ", fl!("details")));

    let details = if app.is_busy() {
        Paragraph::new(fl!("searching")).style(Style::default().fg(Color::DarkGray))
    } else if let Some(pokemon) = app.selected() {
        Paragraph::new(record_card(pokemon))
    } else if let Some(error) = app.error() {
        Paragraph::new(lookup_error_message(error)).style(Style::default().fg(Color::Red))
    } else {
        Paragraph::default()
    };

    frame.render_widget(details.block(block).wrap(Wrap { trim: false }), area);
}

fn render_status_bar<A>(frame: &mut Frame, app: &AppModel<A>, area: Rect) {
    let mut status = status_lines(app);
    status.push(fl!("key-hints"));

    let status = Paragraph::new(format!(" {}", status.join(" │ ")))
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
