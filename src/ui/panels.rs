//! Sidebar panels: breed filter and favorites.

use ratatui::{
    prelude::*,
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::helpers::{format_age, truncate_to_width};
use super::search::panel_block;
use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_FAVORITE, COLOR_HEADER, COLOR_SELECTED, COLOR_SELECTION_BG,
};
use crate::app::{App, Focus};
use crate::state::NO_BREEDS_FOUND;

pub fn render_breeds_panel(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Breeds;
    let selected = app.criteria.selected_breeds().len();
    let title = if selected > 0 {
        format!(" Breeds ({} selected) ", selected)
    } else {
        " Breeds ".to_string()
    };
    let block = panel_block(
        Line::from(Span::styled(title, Style::default().fg(COLOR_HEADER))),
        focused,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [query_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let picker = &app.breeds;
    let mut query = format!("/ {}", picker.query());
    if focused {
        query.push('\u{2588}');
    }
    let query_style = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(Paragraph::new(Span::styled(query, query_style)), query_area);

    if !picker.is_loaded() {
        frame.render_widget(
            Paragraph::new(Span::styled("Loading breeds...", Style::default().fg(COLOR_DIM))),
            list_area,
        );
        return;
    }

    let visible = picker.visible();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(NO_BREEDS_FOUND, Style::default().fg(COLOR_DIM))),
            list_area,
        );
        return;
    }

    let name_width = (list_area.width as usize).saturating_sub(6);
    let items: Vec<ListItem> = visible
        .iter()
        .map(|breed| {
            let (mark, style) = if app.criteria.is_selected(breed) {
                ("[x] ", Style::default().fg(COLOR_SELECTED))
            } else {
                ("[ ] ", Style::default().fg(COLOR_DIM))
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, style),
                Span::raw(truncate_to_width(breed, name_width)),
            ]))
        })
        .collect();

    let mut list = List::new(items);
    if focused {
        list = list.highlight_style(Style::default().bg(COLOR_SELECTION_BG));
    }
    let mut state = ListState::default().with_selected(Some(picker.cursor()));
    frame.render_stateful_widget(list, list_area, &mut state);
}

pub fn render_favorites_panel(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Favorites;
    let title = Line::from(vec![
        Span::styled(" Favorites ", Style::default().fg(COLOR_HEADER)),
        Span::styled(
            format!("({}) ", app.favorites.len()),
            Style::default().fg(COLOR_FAVORITE),
        ),
    ]);
    let block = panel_block(title, focused);

    if app.favorites.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(Span::styled("No favorites yet.", Style::default().fg(COLOR_DIM))),
            Line::from(Span::styled(
                "[f] on a dog to add it",
                Style::default().fg(COLOR_DIM),
            )),
        ])
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let width = (area.width as usize).saturating_sub(4);
    let items: Vec<ListItem> = app
        .favorites
        .dogs()
        .iter()
        .map(|dog| {
            let text = format!("{} \u{b7} {} \u{b7} {}", dog.name, dog.breed, format_age(dog.age));
            ListItem::new(truncate_to_width(&text, width))
        })
        .collect();

    let mut list = List::new(items).block(block);
    if focused {
        list = list.highlight_style(Style::default().bg(COLOR_SELECTION_BG));
    }
    let mut state = ListState::default().with_selected(Some(app.favorites_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
