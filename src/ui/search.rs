//! Search screen: header, dog table and pagination.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::footer::render_footer;
use super::helpers::{format_age, spinner_frame, truncate_to_width};
use super::panels::{render_breeds_panel, render_favorites_panel};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_FAVORITE, COLOR_HEADER,
    COLOR_LOADING, COLOR_SELECTION_BG,
};
use crate::app::{App, Focus};
use crate::state::total_pages;

/// Width of the breeds/favorites column
const SIDEBAR_WIDTH: u16 = 34;

pub fn render_search_screen(frame: &mut Frame, app: &App) {
    let [header_area, body_area, pagination_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [sidebar_area, results_area] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .areas(body_area);
    let [breeds_area, favorites_area] =
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(sidebar_area);

    render_header(frame, header_area, app);
    render_breeds_panel(frame, breeds_area, app);
    render_favorites_panel(frame, favorites_area, app);
    render_results(frame, results_area, app);
    render_pagination(frame, pagination_area, app);
    render_footer(frame, footer_area, app);
}

/// Border style for a panel depending on focus
pub(super) fn panel_block(title: Line<'_>, focused: bool) -> Block<'_> {
    let border = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let user = app
        .session
        .user()
        .map(|u| format!("{} <{}>", u.name, u.email))
        .unwrap_or_default();

    let breeds = if app.criteria.selected_breeds().is_empty() {
        "All breeds".to_string()
    } else {
        app.criteria.selected_breeds().join(", ")
    };

    let line = Line::from(vec![
        Span::styled(
            " fetch-dogs ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(user, Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled("Sort: ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!(
                "{} ({})",
                app.criteria.sort_field().label(),
                app.criteria.sort_order().label()
            ),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::raw("  "),
        Span::styled("Filter: ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            truncate_to_width(&breeds, area.width.saturating_sub(60) as usize),
            Style::default().fg(COLOR_ACCENT),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let results = &app.results;

    let mut title = vec![Span::styled(
        format!(" Dogs ({}) ", results.total()),
        Style::default().fg(COLOR_HEADER),
    )];
    if results.is_loading() {
        title.push(Span::styled(
            format!("{} ", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_LOADING),
        ));
    }
    let block = panel_block(Line::from(title), app.focus == Focus::Results);

    if results.dogs().is_empty() {
        let text = if results.is_loading() {
            "Loading dogs..."
        } else {
            "No dogs found."
        };
        let empty = Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["", "Name", "Breed", "Age", "Zip", "Location"])
        .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD));

    let rows = results.dogs().iter().map(|dog| {
        let heart = if app.favorites.contains(&dog.id) {
            Cell::from(Span::styled("\u{2665}", Style::default().fg(COLOR_FAVORITE)))
        } else {
            Cell::from("")
        };
        let location = results
            .location(&dog.zip_code)
            .map(|l| l.short_label())
            .unwrap_or_default();
        Row::new(vec![
            heart,
            Cell::from(dog.name.clone()),
            Cell::from(dog.breed.clone()),
            Cell::from(format_age(dog.age)),
            Cell::from(dog.zip_code.clone()),
            Cell::from(location),
        ])
    });

    let widths = [
        Constraint::Length(2),
        Constraint::Percentage(20),
        Constraint::Percentage(30),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(COLOR_SELECTION_BG))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(results.cursor()));
    frame.render_stateful_widget(table, area, &mut state);
}

/// "Page X of Y" with enabled/disabled previous and next markers.
fn pagination_line(app: &App) -> Line<'static> {
    let criteria = &app.criteria;
    let total = app.results.total();
    let pages = total_pages(total, criteria.page_size()).max(1);

    let enabled = Style::default().fg(COLOR_ACCENT);
    let disabled = Style::default().fg(COLOR_DIM);

    Line::from(vec![
        Span::styled(
            "\u{25c0} Prev [p]",
            if criteria.has_prev() { enabled } else { disabled },
        ),
        Span::raw(format!("   Page {} of {}   ", criteria.page(), pages)),
        Span::styled(
            "[n] Next \u{25b6}",
            if criteria.has_next(total) {
                enabled
            } else {
                disabled
            },
        ),
    ])
}

fn render_pagination(frame: &mut Frame, area: Rect, app: &App) {
    // Centered under the dog table, not the whole row
    let [_, results_area] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)]).areas(area);
    frame.render_widget(
        Paragraph::new(pagination_line(app)).alignment(Alignment::Center),
        results_area,
    );
}
