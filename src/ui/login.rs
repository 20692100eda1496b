use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::components::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
use super::helpers::{centered_rect, spinner_frame};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LOADING};
use crate::app::{App, LoginField};

const FORM_WIDTH: u16 = 50;
/// title + gap + two fields + gap + message + hint, plus borders
const FORM_HEIGHT: u16 = 2 + 1 + INPUT_FIELD_HEIGHT * 2 + 1 + 1 + 1 + 2;

const LOGO: &str = "fetch-dogs";
const TAGLINE: &str = "Find a shelter dog to adopt";

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let form_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area.inner(Margin::new(1, 1)));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(form_area).inner(Margin::new(2, 0));
    frame.render_widget(block, form_area);

    let [title_area, _, name_area, email_area, _, message_area, hint_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(INPUT_FIELD_HEIGHT),
        Constraint::Length(INPUT_FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            LOGO,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(COLOR_DIM))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let form = &app.login;
    render_input_field(
        frame,
        name_area,
        &InputFieldConfig::new("Name", &form.name)
            .focused(form.field == LoginField::Name && !form.submitting)
            .placeholder("Your name"),
    );
    render_input_field(
        frame,
        email_area,
        &InputFieldConfig::new("Email", &form.email)
            .focused(form.field == LoginField::Email && !form.submitting)
            .placeholder("you@example.com"),
    );

    let message = if form.submitting {
        Line::from(vec![
            Span::styled(spinner_frame(app.tick_count), Style::default().fg(COLOR_LOADING)),
            Span::raw(" Logging in..."),
        ])
    } else if let Some(error) = &form.error {
        Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(error.as_str(), Style::default().fg(COLOR_ERROR)),
        ])
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), message_area);

    let hint = Paragraph::new(Line::from(Span::styled(
        "[Tab] Switch field  [Enter] Log in  [Esc] Quit",
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}
