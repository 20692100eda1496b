//! Match result overlay.

use ratatui::{prelude::*, widgets::Paragraph};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::format_age;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_FAVORITE};
use crate::app::App;

pub fn render_match_dialog(frame: &mut Frame, app: &App) {
    if !app.match_visible {
        return;
    }
    let Some(dog) = &app.matched else {
        return;
    };

    let label = Style::default().fg(COLOR_DIM);
    let value = Style::default().fg(COLOR_ACCENT);
    let location = app
        .results
        .location(&dog.zip_code)
        .map(|l| format!("{} ({})", dog.zip_code, l.short_label()))
        .unwrap_or_else(|| dog.zip_code.clone());

    let lines = vec![
        Line::from(Span::styled(
            format!("\u{2665} {}", dog.name),
            Style::default()
                .fg(COLOR_FAVORITE)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(vec![Span::styled("Breed:  ", label), Span::styled(dog.breed.clone(), value)]),
        Line::from(vec![Span::styled("Age:    ", label), Span::styled(format_age(dog.age), value)]),
        Line::from(vec![Span::styled("Zip:    ", label), Span::styled(location, value)]),
        Line::from(vec![Span::styled("Photo:  ", label), Span::styled(dog.img.clone(), value)]),
        Line::default(),
        Line::from(Span::styled("[Enter] Close", label)).alignment(Alignment::Center),
    ];

    let config = DialogFrameConfig::new("It's a match!", lines.len() as u16 + 2)
        .min_width(40)
        .max_width(72);
    let inner = render_dialog_frame(frame, frame.area(), &config);
    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: false }),
        inner.inner(Margin::new(1, 0)),
    );
}
