use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_LOADING};
use crate::app::{App, Focus};

/// Key hints for the focused panel
pub fn contextual_keybinds(app: &App) -> &'static str {
    if app.match_visible {
        return "[Enter/Esc] Close";
    }
    match app.focus {
        Focus::Results => {
            "[f] Favorite  [n/p] Page  [s] Order  [S] Sort by  [/] Breeds  [m] Match  [L] Log out  [q] Quit"
        }
        Focus::Breeds => "Type to filter  [Enter] Toggle  [Del] Clear filter  [Esc] Back  [Tab] Next",
        Focus::Favorites => "[d] Remove  [C] Clear all  [m] Match  [Tab] Next  [q] Quit",
    }
}

/// Status message if one is showing, otherwise key hints.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.match_loading {
        Line::from(vec![
            Span::styled(spinner_frame(app.tick_count), Style::default().fg(COLOR_LOADING)),
            Span::raw(" Finding your match..."),
        ])
    } else if let Some(status) = &app.status {
        Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(COLOR_ACCENT),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", contextual_keybinds(app)),
            Style::default().fg(COLOR_DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}
