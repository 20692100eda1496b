//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Handles background clearing
//! and responsive sizing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

/// Below this terminal width a dialog takes almost the whole row
const NARROW_WIDTH: u16 = 60;

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Minimum width
    pub min_width: u16,
    /// Maximum width
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Dialog width for a terminal `area_width` columns wide
fn calculate_dialog_width(config: &DialogFrameConfig, area_width: u16) -> u16 {
    let available = area_width.saturating_sub(4);
    if area_width < NARROW_WIDTH {
        return available.min(config.max_width);
    }
    (area_width / 2)
        .clamp(config.min_width, config.max_width)
        .min(available)
}

/// Render a dialog frame centered in `area` and return the inner content area
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    let dialog_width = calculate_dialog_width(config, area.width);
    let dialog_height = (config.content_height + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
