//! Input Field Component
//!
//! A labelled single-line text input with focus handling and a block cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Rows used by one field: label (1) + input box (3)
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text shown inside the box
    fn display_text(&self) -> String {
        let mut content = match self.placeholder {
            Some(placeholder) if self.value.is_empty() && !self.focused => placeholder.to_string(),
            _ => self.value.to_string(),
        };
        if self.focused {
            content.push('\u{2588}');
        }
        content
    }
}

/// Render the field at the top of `area`. Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let focus_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let label_area = Rect {
        height: 1.min(area.height),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, focus_style))),
        label_area,
    );

    let input_area = Rect {
        y: area.y + 1,
        height: 3.min(area.height.saturating_sub(1)),
        ..area
    };
    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let text_style = if config.value.is_empty() {
        Style::default().fg(COLOR_DIM)
    } else {
        focus_style
    };
    let input = Paragraph::new(Line::from(Span::styled(config.display_text(), text_style)))
        .block(block);
    frame.render_widget(input, input_area);

    INPUT_FIELD_HEIGHT
}
