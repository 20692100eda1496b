//! Color theme constants for the fetch-dogs UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background of the highlighted row
pub const COLOR_SELECTION_BG: Color = Color::Rgb(40, 40, 60);

// ============================================================================
// State Colors
// ============================================================================

/// Favorite marker
pub const COLOR_FAVORITE: Color = Color::Rgb(255, 95, 135);

/// Selected breed checkbox
pub const COLOR_SELECTED: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Spinner / in-flight requests
pub const COLOR_LOADING: Color = Color::Cyan;

/// Inline errors
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for dialog boxes (match result)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
