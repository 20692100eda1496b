//! Reusable UI Components
//!
//! - `InputField` - Text input with focus handling and a cursor
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
